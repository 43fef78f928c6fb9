use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use super::{
    BackupReminderTracker, OnboardingConditions, OnboardingScheduler, RefreshCoordinator,
    TabSelector,
};
use crate::config::HomeConfig;
use crate::models::{
    ActiveContext, FetchTarget, HomeTab, Platform, PushNotificationSettings, WalletId,
};
use crate::services::HomeServices;

/// Externally owned state the home screen reacts to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeInputs {
    pub context: ActiveContext,
    pub push: PushNotificationSettings,
    pub online: bool,
}

impl HomeInputs {
    pub fn new(context: ActiveContext, push: PushNotificationSettings) -> Self {
        Self {
            context,
            push,
            online: true,
        }
    }
}

/// What the home screen should currently display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HomeView {
    /// No wallet yet; the host shows its create/import flow instead of tabs
    IdentityRequired,
    #[serde(rename_all = "camelCase")]
    Tabs {
        active_tab: HomeTab,
        refreshing: bool,
        /// Wallet to show the backup banner for, if any
        backup_reminder: Option<WalletId>,
        /// Account/network the history tab is scoped to
        history_scope: Option<FetchTarget>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSnapshot {
    pub view: HomeView,
    pub offline: bool,
}

/// Screen-lifetime owner of the home screen logic.
///
/// Build one per mount. Tab choice and the push guide flag live in the
/// shared [`StatusStore`](crate::services::StatusStore); the refreshing flag
/// and backup dismissals die with the controller.
pub struct HomeController {
    platform: Platform,
    tabs: TabSelector,
    refresh: RefreshCoordinator,
    backup: Mutex<BackupReminderTracker>,
    onboarding: OnboardingScheduler,
    inputs: RwLock<HomeInputs>,
    mounted: AtomicBool,
}

impl HomeController {
    /// Wire the components to the current inputs and run the first
    /// onboarding evaluation. Call from within a tokio runtime.
    pub fn mount(services: HomeServices, config: &HomeConfig, inputs: HomeInputs) -> Self {
        let controller = Self {
            platform: config.platform,
            tabs: TabSelector::new(services.status.clone(), config.initial_tab),
            refresh: RefreshCoordinator::new(
                services.price_cache,
                services.tokens,
                config.min_refresh_duration(),
            ),
            backup: Mutex::new(BackupReminderTracker::new()),
            onboarding: OnboardingScheduler::new(
                services.status,
                services.navigator,
                config.eligible_network_ids.clone(),
                config.onboarding_delay(),
            ),
            inputs: RwLock::new(inputs),
            mounted: AtomicBool::new(true),
        };
        tracing::debug!(platform = ?controller.platform, "home mounted");
        controller.reevaluate();
        controller
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> HomeInputs {
        self.inputs.read().clone()
    }

    pub fn set_active_context(&self, context: ActiveContext) {
        {
            let mut inputs = self.inputs.write();
            if inputs.context == context {
                return;
            }
            inputs.context = context;
        }
        self.reevaluate();
    }

    pub fn set_push_settings(&self, push: PushNotificationSettings) {
        {
            let mut inputs = self.inputs.write();
            if inputs.push == push {
                return;
            }
            inputs.push = push;
        }
        self.reevaluate();
    }

    pub fn set_online(&self, online: bool) {
        self.inputs.write().online = online;
    }

    /// Re-run the onboarding gates, e.g. after the shared guide flag changed
    pub fn reevaluate(&self) {
        if !self.is_mounted() {
            return;
        }
        let inputs = self.inputs.read();
        let conditions = OnboardingConditions {
            platform: self.platform,
            account_id: inputs.context.account_id.as_ref(),
            network_id: inputs.context.network_id.as_ref(),
            push: inputs.push,
        };
        // The handle is not needed: unmount cancels through the scheduler.
        let _ = self.onboarding.evaluate(&conditions);
    }

    pub fn is_onboarding_armed(&self) -> bool {
        self.onboarding.is_armed()
    }

    pub fn current_tab(&self) -> HomeTab {
        self.tabs.current_tab()
    }

    pub fn select_tab(&self, tab: HomeTab) {
        self.tabs.select_tab(tab);
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_refreshing()
    }

    /// Start a refresh for the current context. The refreshing flag is
    /// already raised when this returns.
    pub fn refresh(&self) -> impl Future<Output = ()> + Send + 'static {
        let context = self.inputs.read().context.clone();
        self.refresh.trigger_refresh(&context)
    }

    pub fn spawn_refresh(&self) -> JoinHandle<()> {
        tokio::spawn(self.refresh())
    }

    pub fn should_show_backup_reminder(&self) -> bool {
        let inputs = self.inputs.read();
        self.backup.lock().should_show_reminder(inputs.context.wallet.as_ref())
    }

    /// Hide the reminder for the active wallet until the next mount
    pub fn dismiss_backup_reminder(&self) {
        let inputs = self.inputs.read();
        if let Some(wallet) = inputs.context.wallet.as_ref() {
            self.backup.lock().dismiss(wallet);
        }
    }

    pub fn snapshot(&self) -> HomeSnapshot {
        let inputs = self.inputs.read();
        let view = match inputs.context.wallet_id() {
            None => HomeView::IdentityRequired,
            Some(wallet_id) => HomeView::Tabs {
                active_tab: self.current_tab(),
                refreshing: self.is_refreshing(),
                backup_reminder: self
                    .backup
                    .lock()
                    .should_show_reminder(inputs.context.wallet.as_ref())
                    .then(|| wallet_id.clone()),
                history_scope: inputs.context.fetch_target(),
            },
        };
        HomeSnapshot {
            view,
            offline: !inputs.online,
        }
    }

    /// Tear down: cancel a pending push guide and clear the refreshing flag.
    /// In-flight fetches are left to finish on their own.
    pub fn unmount(&self) {
        if !self.mounted.swap(false, Ordering::SeqCst) {
            return;
        }
        self.onboarding.cancel();
        self.refresh.reset();
        tracing::debug!("home unmounted");
    }
}

impl Drop for HomeController {
    fn drop(&mut self) {
        self.unmount();
    }
}
