use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::{json, Value};
use wallet_home_core::home::TabSelector;
use wallet_home_core::{
    ActiveContext, HomeConfig, HomeController, HomeInputs, HomeServices, HomeTab, Platform,
    PushNotificationSettings, StatusPreferences, StatusStore, WalletInfo,
};

use super::simulated::{LoggingPriceCache, RecordingNavigator, SimulatedTokenService};

/// Active wallet/account/network and push state for a simulated mount
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Wallet id (omit to simulate a fresh install with no wallet)
    #[arg(long, short = 'w')]
    pub wallet: Option<String>,

    /// Mark the wallet as backed up
    #[arg(long)]
    pub backuped: bool,

    /// Account id
    #[arg(long, short = 'a')]
    pub account: Option<String>,

    /// Network id
    #[arg(long, short = 'n')]
    pub network: Option<String>,

    /// Push notifications already enabled
    #[arg(long)]
    pub push_enabled: bool,

    /// Override the configured platform (native, desktop, web, extension)
    #[arg(long)]
    pub platform: Option<Platform>,
}

impl SessionArgs {
    fn context(&self) -> ActiveContext {
        ActiveContext::new(
            self.wallet
                .as_deref()
                .map(|id| WalletInfo::new(id, self.backuped)),
            self.account.as_deref().map(Into::into),
            self.network.as_deref().map(Into::into),
        )
    }

    fn inputs(&self) -> HomeInputs {
        HomeInputs::new(self.context(), PushNotificationSettings::new(self.push_enabled))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the home tab, or persist a new one
    Tab {
        /// Tokens, Collectibles or History
        name: Option<HomeTab>,
    },

    /// Run one pull-to-refresh against a simulated token service
    Refresh {
        #[command(flatten)]
        session: SessionArgs,

        /// Make the simulated fetch fail
        #[arg(long)]
        fail: bool,

        /// Simulated fetch latency
        #[arg(long, default_value_t = 200)]
        latency_ms: u64,
    },

    /// Mount the home screen and check the push guide gates
    Onboarding {
        #[command(flatten)]
        session: SessionArgs,

        /// Stay mounted until the guide delay elapses
        #[arg(long)]
        wait: bool,
    },

    /// Forget the stored home tab and push guide flag
    Reset,
}

struct Session {
    prefs: Arc<StatusPreferences>,
    tokens: Arc<SimulatedTokenService>,
    navigator: Arc<RecordingNavigator>,
}

impl Session {
    fn new(prefs: Arc<StatusPreferences>, tokens: SimulatedTokenService) -> Self {
        Self {
            prefs,
            tokens: Arc::new(tokens),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }

    fn services(&self) -> HomeServices {
        HomeServices {
            status: self.prefs.clone(),
            price_cache: Arc::new(LoggingPriceCache),
            tokens: self.tokens.clone(),
            navigator: self.navigator.clone(),
        }
    }

    fn mount(&self, config: &HomeConfig, session: &SessionArgs) -> HomeController {
        let mut config = config.clone();
        if let Some(platform) = session.platform {
            config.platform = platform;
        }
        HomeController::mount(self.services(), &config, session.inputs())
    }
}

/// Execute a command and return its JSON report
pub async fn run(
    command: Command,
    config: &HomeConfig,
    prefs: Arc<StatusPreferences>,
) -> Result<Value> {
    match command {
        Command::Tab { name } => {
            let selector = TabSelector::new(prefs.clone(), config.initial_tab);
            if let Some(tab) = name {
                selector.select_tab(tab);
            }
            Ok(json!({
                "tab": selector.current_tab(),
                "labelKey": selector.current_tab().label_key(),
                "statusFile": prefs.path().display().to_string(),
            }))
        }

        Command::Refresh {
            session,
            fail,
            latency_ms,
        } => {
            let tokens = SimulatedTokenService::new(Duration::from_millis(latency_ms), fail);
            let sim = Session::new(prefs, tokens);
            let home = sim.mount(config, &session);

            let work = home.refresh();
            let raised = home.is_refreshing();
            work.await;

            let report = json!({
                "refreshingRaised": raised,
                "refreshingAfter": home.is_refreshing(),
                "inputs": home.inputs(),
                "requests": sim.tokens.requests(),
                "snapshot": home.snapshot(),
            });
            home.unmount();
            Ok(report)
        }

        Command::Onboarding { session, wait } => {
            let sim = Session::new(prefs, SimulatedTokenService::new(Duration::ZERO, false));
            let home = sim.mount(config, &session);
            let armed = home.is_onboarding_armed();

            if wait && armed {
                tokio::time::sleep(config.onboarding_delay() + Duration::from_millis(50)).await;
            }
            home.unmount();

            Ok(json!({
                "armed": armed,
                "guideToPushFirstTime": sim.prefs.guide_to_push_first_time(),
                "navigations": sim.navigator.routes(),
                "snapshot": home.snapshot(),
            }))
        }

        Command::Reset => {
            prefs.reset();
            Ok(json!({ "reset": true, "statusFile": prefs.path().display().to_string() }))
        }
    }
}

/// Read `--config` if given, else defaults
pub fn load_config(path: Option<&std::path::Path>) -> Result<HomeConfig> {
    match path {
        Some(path) => HomeConfig::load(path).context("Failed to load home config"),
        None => Ok(HomeConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session(args: &[&str]) -> SessionArgs {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            session: SessionArgs,
        }

        let argv = std::iter::once("test").chain(args.iter().copied());
        Wrapper::parse_from(argv).session
    }

    fn fast_config() -> HomeConfig {
        HomeConfig {
            onboarding_delay_ms: 20,
            ..HomeConfig::default()
        }
    }

    #[tokio::test]
    async fn test_tab_persists_between_runs() {
        let dir = tempdir().unwrap();
        let config = HomeConfig::default();

        let prefs = Arc::new(StatusPreferences::new(dir.path()));
        run(Command::Tab { name: Some(HomeTab::History) }, &config, prefs)
            .await
            .unwrap();

        let prefs = Arc::new(StatusPreferences::new(dir.path()));
        let report = run(Command::Tab { name: None }, &config, prefs).await.unwrap();
        assert_eq!(report["tab"], "History");
        assert_eq!(report["labelKey"], "transaction__history");
    }

    #[tokio::test]
    async fn test_refresh_failure_still_clears_flag() {
        let dir = tempdir().unwrap();
        let prefs = Arc::new(StatusPreferences::new(dir.path()));
        let command = Command::Refresh {
            session: session(&["-w", "hd-1", "-a", "A1", "-n", "eth-main", "--push-enabled"]),
            fail: true,
            latency_ms: 5,
        };
        let report = run(command, &fast_config(), prefs).await.unwrap();
        assert_eq!(report["refreshingRaised"], true);
        assert_eq!(report["refreshingAfter"], false);
        assert_eq!(report["requests"].as_array().unwrap().len(), 1);
        assert_eq!(report["requests"][0]["forceReloadTokens"], true);
        assert_eq!(report["inputs"]["context"]["networkId"], "eth-main");
        assert_eq!(report["inputs"]["push"]["pushEnable"], true);
    }

    #[tokio::test]
    async fn test_onboarding_wait_navigates_once() {
        let dir = tempdir().unwrap();
        let config = fast_config();

        let prefs = Arc::new(StatusPreferences::new(dir.path()));
        let args = ["-w", "hd-1", "-a", "A1", "-n", "eth-main", "--platform", "native"];
        let command = Command::Onboarding {
            session: session(&args),
            wait: true,
        };
        let report = run(command, &config, prefs).await.unwrap();
        assert_eq!(report["armed"], true);
        assert_eq!(report["guideToPushFirstTime"], true);
        assert_eq!(report["navigations"], json!(["GuideToPushFirstTime"]));

        // Flag is on disk now, so a second run stays quiet
        let prefs = Arc::new(StatusPreferences::new(dir.path()));
        let command = Command::Onboarding {
            session: session(&args),
            wait: true,
        };
        let report = run(command, &config, prefs).await.unwrap();
        assert_eq!(report["armed"], false);
        assert_eq!(report["navigations"], json!([]));
    }

    #[tokio::test]
    async fn test_onboarding_without_wait_is_cancelled() {
        let dir = tempdir().unwrap();
        let prefs = Arc::new(StatusPreferences::new(dir.path()));
        let command = Command::Onboarding {
            session: session(&["-a", "A1", "-n", "eth-main"]),
            wait: false,
        };
        let report = run(command, &fast_config(), prefs).await.unwrap();
        assert_eq!(report["armed"], true);
        assert_eq!(report["navigations"], json!([]));
        assert_eq!(report["snapshot"]["view"]["kind"], "identityRequired");
    }
}
