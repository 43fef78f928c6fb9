//! One-shot scheduler for the first-run push notification guide.
//!
//! Idle -> Armed when every gate holds on an evaluation. Arming writes the
//! persistent "guide shown" flag at once, then navigates after a delay unless
//! cancelled. Firing or cancelling returns to Idle; there is no Fired state
//! because the persistent flag already blocks any further arming.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::models::{AccountId, NetworkId, Platform, PushNotificationSettings, Route};
use crate::services::{Navigator, StatusStore};

/// Inputs the guide is gated on, besides the persistent flag
#[derive(Clone, Copy, Debug)]
pub struct OnboardingConditions<'a> {
    pub platform: Platform,
    pub account_id: Option<&'a AccountId>,
    pub network_id: Option<&'a NetworkId>,
    pub push: PushNotificationSettings,
}

/// Handle to an armed prompt. Cancelling it before the delay elapses
/// guarantees no navigation request is made, and returns the scheduler to
/// Idle at once if this prompt is still the armed one.
#[derive(Clone, Debug)]
pub struct PromptHandle {
    token: CancellationToken,
    generation: u64,
    slot: Arc<Mutex<Slot>>,
}

impl PromptHandle {
    pub fn cancel(&self) {
        self.token.cancel();
        self.slot.lock().return_to_idle(self.generation);
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug, Default)]
enum ScheduleState {
    #[default]
    Idle,
    Armed {
        generation: u64,
        token: CancellationToken,
    },
}

#[derive(Debug, Default)]
struct Slot {
    state: ScheduleState,
    next_generation: u64,
}

impl Slot {
    /// Back to Idle, unless a newer prompt has been armed since
    fn return_to_idle(&mut self, generation: u64) {
        if let ScheduleState::Armed { generation: armed, .. } = self.state {
            if armed == generation {
                self.state = ScheduleState::Idle;
            }
        }
    }
}

pub struct OnboardingScheduler {
    status: Arc<dyn StatusStore>,
    navigator: Arc<dyn Navigator>,
    eligible_network_ids: HashSet<NetworkId>,
    delay: Duration,
    slot: Arc<Mutex<Slot>>,
}

impl OnboardingScheduler {
    pub fn new(
        status: Arc<dyn StatusStore>,
        navigator: Arc<dyn Navigator>,
        eligible_network_ids: HashSet<NetworkId>,
        delay: Duration,
    ) -> Self {
        Self {
            status,
            navigator,
            eligible_network_ids,
            delay,
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.slot.lock().state, ScheduleState::Armed { .. })
    }

    fn gates_open(&self, conditions: &OnboardingConditions<'_>) -> bool {
        if !conditions.platform.is_native() {
            return false;
        }
        if conditions.account_id.is_none() {
            return false;
        }
        if conditions.push.push_enable {
            return false;
        }
        if self.status.guide_to_push_first_time() {
            return false;
        }
        conditions
            .network_id
            .is_some_and(|id| self.eligible_network_ids.contains(id))
    }

    /// Re-check the gates. Arms and returns a handle only on the Idle ->
    /// Armed transition; while already armed this is a no-op and the pending
    /// delay is left untouched.
    pub fn evaluate(&self, conditions: &OnboardingConditions<'_>) -> Option<PromptHandle> {
        let mut slot = self.slot.lock();
        if matches!(slot.state, ScheduleState::Armed { .. }) {
            return None;
        }
        if !self.gates_open(conditions) {
            return None;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("cannot schedule push guide without a tokio runtime: {}", e);
                return None;
            }
        };

        self.status.set_guide_to_push_first_time(true);

        let generation = slot.next_generation;
        slot.next_generation += 1;
        let token = CancellationToken::new();
        slot.state = ScheduleState::Armed {
            generation,
            token: token.clone(),
        };
        drop(slot);

        tracing::info!(
            delay_ms = self.delay.as_millis() as u64,
            "push guide armed"
        );

        let task_token = token.clone();
        let navigator = Arc::clone(&self.navigator);
        let slot = Arc::clone(&self.slot);
        let delay = self.delay;
        runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    tracing::debug!("push guide cancelled before firing");
                }
                _ = tokio::time::sleep(delay) => {
                    // A cancel racing the timer wins
                    if !task_token.is_cancelled() {
                        tracing::info!("opening push guide");
                        if let Err(e) = navigator.navigate(Route::GuideToPushFirstTime) {
                            tracing::warn!("push guide navigation failed: {}", e);
                        }
                    }
                }
            }

            slot.lock().return_to_idle(generation);
        });

        Some(PromptHandle {
            token,
            generation,
            slot: Arc::clone(&self.slot),
        })
    }

    /// Cancel any armed prompt. Called on screen teardown.
    pub fn cancel(&self) {
        let mut slot = self.slot.lock();
        if let ScheduleState::Armed { token, .. } = std::mem::take(&mut slot.state) {
            token.cancel();
            tracing::debug!("push guide disarmed");
        }
    }
}

impl Drop for OnboardingScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
