//! Home screen orchestration: tab choice, pull-to-refresh, the backup
//! reminder and the first-run push notification guide.

pub mod backup_reminder;
pub mod controller;
pub mod onboarding;
pub mod refresh;
pub mod tab_selector;

pub use backup_reminder::BackupReminderTracker;
pub use controller::{HomeController, HomeInputs, HomeSnapshot, HomeView};
pub use onboarding::{OnboardingConditions, OnboardingScheduler, PromptHandle};
pub use refresh::RefreshCoordinator;
pub use tab_selector::TabSelector;
