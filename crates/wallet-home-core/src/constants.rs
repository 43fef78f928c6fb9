//! Home screen defaults
//!
//! Values used when the host does not supply its own configuration.

use crate::models::HomeTab;

/// Tab shown on the very first mount of a session
pub const DEFAULT_INITIAL_TAB: HomeTab = HomeTab::Tokens;

/// Floor for how long the pull-to-refresh indicator stays visible.
/// Keeps the spinner from flashing when the fetch resolves immediately.
pub const DEFAULT_MIN_REFRESH_MS: u64 = 10;

/// Delay between arming the push-notification guide and navigating to it
pub const DEFAULT_ONBOARDING_DELAY_MS: u64 = 3000;

/// Networks for which the push-notification guide is relevant.
pub const DEFAULT_ELIGIBLE_NETWORK_IDS: &[&str] = &[
    "eth-main",
    "evm--1",
    "evm--10",
    "evm--56",
    "evm--137",
    "evm--42161",
    "evm--43114",
];

/// Name of the JSON file holding shared home status
pub const STATUS_FILE_NAME: &str = "home_status.json";

/// Directory name under the platform data dir
pub const DATA_DIR_NAME: &str = "wallet-home";
