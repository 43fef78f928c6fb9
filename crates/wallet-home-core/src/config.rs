use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DATA_DIR_NAME, DEFAULT_ELIGIBLE_NETWORK_IDS, DEFAULT_INITIAL_TAB, DEFAULT_MIN_REFRESH_MS,
    DEFAULT_ONBOARDING_DELAY_MS,
};
use crate::error::HomeError;
use crate::models::{HomeTab, NetworkId, Platform};

/// Host-supplied settings for the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeConfig {
    /// Tab used when nothing has been selected yet this session
    pub initial_tab: HomeTab,
    pub min_refresh_ms: u64,
    pub onboarding_delay_ms: u64,
    pub eligible_network_ids: HashSet<NetworkId>,
    pub platform: Platform,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            initial_tab: DEFAULT_INITIAL_TAB,
            min_refresh_ms: DEFAULT_MIN_REFRESH_MS,
            onboarding_delay_ms: DEFAULT_ONBOARDING_DELAY_MS,
            eligible_network_ids: DEFAULT_ELIGIBLE_NETWORK_IDS
                .iter()
                .map(|id| NetworkId::new(*id))
                .collect(),
            platform: Platform::default(),
        }
    }
}

impl HomeConfig {
    /// Load config from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, HomeError> {
        let content = std::fs::read_to_string(path).map_err(|e| HomeError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_json(&content).map_err(|e| HomeError::Config {
            message: format!("{} ({})", e, path.display()),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, HomeError> {
        serde_json::from_str(json).map_err(|e| HomeError::Config {
            message: format!("Failed to parse config: {}", e),
        })
    }

    pub fn min_refresh_duration(&self) -> Duration {
        Duration::from_millis(self.min_refresh_ms)
    }

    pub fn onboarding_delay(&self) -> Duration {
        Duration::from_millis(self.onboarding_delay_ms)
    }
}

/// `<platform data dir>/wallet-home`, or a relative dir if none is known
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}
