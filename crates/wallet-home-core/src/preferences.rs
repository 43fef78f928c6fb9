use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::constants::STATUS_FILE_NAME;
use crate::models::HomeTab;
use crate::services::StatusStore;

/// Home status persisted to JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStatus {
    #[serde(default)]
    pub home_tab_name: Option<HomeTab>,
    #[serde(default)]
    pub guide_to_push_first_time: bool,
}

/// File-backed [`StatusStore`]. Every mutation rewrites the file.
pub struct StatusPreferences {
    path: PathBuf,
    status: RwLock<HomeStatus>,
}

impl StatusPreferences {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let path = data_dir.as_ref().join(STATUS_FILE_NAME);
        let status = Self::load_from_file(&path).unwrap_or_default();
        Self {
            path,
            status: RwLock::new(status),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn status(&self) -> HomeStatus {
        self.status.read().clone()
    }

    /// Forget the stored tab and guide flag
    pub fn reset(&self) {
        let mut status = self.status.write();
        *status = HomeStatus::default();
        self.save_to_file(&status);
    }

    fn load_from_file(path: &Path) -> Option<HomeStatus> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", path.display(), e);
                None
            }
        }
    }

    fn save_to_file(&self, status: &HomeStatus) {
        let json = match serde_json::to_string_pretty(status) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize home status: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, json) {
            tracing::error!("Failed to save home status to {}: {}", self.path.display(), e);
        }
    }
}

impl StatusStore for StatusPreferences {
    fn home_tab_name(&self) -> Option<HomeTab> {
        self.status.read().home_tab_name
    }

    fn set_home_tab_name(&self, tab: HomeTab) {
        let mut status = self.status.write();
        status.home_tab_name = Some(tab);
        self.save_to_file(&status);
    }

    fn guide_to_push_first_time(&self) -> bool {
        self.status.read().guide_to_push_first_time
    }

    fn set_guide_to_push_first_time(&self, shown: bool) {
        let mut status = self.status.write();
        status.guide_to_push_first_time = shown;
        self.save_to_file(&status);
    }
}
