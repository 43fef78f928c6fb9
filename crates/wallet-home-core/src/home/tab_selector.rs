use std::sync::Arc;

use crate::models::HomeTab;
use crate::services::StatusStore;

/// Active home tab, kept in shared status so it survives remounts
pub struct TabSelector {
    status: Arc<dyn StatusStore>,
    initial_tab: HomeTab,
}

impl TabSelector {
    pub fn new(status: Arc<dyn StatusStore>, initial_tab: HomeTab) -> Self {
        Self {
            status,
            initial_tab,
        }
    }

    pub fn current_tab(&self) -> HomeTab {
        self.status.home_tab_name().unwrap_or(self.initial_tab)
    }

    pub fn select_tab(&self, tab: HomeTab) {
        tracing::debug!(tab = %tab, "home tab selected");
        self.status.set_home_tab_name(tab);
    }
}
