use std::collections::HashMap;

use crate::models::{WalletId, WalletInfo};

/// Session-scoped record of dismissed backup reminders.
///
/// An entry of `false` means the reminder was shown and closed. Nothing is
/// persisted: a fresh mount starts with an empty map and reminds again.
#[derive(Debug, Default)]
pub struct BackupReminderTracker {
    decisions: HashMap<WalletId, bool>,
}

impl BackupReminderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_show_reminder(&self, wallet: Option<&WalletInfo>) -> bool {
        match wallet {
            Some(wallet) => !wallet.backuped && !self.decisions.contains_key(&wallet.id),
            None => false,
        }
    }

    pub fn dismiss(&mut self, wallet: &WalletInfo) {
        tracing::debug!(wallet_id = %wallet.id, "backup reminder dismissed");
        self.decisions.insert(wallet.id.clone(), false);
    }
}
