//! Collaborator contracts the home screen calls into.
//!
//! Storage, pricing, token loading and navigation are owned elsewhere in the
//! app. The home controller only sees these traits, so hosts and tests can
//! plug in their own implementations.

use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::HomeError;
use crate::models::{AccountId, FetchTarget, HomeTab, NetworkId, Route};

/// Process-wide status shared with the rest of the app.
/// Values written here outlive any single home screen mount.
pub trait StatusStore: Send + Sync {
    fn home_tab_name(&self) -> Option<HomeTab>;
    fn set_home_tab_name(&self, tab: HomeTab);
    fn guide_to_push_first_time(&self) -> bool;
    fn set_guide_to_push_first_time(&self, shown: bool);
}

pub trait PriceCache: Send + Sync {
    fn clear_price_cache(&self);
}

/// Parameters for reloading an account's token holdings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchTokensRequest {
    pub active_account_id: AccountId,
    pub active_network_id: NetworkId,
    pub with_balance: bool,
    pub with_price: bool,
    pub wait: bool,
    pub force_reload_tokens: bool,
}

impl FetchTokensRequest {
    /// Full reload used by pull-to-refresh: balances, prices, no cache
    pub fn force_reload(target: FetchTarget) -> Self {
        Self {
            active_account_id: target.account_id,
            active_network_id: target.network_id,
            with_balance: true,
            with_price: true,
            wait: true,
            force_reload_tokens: true,
        }
    }
}

pub trait TokenService: Send + Sync {
    /// Reload holdings into shared state. The result carries no data;
    /// consumers read the refreshed tokens from their own stores.
    fn fetch_account_tokens(
        &self,
        request: FetchTokensRequest,
    ) -> BoxFuture<'_, Result<(), HomeError>>;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route) -> Result<(), HomeError>;
}

/// Everything the home controller needs from the rest of the app
#[derive(Clone)]
pub struct HomeServices {
    pub status: Arc<dyn StatusStore>,
    pub price_cache: Arc<dyn PriceCache>,
    pub tokens: Arc<dyn TokenService>,
    pub navigator: Arc<dyn Navigator>,
}

#[derive(Debug, Default)]
struct StatusState {
    home_tab_name: Option<HomeTab>,
    guide_to_push_first_time: bool,
}

/// Status store that lives for the process only
#[derive(Debug, Default)]
pub struct InMemoryStatusStore {
    state: RwLock<StatusState>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusStore for InMemoryStatusStore {
    fn home_tab_name(&self) -> Option<HomeTab> {
        self.state.read().home_tab_name
    }

    fn set_home_tab_name(&self, tab: HomeTab) {
        self.state.write().home_tab_name = Some(tab);
    }

    fn guide_to_push_first_time(&self) -> bool {
        self.state.read().guide_to_push_first_time
    }

    fn set_guide_to_push_first_time(&self, shown: bool) {
        self.state.write().guide_to_push_first_time = shown;
    }
}
