//! Stand-in collaborators so the home controller can run outside the app.

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::Mutex;
use wallet_home_core::{FetchTokensRequest, HomeError, Navigator, PriceCache, Route, TokenService};

pub struct LoggingPriceCache;

impl PriceCache for LoggingPriceCache {
    fn clear_price_cache(&self) {
        tracing::info!("price cache cleared");
    }
}

/// Token service that waits `latency` and then succeeds or fails
pub struct SimulatedTokenService {
    latency: Duration,
    fail: bool,
    requests: Mutex<Vec<FetchTokensRequest>>,
}

impl SimulatedTokenService {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self {
            latency,
            fail,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<FetchTokensRequest> {
        self.requests.lock().clone()
    }
}

impl TokenService for SimulatedTokenService {
    fn fetch_account_tokens(
        &self,
        request: FetchTokensRequest,
    ) -> BoxFuture<'_, Result<(), HomeError>> {
        tracing::info!(
            account_id = %request.active_account_id,
            network_id = %request.active_network_id,
            "fetching account tokens"
        );
        self.requests.lock().push(request);
        async move {
            tokio::time::sleep(self.latency).await;
            if self.fail {
                Err(HomeError::fetch("simulated network failure"))
            } else {
                Ok(())
            }
        }
        .boxed()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) -> Result<(), HomeError> {
        tracing::info!(route = ?route.path(), "navigate");
        self.routes.lock().push(route);
        Ok(())
    }
}
