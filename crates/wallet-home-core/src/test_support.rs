//! Recording doubles for the home screen collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::Mutex;

use crate::error::HomeError;
use crate::models::Route;
use crate::services::{
    FetchTokensRequest, HomeServices, InMemoryStatusStore, Navigator, PriceCache, TokenService,
};

#[derive(Default)]
pub struct CountingPriceCache {
    clears: AtomicUsize,
}

impl CountingPriceCache {
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl PriceCache for CountingPriceCache {
    fn clear_price_cache(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

/// Token service that records requests and resolves after `latency`
#[derive(Default)]
pub struct RecordingTokenService {
    pub requests: Mutex<Vec<FetchTokensRequest>>,
    latency: Duration,
    fail: bool,
}

impl RecordingTokenService {
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl TokenService for RecordingTokenService {
    fn fetch_account_tokens(
        &self,
        request: FetchTokensRequest,
    ) -> BoxFuture<'_, Result<(), HomeError>> {
        self.requests.lock().push(request);
        async move {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            if self.fail {
                Err(HomeError::fetch("relay timeout"))
            } else {
                Ok(())
            }
        }
        .boxed()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn count(&self) -> usize {
        self.routes.lock().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) -> Result<(), HomeError> {
        self.routes.lock().push(route);
        Ok(())
    }
}

pub struct TestServices {
    pub status: Arc<InMemoryStatusStore>,
    pub price_cache: Arc<CountingPriceCache>,
    pub tokens: Arc<RecordingTokenService>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestServices {
    pub fn new() -> Self {
        Self::with_tokens(RecordingTokenService::default())
    }

    pub fn with_tokens(tokens: RecordingTokenService) -> Self {
        Self {
            status: Arc::new(InMemoryStatusStore::new()),
            price_cache: Arc::new(CountingPriceCache::default()),
            tokens: Arc::new(tokens),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }

    pub fn services(&self) -> HomeServices {
        HomeServices {
            status: self.status.clone(),
            price_cache: self.price_cache.clone(),
            tokens: self.tokens.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

/// Navigator whose target screen is already gone
#[derive(Default)]
pub struct FailingNavigator {
    pub attempts: AtomicUsize,
}

impl Navigator for FailingNavigator {
    fn navigate(&self, _route: Route) -> Result<(), HomeError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(HomeError::Navigation {
            message: "navigator disposed".to_string(),
        })
    }
}
