use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::models::ActiveContext;
use crate::services::{FetchTokensRequest, PriceCache, TokenService};

/// Drives pull-to-refresh.
///
/// The refreshing flag is raised before [`trigger_refresh`](Self::trigger_refresh)
/// returns and cleared once both the fetch has settled and `min_duration` has
/// passed since the trigger. Fetch errors are logged and swallowed.
///
/// Overlapping triggers are not coalesced: each one issues its own fetch.
/// The flag stays raised while any of them is still in flight.
pub struct RefreshCoordinator {
    price_cache: Arc<dyn PriceCache>,
    tokens: Arc<dyn TokenService>,
    min_duration: Duration,
    in_flight: Arc<Mutex<InFlight>>,
}

/// Refreshes started since the last reset. Work started before a reset
/// belongs to an older epoch and no longer counts.
#[derive(Debug, Default)]
struct InFlight {
    count: usize,
    epoch: u64,
}

impl InFlight {
    fn start(&mut self) -> u64 {
        self.count += 1;
        self.epoch
    }

    fn finish(&mut self, epoch: u64) {
        if epoch == self.epoch {
            self.count = self.count.saturating_sub(1);
        }
    }
}

impl RefreshCoordinator {
    pub fn new(
        price_cache: Arc<dyn PriceCache>,
        tokens: Arc<dyn TokenService>,
        min_duration: Duration,
    ) -> Self {
        Self {
            price_cache,
            tokens,
            min_duration,
            in_flight: Arc::new(Mutex::new(InFlight::default())),
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.lock().count > 0
    }

    /// Raise the flag, drop cached prices, and return the work that reloads
    /// tokens and later lowers the flag. The returned future owns everything
    /// it needs and may outlive the coordinator.
    pub fn trigger_refresh(
        &self,
        ctx: &ActiveContext,
    ) -> impl Future<Output = ()> + Send + 'static {
        let started_at = Instant::now();
        let epoch = self.in_flight.lock().start();
        self.price_cache.clear_price_cache();

        let target = ctx.fetch_target();
        let tokens = Arc::clone(&self.tokens);
        let in_flight = Arc::clone(&self.in_flight);
        let floor = started_at + self.min_duration;

        async move {
            let fetch = async {
                let Some(target) = target else {
                    tracing::debug!("refresh without account/network, skipping token fetch");
                    return;
                };
                let account_id = target.account_id.clone();
                let network_id = target.network_id.clone();
                match tokens
                    .fetch_account_tokens(FetchTokensRequest::force_reload(target))
                    .await
                {
                    Ok(()) => tracing::debug!(
                        account_id = %account_id,
                        network_id = %network_id,
                        "refresh fetch complete"
                    ),
                    Err(e) => tracing::error!(
                        account_id = %account_id,
                        network_id = %network_id,
                        "refresh fetch failed: {}",
                        e
                    ),
                }
            };

            tokio::join!(fetch, tokio::time::sleep_until(floor));
            in_flight.lock().finish(epoch);
            tracing::debug!(
                elapsed_ms = started_at.elapsed().as_millis() as u64,
                "refresh finished"
            );
        }
    }

    /// Lower the flag without waiting for in-flight work
    pub fn reset(&self) {
        let mut in_flight = self.in_flight.lock();
        in_flight.count = 0;
        in_flight.epoch += 1;
    }
}
