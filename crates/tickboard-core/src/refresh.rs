//! Refresh orchestrator: drives the timed fetch cycle against the three
//! backend resources and reconciles the results into the view state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::error::{Resource, ViewError};
use crate::feed::StockFeed;
use crate::normalize::{normalize_best, normalize_records};
use crate::trending::select_trending;
use crate::view::{ViewPublisher, ViewState};

/// Default interval between refresh cycles.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(5_000);

/// Tuning for the refresh loop.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Interval between cycle starts.
    pub interval: Duration,
    /// When set, a tick arriving while a cycle is still in flight is
    /// skipped instead of starting a second, racing cycle. With the guard
    /// off every tick starts a cycle and the last one to complete wins.
    pub overlap_guard: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REFRESH_INTERVAL,
            overlap_guard: true,
        }
    }
}

/// Owns the feed and the view publisher; the only writer of view state.
#[derive(Clone)]
pub struct Refresher {
    feed: Arc<dyn StockFeed>,
    view: ViewPublisher,
    config: RefreshConfig,
}

impl Refresher {
    pub fn new(feed: Arc<dyn StockFeed>, config: RefreshConfig) -> Self {
        Self {
            feed,
            view: ViewPublisher::new(),
            config,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.view.snapshot()
    }

    /// Run one complete cycle: concurrent reads of the three resources,
    /// all-or-nothing application, change-suppressed publication.
    pub async fn run_cycle(&self) {
        self.view.update(ViewState::begin_cycle);

        let (stocks, best, trending) = tokio::join!(
            self.feed.fetch(Resource::Stocks),
            self.feed.fetch(Resource::Best),
            self.feed.fetch(Resource::Trending),
        );

        // All three reads were awaited; on failure the other payloads are
        // discarded. First failing resource in stocks, best, trending
        // order determines the recorded error.
        let (raw_stocks, raw_best, raw_trending) = match (stocks, best, trending) {
            (Ok(stocks), Ok(best), Ok(trending)) => (stocks, best, trending),
            (Err(error), ..) | (_, Err(error), _) | (.., Err(error)) => {
                warn!(
                    resource = %error.resource(),
                    detail = error.detail(),
                    "refresh cycle aborted"
                );
                self.view
                    .update(|state| state.apply_failure(ViewError::from(&error)));
                return;
            }
        };

        let stocks = normalize_records(&raw_stocks);
        let best = normalize_best(&raw_best);
        let trending = select_trending(&raw_trending, &stocks);

        let published = self
            .view
            .update(|state| state.apply_success(stocks, trending, best));
        debug!(published, "refresh cycle completed");
    }

    /// Drive cycles until the task is dropped: once immediately, then on
    /// every interval tick.
    ///
    /// With the overlap guard enabled, cycles run strictly sequentially
    /// and ticks that fire mid-cycle are skipped. Without it, every tick
    /// starts a cycle regardless of what is in flight and the last cycle
    /// to complete wins the view-state write.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        if self.config.overlap_guard {
            loop {
                ticker.tick().await;
                self.run_cycle().await;
            }
        } else {
            loop {
                ticker.tick().await;
                let cycle = self.clone();
                tokio::spawn(async move { cycle.run_cycle().await });
            }
        }
    }
}
