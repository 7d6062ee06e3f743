//! Shared test support for tickboard behavior tests.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::{json, Value};
use tickboard_core::{FeedError, Resource, StockFeed};

pub use std::sync::Arc;

/// Feed whose responses are scripted per resource.
///
/// Exhausted scripts fall back to benign defaults (empty array for the
/// list resources, null for best) so loop tests stay deterministic no
/// matter how many cycles run.
#[derive(Default)]
pub struct ScriptedFeed {
    scripts: Mutex<HashMap<Resource, VecDeque<Result<Value, FeedError>>>>,
    latency: Option<Duration>,
    cycle_starts: AtomicUsize,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `latency` of (virtual) time.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn enqueue(&self, resource: Resource, result: Result<Value, FeedError>) {
        self.scripts
            .lock()
            .expect("script store should not be poisoned")
            .entry(resource)
            .or_default()
            .push_back(result);
    }

    /// Queue one full successful cycle worth of payloads.
    pub fn enqueue_cycle(&self, stocks: Value, best: Value, trending: Value) {
        self.enqueue(Resource::Stocks, Ok(stocks));
        self.enqueue(Resource::Best, Ok(best));
        self.enqueue(Resource::Trending, Ok(trending));
    }

    /// Number of cycles that started fetching (counted on the stocks read).
    pub fn cycle_starts(&self) -> usize {
        self.cycle_starts.load(Ordering::SeqCst)
    }
}

impl StockFeed for ScriptedFeed {
    fn fetch<'a>(
        &'a self,
        resource: Resource,
    ) -> Pin<Box<dyn Future<Output = Result<Value, FeedError>> + Send + 'a>> {
        if resource == Resource::Stocks {
            self.cycle_starts.fetch_add(1, Ordering::SeqCst);
        }

        let next = self
            .scripts
            .lock()
            .expect("script store should not be poisoned")
            .get_mut(&resource)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(default_payload(resource)));
        let latency = self.latency;

        Box::pin(async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            next
        })
    }
}

fn default_payload(resource: Resource) -> Value {
    match resource {
        Resource::Best => Value::Null,
        Resource::Stocks | Resource::Trending => json!([]),
    }
}
