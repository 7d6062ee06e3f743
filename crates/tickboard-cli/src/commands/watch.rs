use std::sync::Arc;
use std::time::Duration;

use tickboard_core::{HttpStockFeed, RefreshConfig, Refresher, StockFeed};
use tracing::info;

use crate::cli::{Cli, WatchArgs};
use crate::error::CliError;
use crate::output;

pub async fn run(cli: &Cli, args: &WatchArgs) -> Result<(), CliError> {
    let feed: Arc<dyn StockFeed> = Arc::new(HttpStockFeed::new(cli.base_url.clone()));
    let config = RefreshConfig {
        // tokio intervals reject a zero period.
        interval: Duration::from_millis(args.interval_ms.max(1)),
        overlap_guard: !args.no_overlap_guard,
    };

    let refresher = Refresher::new(feed, config);
    let mut updates = refresher.subscribe();
    info!(base_url = %cli.base_url, interval_ms = args.interval_ms, "watching backend");

    let loop_task = tokio::spawn(refresher.run());

    let mut rendered = 0u64;
    loop {
        if updates.changed().await.is_err() {
            break;
        }
        let state = updates.borrow_and_update().clone();
        output::render(&state, cli.format)?;

        rendered += 1;
        if args.updates.is_some_and(|limit| rendered >= limit) {
            break;
        }
    }

    loop_task.abort();
    Ok(())
}
