use std::sync::Arc;

use tickboard_core::{HttpStockFeed, RefreshConfig, Refresher};

use crate::cli::Cli;
use crate::error::CliError;
use crate::output;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let feed = Arc::new(HttpStockFeed::new(cli.base_url.clone()));
    let refresher = Refresher::new(feed, RefreshConfig::default());

    refresher.run_cycle().await;
    let state = refresher.snapshot();
    output::render(&state, cli.format)?;

    if let Some(error) = &state.error {
        return Err(CliError::Cycle {
            message: error.message.clone(),
        });
    }

    Ok(())
}
