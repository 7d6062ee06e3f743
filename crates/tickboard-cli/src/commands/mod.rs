mod snapshot;
mod watch;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Watch(args) => watch::run(cli, args).await,
        Command::Snapshot => snapshot::run(cli).await,
    }
}
