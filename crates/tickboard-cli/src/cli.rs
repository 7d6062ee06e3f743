use clap::{Args, Parser, Subcommand, ValueEnum};

/// Live stock dashboard poller.
#[derive(Debug, Parser)]
#[command(name = "tickboard", version, about)]
pub struct Cli {
    /// Backend base URL serving /stocks, /best and /trending.
    #[arg(
        long,
        global = true,
        env = "TICKBOARD_BASE_URL",
        default_value = "http://localhost:8080"
    )]
    pub base_url: String,

    /// Snapshot rendering format.
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll the backend on a fixed interval and render each published update.
    Watch(WatchArgs),
    /// Run a single refresh cycle and render the resulting snapshot.
    Snapshot,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Refresh interval in milliseconds.
    #[arg(long, default_value_t = 5_000)]
    pub interval_ms: u64,

    /// Allow a new cycle to start while the previous one is in flight;
    /// the last cycle to complete wins.
    #[arg(long)]
    pub no_overlap_guard: bool,

    /// Stop after this many published updates instead of running until
    /// interrupted.
    #[arg(long)]
    pub updates: Option<u64>,
}
