//! Core contracts for tickboard.
//!
//! This crate contains:
//! - Canonical stock records and trading-status derivation
//! - The payload normalizer (ordered fallback chains, total on any input)
//! - Trending selection with a stable-sort fallback
//! - The feed boundary to the read-only dashboard backend
//! - The refresh orchestrator and its observable view state

pub mod domain;
pub mod error;
pub mod feed;
pub mod http_client;
pub mod normalize;
pub mod refresh;
pub mod trending;
pub mod view;

pub use domain::{BestStock, StockRecord, TradeStatus};
pub use error::{FeedError, FeedErrorKind, Resource, ViewError};
pub use feed::{HttpStockFeed, StockFeed};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use normalize::{normalize_best, normalize_record, normalize_records};
pub use refresh::{RefreshConfig, Refresher, DEFAULT_REFRESH_INTERVAL};
pub use trending::{select_trending, TRENDING_LIMIT};
pub use view::{ViewPublisher, ViewState};
