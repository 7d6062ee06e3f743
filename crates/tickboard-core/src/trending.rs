//! Trending selection: backend order is authoritative when the trending
//! resource has data; otherwise a fallback is derived from the stock list
//! so the trending panel is never empty while stock data exists.

use serde_json::Value;

use crate::domain::StockRecord;
use crate::normalize::normalize_records;

/// Upper bound on the trending list length.
pub const TRENDING_LIMIT: usize = 5;

/// Select the trending records for one refresh cycle.
///
/// A non-empty `raw_trending` array is normalized and truncated to
/// [`TRENDING_LIMIT`] in backend-provided order. Anything else falls back
/// to the stocks ranked by `change_percent` descending; the sort is stable
/// so ties keep their original relative order.
pub fn select_trending(raw_trending: &Value, stocks: &[StockRecord]) -> Vec<StockRecord> {
    match raw_trending.as_array() {
        Some(items) if !items.is_empty() => {
            let mut records = normalize_records(raw_trending);
            records.truncate(TRENDING_LIMIT);
            records
        }
        _ => {
            let mut ranked = stocks.to_vec();
            ranked.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
            ranked.truncate(TRENDING_LIMIT);
            ranked
        }
    }
}
