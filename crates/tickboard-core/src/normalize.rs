//! Field normalizer: maps loosely-shaped backend payloads onto the
//! canonical record schema.
//!
//! Every attribute resolves through an ordered fallback chain; the first
//! key present with a usable value wins, and every chain ends in a
//! documented default. The functions here are total: no payload shape,
//! including non-objects and non-arrays, makes them fail.

use serde_json::Value;

use crate::domain::{BestStock, StockRecord, TradeStatus};

const SYMBOL_KEYS: &[&str] = &["symbol", "Symbol"];
const NAME_KEYS: &[&str] = &["name", "Name", "company", "description"];
const PRICE_KEYS: &[&str] = &["price", "current_price", "c", "current", "latestPrice"];
const CHANGE_KEYS: &[&str] = &["change_percent", "change", "pct", "percent_change"];
const VOLUME_KEYS: &[&str] = &["volume", "v"];
const STATUS_KEYS: &[&str] = &["status", "signal"];

/// Normalize one raw stock mapping into a [`StockRecord`].
pub fn normalize_record(raw: &Value) -> StockRecord {
    let change_percent = first_number(raw, CHANGE_KEYS).unwrap_or(0.0);
    let status = first_string(raw, STATUS_KEYS)
        .map(TradeStatus::from_label)
        .unwrap_or_else(|| TradeStatus::from_change(change_percent));

    StockRecord {
        symbol: resolve_symbol(raw),
        name: first_string(raw, NAME_KEYS).unwrap_or_default(),
        price: first_number(raw, PRICE_KEYS).unwrap_or(0.0),
        change_percent,
        // Fractional or negative volumes clamp at the integer boundary.
        volume: first_number(raw, VOLUME_KEYS)
            .filter(|v| *v > 0.0)
            .map_or(0, |v| v as u64),
        status,
    }
}

/// Normalize a raw payload expected to be an array of stock mappings.
///
/// Applies [`normalize_record`] independently per element, preserving
/// order and count. A non-array payload yields an empty vector.
pub fn normalize_records(raw: &Value) -> Vec<StockRecord> {
    match raw.as_array() {
        Some(items) => items.iter().map(normalize_record).collect(),
        None => Vec::new(),
    }
}

/// Normalize the single "best pick" payload. A JSON null yields `None`.
pub fn normalize_best(raw: &Value) -> Option<BestStock> {
    if raw.is_null() {
        return None;
    }

    let change_percent = first_number(raw, CHANGE_KEYS).unwrap_or(0.0);
    let status = first_string(raw, STATUS_KEYS)
        .map(TradeStatus::from_label)
        .unwrap_or_else(|| TradeStatus::from_change(change_percent));

    Some(BestStock {
        symbol: resolve_symbol(raw),
        name: first_string(raw, NAME_KEYS).unwrap_or_default(),
        price: first_number(raw, PRICE_KEYS).unwrap_or(0.0),
        change_percent,
        status,
    })
}

fn resolve_symbol(raw: &Value) -> String {
    first_string(raw, SYMBOL_KEYS)
        .or_else(|| {
            raw.get("t")
                .and_then(Value::as_str)
                .map(str::to_ascii_uppercase)
        })
        .unwrap_or_else(|| String::from("N/A"))
}

fn first_string(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}

fn first_number(raw: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_f64))
        .filter(|v| v.is_finite())
}
