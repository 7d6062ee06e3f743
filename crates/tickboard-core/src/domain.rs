use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Change-percent threshold above which a record without an explicit status
/// is labelled a strong buy. Strict inequality; exactly this value holds.
pub const STRONG_BUY_THRESHOLD: f64 = 2.0;
/// Counterpart threshold for the strong-sell label.
pub const STRONG_SELL_THRESHOLD: f64 = -2.0;

/// Trading status label attached to every canonical record.
///
/// Backends may supply their own label; anything that is not one of the
/// three well-known labels survives untouched as [`TradeStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeStatus {
    StrongBuy,
    StrongSell,
    Hold,
    Other(String),
}

impl TradeStatus {
    /// Derive a status from a change percentage when the backend omits one.
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent > STRONG_BUY_THRESHOLD {
            Self::StrongBuy
        } else if change_percent < STRONG_SELL_THRESHOLD {
            Self::StrongSell
        } else {
            Self::Hold
        }
    }

    /// Map an explicit backend label onto the canonical variants.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        match label.as_str() {
            "Strong Buy" => Self::StrongBuy,
            "Strong Sell" => Self::StrongSell,
            "Hold" => Self::Hold,
            _ => Self::Other(label),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::StrongSell => "Strong Sell",
            Self::Hold => "Hold",
            Self::Other(label) => label,
        }
    }
}

impl Display for TradeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TradeStatus {
    fn from(value: String) -> Self {
        Self::from_label(value)
    }
}

impl From<TradeStatus> for String {
    fn from(value: TradeStatus) -> Self {
        value.as_str().to_owned()
    }
}

/// Canonical stock record exposed to the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub status: TradeStatus,
}

/// Featured "best pick" record. Same shape as [`StockRecord`] minus volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestStock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
    pub status: TradeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_status_from_change_percent() {
        assert_eq!(TradeStatus::from_change(3.5), TradeStatus::StrongBuy);
        assert_eq!(TradeStatus::from_change(-2.5), TradeStatus::StrongSell);
        assert_eq!(TradeStatus::from_change(0.0), TradeStatus::Hold);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(TradeStatus::from_change(2.0), TradeStatus::Hold);
        assert_eq!(TradeStatus::from_change(-2.0), TradeStatus::Hold);
    }

    #[test]
    fn unknown_labels_pass_through() {
        let status = TradeStatus::from_label("Accumulate");
        assert_eq!(status, TradeStatus::Other(String::from("Accumulate")));
        assert_eq!(status.as_str(), "Accumulate");
    }

    #[test]
    fn well_known_labels_round_trip() {
        for label in ["Strong Buy", "Strong Sell", "Hold"] {
            assert_eq!(TradeStatus::from_label(label).as_str(), label);
        }
    }
}
