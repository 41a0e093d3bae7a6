//! Financial instrument models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tradable instrument listed by the venue.
///
/// Only the fields the terminal projects are typed; anything else the
/// venue sends is kept in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Trading symbol
    pub symbol: String,
    /// Listing exchange
    pub exchange: String,
    /// Venue-defined instrument type (e.g. "EQUITY")
    pub instrument_type: String,
    /// Last traded price
    pub last_traded_price: f64,
    /// Additional venue-defined fields, passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Instrument {
    /// One-line projection used by the instruments panel.
    pub fn summary_line(&self) -> String {
        format!(
            "{} | {} | {} | LTP: {}",
            self.symbol, self.exchange, self.instrument_type, self.last_traded_price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let inst: Instrument = serde_json::from_value(serde_json::json!({
            "symbol": "AAPL",
            "exchange": "NASDAQ",
            "instrumentType": "EQUITY",
            "lastTradedPrice": 190.2,
        }))
        .unwrap();

        assert_eq!(inst.summary_line(), "AAPL | NASDAQ | EQUITY | LTP: 190.2");
    }

    #[test]
    fn test_extra_fields_preserved() {
        let inst: Instrument = serde_json::from_value(serde_json::json!({
            "symbol": "MSFT",
            "exchange": "NASDAQ",
            "instrumentType": "EQUITY",
            "lastTradedPrice": 420.1,
            "lotSize": 1,
        }))
        .unwrap();

        assert_eq!(inst.extra.get("lotSize"), Some(&Value::from(1)));
    }
}
