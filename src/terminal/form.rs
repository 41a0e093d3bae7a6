//! Raw order-entry form state and payload coercion.

use serde_json::{json, Number, Value};

/// The raw fields of the order-entry form, exactly as typed.
///
/// The venue is authoritative on validation: the draft performs only the
/// coercions the form contract promises (symbol trimming, numeric
/// quantity, conditional price) and sends everything else through as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Trading symbol, trimmed before serialization
    pub symbol: String,
    /// Order side, e.g. "BUY" or "SELL"
    pub side: String,
    /// Order type, e.g. "MARKET" or "LIMIT"
    pub order_type: String,
    /// Quantity as typed; coerced to a number on the wire
    pub quantity: String,
    /// Limit price as typed; included on the wire only when non-empty
    pub price: String,
}

impl OrderDraft {
    /// Build the submission payload.
    ///
    /// `price` is present iff the raw field is non-empty. That keys off
    /// field presence, not order type: a LIMIT draft with a blank price
    /// omits `price` entirely and the venue rejects it. Omission means
    /// "no limit price"; an empty field must not turn into an explicit
    /// zero.
    pub fn payload(&self) -> Value {
        let mut payload = json!({
            "symbol": self.symbol.trim(),
            "side": self.side,
            "orderType": self.order_type,
            "quantity": coerce_number(&self.quantity),
        });
        if !self.price.is_empty() {
            payload["price"] = coerce_number(&self.price);
        }
        payload
    }

    /// Reset every field to blank.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if every field is blank.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Form-style numeric coercion.
///
/// Blank input coerces to `0`; unparseable input has no JSON number
/// representation and degrades to `null`, which the venue rejects the same
/// way it would any malformed quantity. Whole values serialize as integers
/// so a quantity of `"10"` reaches the wire as `10`, not `10.0`.
fn coerce_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::from(0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
            Value::from(n as i64)
        }
        Ok(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
        Err(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit_draft() -> OrderDraft {
        OrderDraft {
            symbol: " AAPL ".to_string(),
            side: "BUY".to_string(),
            order_type: "LIMIT".to_string(),
            quantity: "10".to_string(),
            price: "150.5".to_string(),
        }
    }

    #[test]
    fn test_symbol_trimmed_quantity_numeric() {
        let wire = limit_draft().payload();
        assert_eq!(wire["symbol"], "AAPL");
        assert_eq!(wire["quantity"], 10);
        assert!(wire["quantity"].is_i64());
    }

    #[test]
    fn test_price_included_as_number_when_present() {
        let wire = limit_draft().payload();
        assert_eq!(wire["price"], 150.5);
        assert!(wire["price"].is_f64());
    }

    #[test]
    fn test_empty_price_omits_key() {
        let mut draft = limit_draft();
        draft.price = String::new();
        let wire = draft.payload();
        assert!(wire.get("price").is_none());
    }

    #[test]
    fn test_zero_price_is_not_omission() {
        let mut draft = limit_draft();
        draft.price = "0".to_string();
        let wire = draft.payload();
        assert_eq!(wire["price"], 0);
    }

    #[test]
    fn test_non_numeric_quantity_degrades_to_null() {
        let mut draft = limit_draft();
        draft.quantity = "ten".to_string();
        let wire = draft.payload();
        assert_eq!(wire["quantity"], Value::Null);
    }

    #[test]
    fn test_empty_symbol_passes_through() {
        // Required-field rejection is the venue's job, not the form's.
        let mut draft = limit_draft();
        draft.symbol = String::new();
        let wire = draft.payload();
        assert_eq!(wire["symbol"], "");
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut draft = limit_draft();
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.symbol, "");
        assert_eq!(draft.price, "");
    }
}
