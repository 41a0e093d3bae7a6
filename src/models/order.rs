//! Order payload models.

use serde::Serialize;

use super::enums::{OrderType, Side};

/// A new order to be submitted to the venue.
///
/// This is the typed payload for programmatic use; interactive submissions
/// go through [`OrderDraft`](crate::terminal::OrderDraft), which performs
/// form-style coercion instead. `price` is serialized only when present:
/// omission means "no limit price", and the venue is the authority on
/// whether a missing price is acceptable for the order type.
///
/// # Example
///
/// ```
/// use tradevenue_rs::models::{NewOrder, Side};
///
/// let order = NewOrder::limit("AAPL", Side::Buy, 10, 150.5);
/// let wire = serde_json::to_value(&order).unwrap();
/// assert_eq!(wire["orderType"], "LIMIT");
/// assert_eq!(wire["price"], 150.5);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Trading symbol
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Market or limit
    pub order_type: OrderType,
    /// Number of units to trade
    pub quantity: u64,
    /// Limit price (omitted from the wire when `None`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl NewOrder {
    /// Create a market order.
    pub fn market(symbol: impl Into<String>, side: Side, quantity: u64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
        }
    }

    /// Create a limit order at the given price.
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: u64, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
        }
    }
}
