//! Enumeration types for the venue API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the market an order takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy the instrument
    #[serde(rename = "BUY")]
    Buy,
    /// Sell the instrument
    #[serde(rename = "SELL")]
    Sell,
}

impl Side {
    /// The wire representation used by the venue.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    /// Returns `true` if this is a buy.
    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type specifying how the order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Market order - execute immediately at current market price
    #[serde(rename = "MARKET")]
    Market,
    /// Limit order - execute at the specified price or better
    #[serde(rename = "LIMIT")]
    Limit,
}

impl OrderType {
    /// The wire representation used by the venue.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
