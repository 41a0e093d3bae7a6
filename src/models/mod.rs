//! Data models for the venue API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Core newtypes like `OrderId`
//! - [`enums`] - Enumeration types for order side and type
//! - [`order`] - Order payload models
//! - [`instrument`] - Financial instrument models
//!
//! Order acknowledgements, order records, trades, and portfolio snapshots
//! are venue-defined documents the client never destructures; they stay as
//! `serde_json::Value`.

pub mod enums;
pub mod instrument;
pub mod order;
pub mod primitives;

// Re-export commonly used types
pub use enums::*;
pub use instrument::*;
pub use order::*;
pub use primitives::*;
