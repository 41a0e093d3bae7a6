//! # tradevenue-rs
//!
//! A Rust client for a simple trading venue's REST API.
//!
//! This crate covers the venue's whole surface: listing tradable
//! instruments, submitting and tracking orders, and viewing executed trades
//! and portfolio holdings. The order submission and status workflow is the
//! core; the rest are read-only panels composed from the same transport.
//!
//! ## Features
//!
//! - **Typed client**: per-domain services behind a single [`VenueClient`]
//! - **Opaque bodies**: acknowledgements, order records, trades, and
//!   portfolio snapshots are rendered verbatim, never reinterpreted; the
//!   venue is authoritative
//! - **Injected display sinks**: the terminal panels render into any
//!   [`terminal::DisplaySink`], so the workflow is testable headlessly
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use tradevenue_rs::{ClientConfig, VenueClient};
//! use tradevenue_rs::models::{NewOrder, Side};
//!
//! #[tokio::main]
//! async fn main() -> tradevenue_rs::Result<()> {
//!     let client = VenueClient::new(ClientConfig::default())?;
//!
//!     // List instruments
//!     for inst in client.instruments().list().await? {
//!         println!("{}", inst.summary_line());
//!     }
//!
//!     // Place an order and poll its status
//!     let ack = client
//!         .orders()
//!         .place(&NewOrder::limit("AAPL", Side::Buy, 10, 150.5))
//!         .await?;
//!     println!("ack: {ack}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Terminal panels
//!
//! ```rust,no_run
//! use tradevenue_rs::{ClientConfig, VenueClient};
//! use tradevenue_rs::terminal::{StdoutSink, SubmitPanel};
//!
//! #[tokio::main]
//! async fn main() -> tradevenue_rs::Result<()> {
//!     let client = VenueClient::new(ClientConfig::default())?;
//!
//!     let mut panel = SubmitPanel::new(&client, StdoutSink);
//!     let draft = panel.draft_mut();
//!     draft.symbol = "AAPL".to_string();
//!     draft.side = "BUY".to_string();
//!     draft.order_type = "MARKET".to_string();
//!     draft.quantity = "10".to_string();
//!
//!     // Renders the acknowledgement (or the venue's error body) and
//!     // clears the draft on success.
//!     let _ = panel.submit().await;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod terminal;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, VenueClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::OrderId;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tradevenue_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{ClientConfig, VenueClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Instrument, NewOrder, OrderId, OrderType, Side};
    pub use crate::terminal::{
        DisplaySink, InstrumentsPanel, OrderDraft, PortfolioPanel, StatusPanel, StdoutSink,
        SubmitPanel, TradesPanel,
    };
}
