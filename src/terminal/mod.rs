//! Interactive terminal panels for the venue.
//!
//! Each panel pairs one API service with one [`DisplaySink`] and renders
//! whatever the venue sends back. Panels hold no shared state beyond the
//! sink they write to exclusively, so concurrently triggered operations can
//! interleave freely; the last response to arrive wins its sink.
//!
//! The order workflow lives in [`SubmitPanel`] and [`StatusPanel`]; the
//! instruments, trades, and portfolio panels are read-only conveniences
//! composed from the same transport and rendering helpers.

mod form;
mod panels;
mod sink;
mod status;
mod submit;

pub use form::OrderDraft;
pub use panels::{InstrumentsPanel, PortfolioPanel, TradesPanel};
pub use sink::{DisplaySink, RecordingSink, StdoutSink};
pub use status::{StatusPanel, ORDER_ID_PROMPT};
pub use submit::SubmitPanel;

/// Placeholder shown while a fetch is in flight.
pub const LOADING_PLACEHOLDER: &str = "Loading...";
/// Placeholder shown while a submission is in flight.
pub const SUBMITTING_PLACEHOLDER: &str = "Submitting...";
/// Prefix for transport-failure lines.
pub const REQUEST_FAILED_PREFIX: &str = "Request failed: ";

/// Pretty-print a venue body for display.
pub(crate) fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
