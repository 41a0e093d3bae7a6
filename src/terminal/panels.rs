//! Read-only display panels: instruments, trades, portfolio.
//!
//! Each is a pure fetch-and-render operation with no request payload and no
//! client-side state. Fetch failures are rendered as a generic failure line
//! instead of being left unobserved.

use serde_json::Value;

use crate::api::{InstrumentsService, PortfolioService, TradesService};
use crate::models::Instrument;
use crate::{Result, VenueClient};

use super::sink::DisplaySink;
use super::{pretty, LOADING_PLACEHOLDER, REQUEST_FAILED_PREFIX};

/// Panel listing tradable instruments, one projected line per record.
pub struct InstrumentsPanel<S: DisplaySink> {
    instruments: InstrumentsService,
    sink: S,
}

impl<S: DisplaySink> InstrumentsPanel<S> {
    /// Create a panel rendering into `sink`.
    pub fn new(client: &VenueClient, sink: S) -> Self {
        Self {
            instruments: client.instruments(),
            sink,
        }
    }

    /// Fetch the instrument list and render it.
    pub async fn refresh(&self) -> Result<Vec<Instrument>> {
        self.sink.display(LOADING_PLACEHOLDER);
        match self.instruments.list().await {
            Ok(instruments) => {
                let lines = instruments
                    .iter()
                    .map(Instrument::summary_line)
                    .collect::<Vec<_>>()
                    .join("\n");
                self.sink.display(&lines);
                Ok(instruments)
            }
            Err(err) => {
                self.sink.display(&format!("{REQUEST_FAILED_PREFIX}{err}"));
                Err(err)
            }
        }
    }
}

/// Panel rendering the executed-trades list verbatim.
pub struct TradesPanel<S: DisplaySink> {
    trades: TradesService,
    sink: S,
}

impl<S: DisplaySink> TradesPanel<S> {
    /// Create a panel rendering into `sink`.
    pub fn new(client: &VenueClient, sink: S) -> Self {
        Self {
            trades: client.trades(),
            sink,
        }
    }

    /// Fetch the trade list and render it pretty-printed.
    pub async fn refresh(&self) -> Result<Value> {
        self.sink.display(LOADING_PLACEHOLDER);
        match self.trades.list().await {
            Ok(trades) => {
                self.sink.display(&pretty(&trades));
                Ok(trades)
            }
            Err(err) => {
                self.sink.display(&format!("{REQUEST_FAILED_PREFIX}{err}"));
                Err(err)
            }
        }
    }
}

/// Panel rendering the portfolio snapshot verbatim.
pub struct PortfolioPanel<S: DisplaySink> {
    portfolio: PortfolioService,
    sink: S,
}

impl<S: DisplaySink> PortfolioPanel<S> {
    /// Create a panel rendering into `sink`.
    pub fn new(client: &VenueClient, sink: S) -> Self {
        Self {
            portfolio: client.portfolio(),
            sink,
        }
    }

    /// Fetch the portfolio snapshot and render it pretty-printed.
    pub async fn refresh(&self) -> Result<Value> {
        self.sink.display(LOADING_PLACEHOLDER);
        match self.portfolio.get().await {
            Ok(snapshot) => {
                self.sink.display(&pretty(&snapshot));
                Ok(snapshot)
            }
            Err(err) => {
                self.sink.display(&format!("{REQUEST_FAILED_PREFIX}{err}"));
                Err(err)
            }
        }
    }
}
