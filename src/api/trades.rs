//! Trades service for listing executed trades.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::Result;

/// Service for executed-trade queries.
///
/// Trade records are venue-defined and returned verbatim.
pub struct TradesService {
    inner: Arc<ClientInner>,
}

impl TradesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all executed trades.
    pub async fn list(&self) -> Result<Value> {
        self.inner.get("/trades").await
    }
}
