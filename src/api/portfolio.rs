//! Portfolio service for holdings snapshots.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::Result;

/// Service for portfolio queries.
///
/// The snapshot shape is venue-defined and returned verbatim.
pub struct PortfolioService {
    inner: Arc<ClientInner>,
}

impl PortfolioService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current portfolio snapshot.
    pub async fn get(&self) -> Result<Value> {
        self.inner.get("/portfolio").await
    }
}
