//! Instruments service for listing tradable instruments.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::Instrument;
use crate::Result;

/// Service for instrument data operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tradevenue_rs::VenueClient) -> tradevenue_rs::Result<()> {
/// for inst in client.instruments().list().await? {
///     println!("{}", inst.summary_line());
/// }
/// # Ok(())
/// # }
/// ```
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all tradable instruments.
    pub async fn list(&self) -> Result<Vec<Instrument>> {
        self.inner.get("/instruments").await
    }
}
