//! Orders service for order placement and status queries.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::OrderId;
use crate::Result;

/// Service for order operations.
///
/// Acknowledgements and order records are venue-defined documents; they are
/// returned verbatim as `serde_json::Value` rather than destructured.
///
/// # Example
///
/// ```no_run
/// use tradevenue_rs::models::{NewOrder, Side};
/// use tradevenue_rs::OrderId;
///
/// # async fn example(client: tradevenue_rs::VenueClient) -> tradevenue_rs::Result<()> {
/// let ack = client
///     .orders()
///     .place(&NewOrder::limit("AAPL", Side::Buy, 10, 150.5))
///     .await?;
/// println!("ack: {ack}");
///
/// let record = client.orders().get(&OrderId::new("1")).await?;
/// println!("record: {record}");
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Submit a new order.
    ///
    /// Accepts anything serializable so both the typed
    /// [`NewOrder`](crate::models::NewOrder) and a form-coerced raw payload
    /// go through the same path. Exactly one request is issued per call;
    /// nothing is retried or deduplicated.
    ///
    /// # Errors
    ///
    /// A venue rejection surfaces as [`Error::Venue`](crate::Error::Venue)
    /// carrying the verbatim error body.
    pub async fn place<B: Serialize + ?Sized>(&self, order: &B) -> Result<Value> {
        self.inner.post("/orders", order).await
    }

    /// Fetch the current record for an order.
    ///
    /// Repeated calls with the same identifier issue independent fetches;
    /// nothing is cached.
    pub async fn get(&self, order_id: &OrderId) -> Result<Value> {
        self.inner
            .get(&format!(
                "/orders/{}",
                urlencoding::encode(order_id.as_str())
            ))
            .await
    }
}
