//! Order status panel.

use serde_json::Value;

use crate::api::OrdersService;
use crate::models::OrderId;
use crate::{Error, Result, VenueClient};

use super::sink::DisplaySink;
use super::{pretty, LOADING_PLACEHOLDER, REQUEST_FAILED_PREFIX};

/// Guidance shown when a status check is requested with no order ID.
pub const ORDER_ID_PROMPT: &str = "Enter an order ID.";

/// On-demand order status panel.
///
/// Fetches an order record by user-supplied identifier and renders the
/// decoded body verbatim. The panel does not interpret order state; reading
/// "filled" vs "rejected" out of the record is left to the human.
pub struct StatusPanel<S: DisplaySink> {
    orders: OrdersService,
    sink: S,
}

impl<S: DisplaySink> StatusPanel<S> {
    /// Create a panel rendering into `sink`.
    pub fn new(client: &VenueClient, sink: S) -> Self {
        Self {
            orders: client.orders(),
            sink,
        }
    }

    /// Check the status of an order.
    ///
    /// Blank input short-circuits with [`ORDER_ID_PROMPT`] and issues no
    /// network call, returning `Ok(None)`. Otherwise exactly one GET is
    /// issued and the decoded body is rendered pretty-printed regardless of
    /// the venue's status code. Repeated calls with the same identifier
    /// fetch independently; nothing is cached.
    pub async fn check(&self, order_id: &str) -> Result<Option<Value>> {
        if order_id.trim().is_empty() {
            self.sink.display(ORDER_ID_PROMPT);
            return Ok(None);
        }

        self.sink.display(LOADING_PLACEHOLDER);
        match self.orders.get(&OrderId::new(order_id)).await {
            Ok(record) => {
                self.sink.display(&pretty(&record));
                Ok(Some(record))
            }
            // A failure status still carries a record-shaped body; render
            // it through the same path and hand it back.
            Err(Error::Venue { body, .. }) => {
                self.sink.display(&pretty(&body));
                Ok(Some(body))
            }
            Err(err) => {
                self.sink.display(&format!("{REQUEST_FAILED_PREFIX}{err}"));
                Err(err)
            }
        }
    }
}
