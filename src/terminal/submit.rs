//! Order submission panel.

use serde_json::Value;

use crate::api::OrdersService;
use crate::{Error, Result, VenueClient};

use super::form::OrderDraft;
use super::sink::DisplaySink;
use super::{pretty, REQUEST_FAILED_PREFIX, SUBMITTING_PLACEHOLDER};

/// Interactive order-entry panel.
///
/// Owns the draft the user is editing and the sink the outcome is rendered
/// into. Success and failure bodies go through the same rendering path;
/// only the HTTP status decides whether the draft is cleared afterwards.
///
/// # Example
///
/// ```no_run
/// use tradevenue_rs::terminal::{StdoutSink, SubmitPanel};
///
/// # async fn example(client: tradevenue_rs::VenueClient) -> tradevenue_rs::Result<()> {
/// let mut panel = SubmitPanel::new(&client, StdoutSink);
/// let draft = panel.draft_mut();
/// draft.symbol = "AAPL".to_string();
/// draft.side = "BUY".to_string();
/// draft.order_type = "MARKET".to_string();
/// draft.quantity = "10".to_string();
/// panel.submit().await?;
/// # Ok(())
/// # }
/// ```
pub struct SubmitPanel<S: DisplaySink> {
    orders: OrdersService,
    sink: S,
    draft: OrderDraft,
}

impl<S: DisplaySink> SubmitPanel<S> {
    /// Create a panel rendering into `sink`.
    pub fn new(client: &VenueClient, sink: S) -> Self {
        Self {
            orders: client.orders(),
            sink,
            draft: OrderDraft::default(),
        }
    }

    /// The draft being edited.
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Mutable access to the draft for filling in form fields.
    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Submit the current draft.
    ///
    /// Issues exactly one request. On a success status the acknowledgement
    /// body is rendered pretty-printed and the draft is reset to blank. On
    /// a venue failure the error body is rendered through the same path and
    /// the draft is left untouched for correction; the error is still
    /// returned so programmatic callers see it. Transport failures render a
    /// generic failure line rather than being swallowed.
    pub async fn submit(&mut self) -> Result<Value> {
        let payload = self.draft.payload();
        self.sink.display(SUBMITTING_PLACEHOLDER);

        match self.orders.place(&payload).await {
            Ok(ack) => {
                self.sink.display(&pretty(&ack));
                self.draft.clear();
                Ok(ack)
            }
            Err(Error::Venue { status, body }) => {
                self.sink.display(&pretty(&body));
                Err(Error::Venue { status, body })
            }
            Err(err) => {
                self.sink.display(&format!("{REQUEST_FAILED_PREFIX}{err}"));
                Err(err)
            }
        }
    }
}
