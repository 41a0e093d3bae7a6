//! HTTP client implementation for the venue API.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{InstrumentsService, OrdersService, PortfolioService, TradesService};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the venue API.
///
/// This client provides access to all API services through method calls
/// that return service structs. The client manages request building and
/// response parsing; services share a single connection pool.
///
/// # Example
///
/// ```no_run
/// use tradevenue_rs::{VenueClient, ClientConfig};
///
/// # async fn example() -> tradevenue_rs::Result<()> {
/// let client = VenueClient::new(ClientConfig::default())?;
///
/// // Use the instruments service
/// let instruments = client.instruments().list().await?;
/// println!("{} tradable instruments", instruments.len());
/// # Ok(())
/// # }
/// ```
pub struct VenueClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl VenueClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate up front so every later request can just concatenate.
        Url::parse(&config.base_url)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }

    /// Get the instruments service.
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the trades service.
    pub fn trades(&self) -> TradesService {
        TradesService::new(self.inner.clone())
    }

    /// Get the portfolio service.
    pub fn portfolio(&self) -> PortfolioService {
        PortfolioService::new(self.inner.clone())
    }

    /// The base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }
}

impl ClientInner {
    /// Make a GET request, decoding the success body as `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body, decoding the success body as `T`.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self.http.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Handle a venue response.
    ///
    /// The HTTP status is the sole success/failure signal. Failure bodies
    /// are kept verbatim in [`Error::Venue`] so callers can render them
    /// through the same path as success bodies.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let status_code = status.as_u16();
            let body: Value = response.json().await.unwrap_or_default();
            tracing::warn!(status = status_code, "venue reported failure");
            Err(Error::Venue {
                status: status_code,
                body,
            })
        }
    }
}

impl Clone for VenueClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for VenueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VenueClient")
            .field("base_url", &self.inner.base_url)
            .finish()
    }
}
