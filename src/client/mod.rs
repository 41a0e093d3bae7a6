//! Venue client and configuration.

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::VenueClient;

pub(crate) use http::ClientInner;
