//! API service modules for venue endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the venue API.

mod instruments;
mod orders;
mod portfolio;
mod trades;

pub use instruments::InstrumentsService;
pub use orders::OrdersService;
pub use portfolio::PortfolioService;
pub use trades::TradesService;
