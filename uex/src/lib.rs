//! Client for the UEX trade catalogue API.
//!
//! The API serves commodity and star-system reference data as JSON envelopes of the shape
//! `{"data": [...]}`. This crate wraps the handful of catalogue resources the synchronisation
//! service consumes behind a builder-configured [`Client`], grouping endpoints by area:
//!
//! ```ignore
//! let client = uex::Client::builder()
//!     .base_url("https://api.uexcorp.space/2.0")
//!     .api_key("secret")
//!     .build()?;
//!
//! let commodities = client.commodities().get_commodities().await?;
//! let systems = client.universe().get_star_systems().await?;
//! let planets = client.universe().get_planets(systems[0].id).await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use error::{ConfigError, Error};
