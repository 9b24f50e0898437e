//! Core library for the `weatherapp` tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The provider query and payload normalization pipeline
//! - Unit conversions, country lookup and time-of-day theming
//!
//! It is used by `weatherapp-cli`, but holds no presentation state of its own.

pub mod config;
pub mod convert;
pub mod countries;
pub mod error;
pub mod model;
pub mod normalize;
pub mod query;
pub mod theme;

pub use config::{Config, DefaultSection};
pub use convert::degrees_to_dms;
pub use error::{Error, NormalizeError, QueryError};
pub use model::{Coordinates, TemperatureUnit, WeatherRecord};
pub use normalize::{normalize, normalize_at};
pub use query::LocationQuery;
pub use theme::Theme;

/// Fetch current conditions for a location and normalize them into a record.
pub async fn lookup(
    query: &LocationQuery,
    city: &str,
    country: Option<&str>,
) -> Result<WeatherRecord, Error> {
    let json = query.fetch(city, country).await?;
    Ok(normalize(&json)?)
}
