use thiserror::Error;

/// Failures of a single location query against the provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("City name must not be empty")]
    EmptyCity,

    #[error("Cannot find \"{0}\"")]
    NotFound(String),

    #[error("Unable to retrieve weather data")]
    Unreachable,
}

/// Failures while turning a provider payload into a [`crate::WeatherRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("Malformed weather payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid longitude and latitude")]
    InvalidCoordinates,
}

/// Any failure of the fetch-then-normalize pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
