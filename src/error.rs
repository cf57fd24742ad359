use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum RevGeoError {
    /// The shape of an input does not match how the index was configured,
    /// e.g. a coordinate whose dimensionality differs from the tree's.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A query parameter that can never produce a meaningful result, e.g. a
    /// negative search radius.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, RevGeoError>;
