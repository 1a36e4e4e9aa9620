//! Error types for notixml

use thiserror::Error;

/// Main error type for notixml
///
/// Range violations are raised at property-set time; a node never holds an
/// out-of-range value.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// An integer property was set outside its documented range
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A progress value was set outside the unit interval
    #[error("progress value must be within 0.0..=1.0, got {value}")]
    ProgressOutOfRange { value: f64 },
}

impl Error {
    /// The name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } => field,
            Self::ProgressOutOfRange { .. } => "value",
        }
    }
}

/// Result type alias for notixml
pub type Result<T> = std::result::Result<T, Error>;
