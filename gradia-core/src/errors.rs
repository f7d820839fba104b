use thiserror::Error;

use crate::stop::StopId;

/// Errors reported by gradient model operations.
///
/// Every failing operation leaves the model in its prior state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    /// Removing a stop would shrink the gradient below the minimum.
    #[error("minimum {minimum} color stops required")]
    InvalidRemoval { minimum: usize },

    /// Preset index or name does not exist in the catalog.
    #[error("unknown preset: {reference}")]
    InvalidPresetReference { reference: String },

    /// Position input could not be read as an integer.
    #[error("invalid numeric input: {input:?}")]
    InvalidNumericInput { input: String },

    /// The stop id does not belong to the collection.
    #[error("unknown color stop {0}")]
    UnknownStop(StopId),

    /// A keyword is not part of the closed set for `field`.
    #[error("unknown {field} keyword: {value:?}")]
    InvalidKeyword { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, GradientError>;
