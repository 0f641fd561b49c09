//! Core error types for the Alphafolio metrics library.
//!
//! Every fallible operation returns [`Result`]. Errors are raised at the call
//! that cannot proceed and no partial results are produced.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the metrics library.
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer points than a return or a variance needs.
    #[error("Insufficient data: at least {required} points required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid weights: {0}")]
    InvalidWeight(String),

    /// Two or more series share too few dates to be compared.
    #[error("Insufficient overlap: at least {required} aligned dates required, got {actual}")]
    InsufficientOverlap { required: usize, actual: usize },

    /// Benchmark variance, beta or CAGR is zero, so a ratio is undefined.
    #[error("Degenerate benchmark: {0}")]
    DegenerateBenchmark(String),

    #[error("Zero volatility: {0}")]
    ZeroVolatility(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No price history found for '{0}'")]
    PriceHistoryNotFound(String),

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),

    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl Error {
    pub(crate) fn insufficient_data(required: usize, actual: usize) -> Self {
        Error::InsufficientData { required, actual }
    }

    pub(crate) fn insufficient_overlap(required: usize, actual: usize) -> Self {
        Error::InsufficientOverlap { required, actual }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }

    /// Returns true if the error comes from the shape of the data rather
    /// than from a bad argument or a collaborator.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Error::InsufficientData { .. }
                | Error::InsufficientOverlap { .. }
                | Error::DegenerateBenchmark(_)
                | Error::ZeroVolatility(_)
        )
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err.to_string())
    }
}
