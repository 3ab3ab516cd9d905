//! Error types for the converter service.

use crate::domain::Category;
use crate::ports::FetchError;

/// Conversion failures. Every failure path of the engine ends in one of these.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown {category} conversion: {id}")]
    UnknownConversion { category: Category, id: String },

    #[error("Exchange rate unavailable: {0}")]
    RateUnavailable(#[from] FetchError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate unavailable: {0}")]
    RateUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            e @ ConversionError::UnknownConversion { .. } => AppError::BadRequest(e.to_string()),
            ConversionError::RateUnavailable(e) => AppError::RateUnavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_conversion_maps_to_bad_request() {
        let err = ConversionError::UnknownConversion {
            category: Category::Time,
            id: "Weeks to days".into(),
        };
        assert_eq!(err.to_string(), "Unknown Time conversion: Weeks to days");
        assert!(matches!(AppError::from(err), AppError::BadRequest(_)));
    }

    #[test]
    fn test_fetch_error_maps_to_rate_unavailable() {
        let err = ConversionError::from(FetchError::Status(500));
        match AppError::from(err) {
            AppError::RateUnavailable(msg) => assert!(msg.contains("500")),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
