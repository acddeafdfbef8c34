use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Network failure or a non-2xx HTTP status
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Well-formed response carrying a GraphQL error list (or no data)
    #[error("Upstream query error: {0}")]
    UpstreamQueryError(String),

    /// A required credential or project setting is missing
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// True for failures caused by the network or the remote service itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::TransportError(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::TransportError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::TransportError("Failed to connect to external service".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::TransportError(format!("HTTP {}: {}", status, err))
        } else {
            AppError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_with_type_tag() {
        let err = AppError::UpstreamQueryError("bad field".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "UpstreamQueryError");
        assert_eq!(json["message"], "bad field");
    }

    #[test]
    fn test_serde_json_error_maps_to_serialization() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: AppError = parse_err.into();

        assert!(matches!(err, AppError::SerializationError(_)));
        assert!(!err.is_transport());
    }
}
