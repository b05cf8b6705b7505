//! Service layer error types
//!
//! This module defines errors that can occur in the application service
//! layer, abstracting over transport-specific errors.

use serde::de::DeserializeOwned;

use sheetwright_shared::{ErrorCode, RequestError, ResponseResult};

/// Errors that can occur in service operations
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Request failed to send or was cancelled
    Request(RequestError),
    /// Server returned an error response
    ServerError { code: ErrorCode, message: String },
    /// Response was empty when data was expected
    EmptyResponse,
    /// Failed to parse response data
    ParseError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Request(e) => write!(f, "Request error: {}", e),
            ServiceError::ServerError { code, message } => {
                write!(f, "Server error ({:?}): {}", code, message)
            }
            ServiceError::EmptyResponse => write!(f, "Server returned empty response"),
            ServiceError::ParseError(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<RequestError> for ServiceError {
    fn from(e: RequestError) -> Self {
        ServiceError::Request(e)
    }
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::ServerError {
                code: ErrorCode::NotFound,
                ..
            }
        )
    }
}

/// Helper trait for parsing ResponseResult into typed data
pub trait ParseResponse {
    /// Parse a ResponseResult into the expected type
    fn parse<T: DeserializeOwned>(self) -> Result<T, ServiceError>;

    /// Parse a ResponseResult that may return no data
    fn parse_empty(self) -> Result<(), ServiceError>;
}

impl ParseResponse for ResponseResult {
    fn parse<T: DeserializeOwned>(self) -> Result<T, ServiceError> {
        match self {
            ResponseResult::Success { data } => {
                let data = data.ok_or(ServiceError::EmptyResponse)?;
                serde_json::from_value(data).map_err(|e| ServiceError::ParseError(e.to_string()))
            }
            ResponseResult::Error { code, message } => {
                Err(ServiceError::ServerError { code, message })
            }
            ResponseResult::Unknown => Err(ServiceError::ServerError {
                code: ErrorCode::InternalError,
                message: "Unknown response type".to_string(),
            }),
        }
    }

    fn parse_empty(self) -> Result<(), ServiceError> {
        match self {
            ResponseResult::Success { .. } => Ok(()),
            ResponseResult::Error { code, message } => {
                Err(ServiceError::ServerError { code, message })
            }
            ResponseResult::Unknown => Err(ServiceError::ServerError {
                code: ErrorCode::InternalError,
                message: "Unknown response type".to_string(),
            }),
        }
    }
}

/// Default request timeout in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Get the request timeout from environment variable or use default
pub fn get_request_timeout_ms() -> u64 {
    std::env::var("SHEETWRIGHT_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetwright_shared::LoadValuesResponse;

    #[test]
    fn test_parse_success_payload() {
        let result = ResponseResult::success(LoadValuesResponse {
            values: vec!["1".to_string(), "2".to_string()],
        });
        let parsed: LoadValuesResponse = result.parse().unwrap();
        assert_eq!(parsed.values, vec!["1", "2"]);
    }

    #[test]
    fn test_parse_missing_data_is_empty_response() {
        let err = ResponseResult::success_empty()
            .parse::<LoadValuesResponse>()
            .unwrap_err();
        assert!(matches!(err, ServiceError::EmptyResponse));
    }

    #[test]
    fn test_parse_error_envelope() {
        let result = ResponseResult::error(ErrorCode::NotFound, "no such example");
        let err = result.parse::<LoadValuesResponse>().unwrap_err();
        assert!(err.is_not_found());
    }
}
