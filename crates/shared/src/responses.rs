//! Response envelope and payloads for the query endpoints

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sheetwright_domain::OptionEntry;

// =============================================================================
// Response Result
// =============================================================================

/// Result of a query operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// Operation succeeded
    Success {
        /// Optional data payload (varies by request type)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    /// Operation failed
    Error {
        /// Error classification code
        code: ErrorCode,
        /// Human-readable error message
        message: String,
    },
    /// Unknown response type for forward compatibility
    ///
    /// When deserializing an unknown variant, this variant is used instead of
    /// failing. Allows older clients to gracefully handle new response types.
    #[serde(other)]
    Unknown,
}

impl ResponseResult {
    /// Create a success response with data
    pub fn success<T: Serialize>(data: T) -> Self {
        ResponseResult::Success {
            data: Some(serde_json::to_value(data).unwrap_or_default()),
        }
    }

    /// Create a success response without data
    pub fn success_empty() -> Self {
        ResponseResult::Success { data: None }
    }

    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
        }
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }

    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, ResponseResult::Error { .. })
    }
}

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Request was malformed or invalid
    BadRequest,
    /// Requested resource not found
    NotFound,
    /// Request data failed validation
    ValidationError,
    /// Internal server error
    InternalError,
    /// Required service is unavailable
    ServiceUnavailable,
    /// Operation timed out
    Timeout,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Request Error (Client-Side)
// =============================================================================

/// Client-side request errors
///
/// These are errors that occur on the client side when making requests,
/// distinct from server-side errors returned in `ResponseResult::Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Request was cancelled before completing
    Cancelled,
    /// Request timed out waiting for response
    Timeout,
    /// Failed to send the request
    SendFailed(String),
    /// Not connected to the backend
    NotConnected,
    /// Failed to serialize the request
    SerializationError(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::Cancelled => write!(f, "Request was cancelled"),
            RequestError::Timeout => write!(f, "Request timed out"),
            RequestError::SendFailed(msg) => write!(f, "Failed to send request: {}", msg),
            RequestError::NotConnected => write!(f, "Not connected to backend"),
            RequestError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

// =============================================================================
// Payloads
// =============================================================================

/// Wire shape of one example option, including its metadata attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleOptionData {
    pub value: String,
    pub label: String,
    /// String-typed option metadata (e.g. the poolable flag)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl From<ExampleOptionData> for OptionEntry {
    fn from(data: ExampleOptionData) -> Self {
        let mut entry = OptionEntry::new(data.value, data.label);
        entry.metadata = data.metadata;
        entry
    }
}

/// Payload of a successful load-examples query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadExamplesResponse {
    pub examples: Vec<ExampleOptionData>,
}

/// Payload of a successful load-values query: a plain list of scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadValuesResponse {
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_deserializes_to_unknown() {
        let parsed: ResponseResult =
            serde_json::from_str(r#"{"status": "redirect", "target": "/"}"#).unwrap();
        assert!(matches!(parsed, ResponseResult::Unknown));
    }

    #[test]
    fn test_error_envelope_round_trip() {
        let result = ResponseResult::error(ErrorCode::NotFound, "no such character");
        let json = serde_json::to_string(&result).unwrap();
        let parsed: ResponseResult = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_error());
    }

    #[test]
    fn test_option_data_metadata_defaults_empty() {
        let parsed: ExampleOptionData =
            serde_json::from_str(r#"{"value": "bg_1", "label": "Allies"}"#).unwrap();
        assert!(parsed.metadata.is_empty());
        let entry: OptionEntry = parsed.into();
        assert!(entry.poolable());
    }

    #[test]
    fn test_option_data_converts_with_metadata() {
        let parsed: ExampleOptionData = serde_json::from_str(
            r#"{"value": "bg_2", "label": "Library", "metadata": {"poolable": "false"}}"#,
        )
        .unwrap();
        let entry: OptionEntry = parsed.into();
        assert!(!entry.poolable());
    }
}
