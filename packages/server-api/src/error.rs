//! Standard error response body.

use serde::{Deserialize, Serialize};

/// The JSON body returned for all error responses.
///
/// ```json
/// { "error": "Request body is empty. PlantUML source required.", "code": "empty_body" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable description of the problem.
    pub error: String,

    /// Machine-readable error code.
    ///
    /// | `code` | HTTP status |
    /// |--------|------------|
    /// | `missing_headers` | 400 |
    /// | `empty_body` | 400 |
    /// | `invalid_context` | 400 |
    /// | `invalid_parameter` | 400 |
    /// | `not_found` | 404 |
    /// | `parse_failed` | 422 |
    /// | `conversion_failed` | 500 |
    /// | `internal_error` | 500 |
    pub code: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a static code and message.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}

/// Well-known error codes.
pub mod codes {
    pub const MISSING_HEADERS: &str = "missing_headers";
    pub const EMPTY_BODY: &str = "empty_body";
    pub const INVALID_CONTEXT: &str = "invalid_context";
    pub const INVALID_PARAMETER: &str = "invalid_parameter";
    pub const NOT_FOUND: &str = "not_found";
    pub const PARSE_FAILED: &str = "parse_failed";
    pub const CONVERSION_FAILED: &str = "conversion_failed";
    pub const INTERNAL_ERROR: &str = "internal_error";
}
