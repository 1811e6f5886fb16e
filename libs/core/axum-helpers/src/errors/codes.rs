//! Error codes attached to error logs.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier, an integer for log
//! aggregation and a default message. Codes never appear in response bodies.

/// Error codes recorded in the `error_code` field of error logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Requested resource was not found
    NotFound,

    /// Request body is not valid JSON for the target type
    InvalidJson,

    /// No route matches the request
    RouteNotFound,

    // Server errors (5000-5999)
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidJson => "INVALID_JSON",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::InvalidJson => 1010,
            Self::RouteNotFound => 1012,
            Self::InternalError => 5000,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "resource not found",
            Self::InvalidJson => "invalid request",
            Self::RouteNotFound => "not found",
            Self::InternalError => "internal server error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
