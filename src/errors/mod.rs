//! Error types for the iconik client.

use std::fmt;
use thiserror::Error;

/// Result type alias for iconik operations.
pub type IconikResult<T> = Result<T, IconikError>;

/// Error kinds for categorizing iconik errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconikErrorKind {
    // Configuration errors
    /// Missing App-ID or Auth-Token.
    MissingAuth,
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Invalid configuration.
    InvalidConfiguration,

    // Local argument errors
    /// Caller supplied a value rejected before any HTTP call.
    InvalidParameter,
    /// Missing required parameter.
    MissingParameter,

    // HTTP error families
    /// Bad request (400).
    BadRequest,
    /// Invalid or missing token (401).
    InvalidToken,
    /// Access forbidden (403).
    Forbidden,
    /// Resource not found (404).
    NotFound,
    /// Resource conflict (409).
    Conflict,
    /// Token expired (419).
    ExpiredToken,
    /// Server error (5xx).
    ServerError,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,

    // Response errors
    /// Body is not JSON or fails DTO validation.
    DeserializationError,

    // Pagination errors
    /// Pagination engine exhausted its retries on a single page.
    PaginationExhausted,

    /// Unknown error.
    Unknown,
}

impl fmt::Display for IconikErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAuth => write!(f, "missing_auth"),
            Self::InvalidBaseUrl => write!(f, "invalid_base_url"),
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::InvalidParameter => write!(f, "invalid_parameter"),
            Self::MissingParameter => write!(f, "missing_parameter"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::InvalidToken => write!(f, "invalid_token"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::ExpiredToken => write!(f, "expired_token"),
            Self::ServerError => write!(f, "server_error"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::DeserializationError => write!(f, "deserialization_error"),
            Self::PaginationExhausted => write!(f, "pagination_exhausted"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// iconik API error with detailed information.
#[derive(Error, Debug)]
pub struct IconikError {
    /// Error kind.
    kind: IconikErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for IconikError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        Ok(())
    }
}

impl IconikError {
    /// Creates a new iconik error.
    pub fn new(kind: IconikErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> &IconikErrorKind {
        &self.kind
    }

    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Returns true if this error is retryable by the transport.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            IconikErrorKind::ConnectionFailed
                | IconikErrorKind::Timeout
                | IconikErrorKind::ServerError
        )
    }

    /// Creates an error from an HTTP status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(Self::kind_from_status(status), message).with_status(status)
    }

    /// Maps HTTP status code to error kind.
    fn kind_from_status(status: u16) -> IconikErrorKind {
        match status {
            400 => IconikErrorKind::BadRequest,
            401 => IconikErrorKind::InvalidToken,
            403 => IconikErrorKind::Forbidden,
            404 => IconikErrorKind::NotFound,
            409 => IconikErrorKind::Conflict,
            419 => IconikErrorKind::ExpiredToken,
            500..=599 => IconikErrorKind::ServerError,
            _ => IconikErrorKind::Unknown,
        }
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(IconikErrorKind::InvalidConfiguration, message)
    }

    /// Creates an invalid-parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(IconikErrorKind::InvalidParameter, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(IconikErrorKind::ConnectionFailed, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(IconikErrorKind::Timeout, message)
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(IconikErrorKind::DeserializationError, message)
    }

    /// Creates a pagination-exhaustion error.
    pub fn pagination(message: impl Into<String>) -> Self {
        Self::new(IconikErrorKind::PaginationExhausted, message)
    }
}

impl From<serde_json::Error> for IconikError {
    fn from(e: serde_json::Error) -> Self {
        IconikError::deserialization(format!("JSON error: {}", e)).with_cause(e)
    }
}
