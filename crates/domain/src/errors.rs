//! Error types used throughout the library
//!
//! Four error kinds, distinguished only by which fields are populated:
//! client configuration problems and validation failures are raised before
//! any network call, API errors carry the vendor's status/code/more_info
//! verbatim, and the helper kind is reserved for composed operations.

use serde::Serialize;
use thiserror::Error;

/// Default status for client configuration errors (missing credentials).
pub const CLIENT_CONFIG_STATUS: u16 = 401;

/// Default status for validation errors (precondition failed).
pub const VALIDATION_STATUS: u16 = 428;

/// Main error type for RelayKit
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelayError {
    /// The Twilio client is missing, misconfigured, or could not be built.
    #[error("{message}")]
    ClientConfig {
        /// Human-readable summary.
        message: String,
        /// HTTP-style status for response shaping.
        status: u16,
        /// Free-text guidance for the caller.
        details: String,
    },

    /// An input failed its precondition before the call was issued.
    #[error("{message}")]
    Validation {
        /// Human-readable summary, prefixed with the operation name.
        message: String,
        /// HTTP-style status for response shaping.
        status: u16,
        /// Description of the violated rule.
        details: String,
    },

    /// The underlying Twilio API call was rejected.
    #[error("{message}")]
    Api {
        /// Vendor message, prefixed with the operation name.
        message: String,
        /// Vendor HTTP status, propagated verbatim (0 when the request
        /// never produced a response).
        status: u16,
        /// Vendor machine-readable error code (e.g. "20404").
        code: String,
        /// Vendor documentation link.
        more_info: String,
        /// Free-text details.
        details: String,
    },

    /// Raised by higher-level composed operations.
    #[error("{message}")]
    Helper {
        /// Human-readable summary, prefixed with the operation name.
        message: String,
        /// HTTP-style status.
        status: u16,
        /// Machine-readable error code stable across releases.
        code: String,
        /// Documentation link.
        more_info: String,
        /// Free-text details.
        details: String,
    },
}

impl RelayError {
    /// Client configuration error with the default 401 status.
    pub fn client_config(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ClientConfig {
            message: message.into(),
            status: CLIENT_CONFIG_STATUS,
            details: details.into(),
        }
    }

    /// Validation error for `operation` with the default 428 status.
    pub fn validation(operation: &str, details: impl Into<String>) -> Self {
        Self::Validation {
            message: format!("{operation}: required parameter not provided"),
            status: VALIDATION_STATUS,
            details: details.into(),
        }
    }

    /// Vendor API error, message prefixed with the originating operation.
    pub fn api(
        operation: &str,
        vendor_message: impl AsRef<str>,
        status: u16,
        code: impl Into<String>,
        more_info: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::Api {
            message: format!("{operation}: {}", vendor_message.as_ref()),
            status,
            code: code.into(),
            more_info: more_info.into(),
            details: details.into(),
        }
    }

    /// Helper error for composed operations.
    pub fn helper(
        operation: &str,
        summary: impl AsRef<str>,
        status: u16,
        code: impl Into<String>,
        more_info: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::Helper {
            message: format!("{operation}: {}", summary.as_ref()),
            status,
            code: code.into(),
            more_info: more_info.into(),
            details: details.into(),
        }
    }

    /// The HTTP-style status carried by this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::ClientConfig { status, .. }
            | Self::Validation { status, .. }
            | Self::Api { status, .. }
            | Self::Helper { status, .. } => *status,
        }
    }

    /// Vendor or helper error code, when the kind carries one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } | Self::Helper { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Documentation link, when the kind carries one.
    pub fn more_info(&self) -> Option<&str> {
        match self {
            Self::Api { more_info, .. } | Self::Helper { more_info, .. } => Some(more_info),
            _ => None,
        }
    }

    /// Free-text details.
    pub fn details(&self) -> &str {
        match self {
            Self::ClientConfig { details, .. }
            | Self::Validation { details, .. }
            | Self::Api { details, .. }
            | Self::Helper { details, .. } => details,
        }
    }
}

/// Result type alias for RelayKit operations
pub type Result<T> = std::result::Result<T, RelayError>;
