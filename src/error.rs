// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Top-level application error.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for REST backend failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Could not reach the backend (DNS, refused connection, timeout).
    Network(String),

    /// The backend answered with a non-success status code.
    Status { code: u16, message: String },

    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "error-api-network",
            ApiError::Status { code, .. } if *code == 404 => "error-api-not-found",
            ApiError::Status { .. } => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                code: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { code, message } => {
                write!(f, "Backend returned HTTP {}: {}", code, message)
            }
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Configuration Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for ApiError {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_dedicated_key() {
        let err = ApiError::Status {
            code: 404,
            message: "missing".into(),
        };
        assert_eq!(err.i18n_key(), "error-api-not-found");
    }

    #[test]
    fn other_statuses_share_a_key() {
        let err = ApiError::Status {
            code: 500,
            message: "boom".into(),
        };
        assert_eq!(err.i18n_key(), "error-api-status");
    }

    #[test]
    fn display_includes_status_code() {
        let err = ApiError::Status {
            code: 503,
            message: "unavailable".into(),
        };
        assert!(err.to_string().contains("503"));
    }
}
