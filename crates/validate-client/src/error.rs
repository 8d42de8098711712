//! Error types for the Validate API client.

/// Validate client errors.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// A metric was requested that the service cannot compute yet.
    #[error("Validate does not currently support {feature}")]
    UnsupportedFeature { feature: String },

    /// Resource not found (404).
    #[error("not found: {path}")]
    NotFound { path: String },

    /// Non-success status other than 404.
    #[error("server error: HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// Network error.
    #[error("network error: {message}")]
    Network { message: String },

    /// Invalid response from the service.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ValidateError {
    pub(crate) fn unsupported(feature: &str) -> Self {
        Self::UnsupportedFeature {
            feature: feature.to_string(),
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Usage / lookup issues
            Self::NotFound { .. } => 1,
            Self::Config { .. } => 1,

            // Rejected locally before any request
            Self::UnsupportedFeature { .. } => 2,

            // Network/transient
            Self::Network { .. } => 5,
            Self::Server { .. } => 5,

            // Other
            Self::InvalidResponse { .. } => 6,
        }
    }

    /// Whether the error originated locally, before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::UnsupportedFeature { .. } | Self::Config { .. })
    }
}

impl From<reqwest::Error> for ValidateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for Validate operations.
pub type ValidateResult<T> = Result<T, ValidateError>;
