//! Shared error type across olm-metrics crates.

use thiserror::Error;

/// Stable error codes, used as log fields and in assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Listing call could not reach the control plane.
    Transport,
    /// Listing call was rejected by the control plane.
    Unauthorized,
    /// Listing call returned something that is not a resource list.
    MalformedResponse,
    /// Metric name collision at bootstrap.
    AlreadyRegistered,
    /// Registration attempted after bootstrap completed.
    RegistrySealed,
    /// Registration attempted after bootstrap aborted.
    RegistryFailed,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::MalformedResponse => "MALFORMED_RESPONSE",
            ErrorKind::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorKind::RegistrySealed => "REGISTRY_SEALED",
            ErrorKind::RegistryFailed => "REGISTRY_FAILED",
            ErrorKind::BadConfig => "BAD_CONFIG",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("metric already registered: {0}")]
    AlreadyRegistered(String),
    #[error("registry sealed, cannot register: {0}")]
    RegistrySealed(String),
    #[error("registry bootstrap failed, cannot continue: {0}")]
    RegistryFailed(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map to a stable error code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::Transport(_) => ErrorKind::Transport,
            MetricsError::Unauthorized(_) => ErrorKind::Unauthorized,
            MetricsError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            MetricsError::AlreadyRegistered(_) => ErrorKind::AlreadyRegistered,
            MetricsError::RegistrySealed(_) => ErrorKind::RegistrySealed,
            MetricsError::RegistryFailed(_) => ErrorKind::RegistryFailed,
            MetricsError::BadConfig(_) => ErrorKind::BadConfig,
            MetricsError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
            MetricsError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True for errors produced by a listing call.
    pub fn is_listing(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Transport | ErrorKind::Unauthorized | ErrorKind::MalformedResponse
        )
    }
}
