//! Error types for the hook.
//!
//! [`LocationError`] is user-facing: its `Display` text is exactly the string
//! sent to the server in a `location_error` event. The remaining errors are
//! local to the browser and only ever logged or returned to the JS host.

/// Why a location request produced no position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The platform has no geolocation capability at all.
    #[error("Geolocation is not supported by this browser")]
    Unsupported,
    /// The user (or a permissions policy) refused access.
    #[error("Location access denied by user")]
    PermissionDenied,
    /// The platform could not determine a position.
    #[error("Location information unavailable")]
    PositionUnavailable,
    /// No position arrived before the request timeout.
    #[error("Location request timed out")]
    Timeout,
    /// A platform error code outside the known set.
    #[error("Location access denied")]
    Unknown(u16),
}

/// Failure reading or writing the persistent word store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("persistent storage is unavailable")]
    Unavailable,
    /// The backend rejected a read.
    #[error("storage read failed: {0}")]
    Read(String),
    /// The backend rejected a write (quota exceeded, private mode).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A raw host event could not be turned into an [`crate::events::Inbound`].
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("unknown inbound event: {0}")]
    UnknownEvent(String),
    #[error("invalid payload for {event}: {source}")]
    Payload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned by [`crate::config::BridgeConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bridge config: {0}")]
    Parse(#[from] serde_json::Error),
}
