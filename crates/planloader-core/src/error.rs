//! Error types for module registration.

use thiserror::Error;

/// Result type for planloader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading the binding module.
///
/// Arithmetic never fails; every variant here is a load-time failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Export table is malformed (empty or duplicate names)
    #[error("registration error: {0}")]
    Registration(String),

    /// A conversion adapter could not be installed
    #[error("adapter '{name}' failed to install: {reason}")]
    Adapter { name: String, reason: String },

    /// Manifest entry cannot be mapped back onto an export
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),
}
