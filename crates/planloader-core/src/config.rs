//! Build-time configuration.

/// Module version: `VERSION_INFO` at build time, or `dev`.
pub const VERSION: &str = env!("PLANLOADER_VERSION");

/// Version used when `VERSION_INFO` is not supplied.
pub const DEFAULT_VERSION: &str = "dev";

/// Name the module registers itself under.
pub const MODULE_NAME: &str = "planloader";

/// Values fixed when the crate was compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    pub version: &'static str,
    /// Whether `version` came from `VERSION_INFO`
    pub version_from_env: bool,
    pub crate_version: &'static str,
}

impl BuildConfig {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            version_from_env: env!("PLANLOADER_VERSION_FROM_ENV") == "true",
            crate_version: env!("CARGO_PKG_VERSION"),
        }
    }
}
