//! Logging setup.
//!
//! The filter is read from `PLANLOADER_LOG`, then `RUST_LOG`, then falls back
//! to the given default.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PLANLOADER_LOG";

/// Initialize tracing with planloader defaults.
///
/// Returns `false` when a global subscriber is already installed, e.g. when
/// the host process configured its own or the module was loaded before.
pub fn init() -> bool {
    init_with_filter("warn")
}

/// Initialize tracing with a custom default filter.
pub fn init_with_filter(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_with_filter("debug");
        assert!(!init());
    }
}
