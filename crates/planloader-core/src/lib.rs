//! planloader binding core
//!
//! The binding module publishes a fixed set of symbols into a host runtime:
//! `add`, `subtract` and `__version__`. This crate owns everything about that
//! surface that does not depend on the host:
//!
//! - `arith` - the wrapping 32-bit integer functions
//! - `config` - build-time version resolution (`VERSION_INFO`, else `dev`)
//! - `registry` - the static export table and once-per-process registration
//! - `manifest` - conversion between export entries and manifest protos
//! - `error` - load-time error type
//! - `tracing` - logging setup
//! - `ffi` - C ABI (feature `ffi`)
//!
//! # Example
//!
//! ```rust
//! use planloader_core::{add, registry, subtract};
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(subtract(5, 2), 3);
//!
//! let record = registry::register().unwrap();
//! assert!(record.lookup("__version__").is_some());
//! ```

pub mod arith;
pub mod config;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod tracing;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export main types at crate root
pub use arith::{add, subtract};
pub use config::{BuildConfig, MODULE_NAME, VERSION};
pub use error::{Error, Result};
pub use registry::{register, register_with, Export, Registration, SymbolKind};
