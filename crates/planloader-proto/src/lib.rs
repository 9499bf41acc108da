//! Protocol Buffer types for planloader.
//!
//! The manifest schema (`planloader.v1`) describes the registration record of
//! the binding module: its name, version, exported symbols and the conversion
//! adapters installed at load time.
//!
//! Types are generated at build time with serde support for JSON output.
//! Uses protoc-bin-vendored to avoid requiring protoc installation.

pub mod v1 {
    #![allow(clippy::derive_partial_eq_without_eq)]
    include!(concat!(env!("OUT_DIR"), "/planloader.v1.rs"));
}

pub use v1::*;

pub mod codec;

pub use codec::CodecError;
