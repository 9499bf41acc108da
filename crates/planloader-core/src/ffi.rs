//! C-compatible FFI interface
//!
//! Exposes the export table through a C ABI so non-Python hosts can link the
//! module directly.
//!
//! # Memory Ownership Rules
//!
//! - `planloader_version()` returns a static string; callers must not free it
//! - `planloader_manifest()` allocates on the Rust heap, caller owns the pointer
//! - `planloader_manifest_free()` must be called to deallocate it

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use planloader_proto::codec;
use tracing::warn;

use crate::{arith, registry};

/// Serialized `planloader.v1.ModuleManifest`.
///
/// Exactly one of `buffer` and `error_message` is non-null.
#[repr(C)]
pub struct SerializedManifest {
    pub buffer: *mut u8,
    pub size: u32,
    pub error_message: *mut c_char,
}

impl SerializedManifest {
    fn ok(bytes: Vec<u8>) -> Result<Self, String> {
        let size = u32::try_from(bytes.len())
            .map_err(|_| format!("manifest of {} bytes exceeds u32 range", bytes.len()))?;
        let buffer = if bytes.is_empty() {
            ptr::null_mut()
        } else {
            Box::into_raw(bytes.into_boxed_slice()) as *mut u8
        };
        Ok(Self {
            buffer,
            size,
            error_message: ptr::null_mut(),
        })
    }

    fn error(msg: &str) -> Self {
        Self {
            buffer: ptr::null_mut(),
            size: 0,
            error_message: CString::new(msg)
                .unwrap_or_else(|_| CString::from(c"error message contains null"))
                .into_raw(),
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

#[no_mangle]
pub extern "C" fn planloader_add(i: i32, j: i32) -> i32 {
    arith::add(i, j)
}

#[no_mangle]
pub extern "C" fn planloader_subtract(i: i32, j: i32) -> i32 {
    arith::subtract(i, j)
}

// ============================================================================
// Module metadata
// ============================================================================

#[no_mangle]
pub extern "C" fn planloader_version() -> *const c_char {
    concat!(env!("PLANLOADER_VERSION"), "\0").as_ptr() as *const c_char
}

/// Register the module (once) and return its serialized manifest.
#[no_mangle]
pub extern "C" fn planloader_manifest() -> *mut SerializedManifest {
    let result = registry::register()
        .map_err(|e| e.to_string())
        .and_then(|registration| SerializedManifest::ok(codec::encode(&registration.manifest())));

    let manifest = result.unwrap_or_else(|msg| {
        warn!(error = %msg, "manifest export failed");
        SerializedManifest::error(&msg)
    });
    Box::into_raw(Box::new(manifest))
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn planloader_manifest_free(manifest: *mut SerializedManifest) {
    if manifest.is_null() {
        return;
    }

    let manifest = unsafe { Box::from_raw(manifest) };
    if !manifest.buffer.is_null() && manifest.size > 0 {
        unsafe {
            let _ = Box::from_raw(ptr::slice_from_raw_parts_mut(
                manifest.buffer,
                manifest.size as usize,
            ));
        }
    }
    if !manifest.error_message.is_null() {
        unsafe {
            let _ = CString::from_raw(manifest.error_message);
        }
    }
}
