//! planloader Python extension module
//!
//! Built as `planloader.so`/`planloader.pyd`. Loading it:
//!
//! 1. installs the protobuf adapters (`caster`), failing the import if the
//!    Python protobuf runtime is unavailable
//! 2. publishes `add`, `subtract` and `__version__`
//!
//! ## Module Structure
//!
//! - `caster` - `Proto<M>` conversion between prost messages and Python
//! - `error` - load-time error mapping to Python exceptions

pub mod caster;
pub mod error;

use pyo3::prelude::*;
use tracing::debug;

use planloader_core::registry;

pub use caster::Proto;
pub use error::BindingError;

/// Add two numbers
///
/// Wraps on 32-bit overflow.
#[pyfunction]
#[pyo3(signature = (i, j))]
pub fn add(i: i32, j: i32) -> i32 {
    planloader_core::add(i, j)
}

/// Subtract two numbers
///
/// Wraps on 32-bit overflow.
#[pyfunction]
#[pyo3(signature = (i, j))]
pub fn subtract(i: i32, j: i32) -> i32 {
    planloader_core::subtract(i, j)
}

/// Install the adapters, then populate `m` with the registered exports.
///
/// Adapters are installed on every call, even when the registration record
/// already exists; installation itself is idempotent.
pub fn populate(m: &Bound<'_, PyModule>) -> Result<(), BindingError> {
    caster::install(m.py())?;
    let registration =
        registry::register_with(|| Ok::<_, BindingError>(vec![caster::ADAPTER_NAME.to_string()]))?;

    m.setattr("__doc__", registry::MODULE_DOC)?;
    m.add_function(wrap_pyfunction!(add, m)?)?;
    m.add_function(wrap_pyfunction!(subtract, m)?)?;
    m.setattr("__version__", registration.version())?;

    for export in registration.exports() {
        if !m.hasattr(&*export.name)? {
            return Err(BindingError::MissingExport(export.name.to_string()));
        }
    }

    debug!(
        version = registration.version(),
        adapters = ?registration.adapters(),
        "planloader module populated"
    );
    Ok(())
}

#[pymodule]
pub fn planloader(m: &Bound<'_, PyModule>) -> PyResult<()> {
    planloader_core::tracing::init();
    populate(m)?;
    Ok(())
}
