//! Load-time errors surfaced to Python.

use pyo3::exceptions::PyImportError;
use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error(transparent)]
    Core(#[from] planloader_core::Error),

    /// Raised by the interpreter, e.g. `google.protobuf` is not importable
    #[error("{0}")]
    Python(#[from] PyErr),

    #[error("module is missing exported symbol '{0}'")]
    MissingExport(String),
}

impl From<BindingError> for PyErr {
    fn from(err: BindingError) -> Self {
        match err {
            BindingError::Python(e) => e,
            other => PyImportError::new_err(other.to_string()),
        }
    }
}
