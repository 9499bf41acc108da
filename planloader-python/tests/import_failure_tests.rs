//! Import fails cleanly when the protobuf runtime is unavailable

mod common;

use planloader::{caster, populate};
use planloader_core::registry;
use pyo3::exceptions::PyImportError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

#[test]
fn test_missing_protobuf_fails_load_then_recovers() {
    Python::with_gil(|py| {
        common::block_protobuf(py);

        let module = PyModule::new(py, "planloader").unwrap();
        let err: PyErr = populate(&module).unwrap_err().into();
        assert!(err.is_instance_of::<PyImportError>(py));

        // Nothing was published or recorded
        assert!(!caster::is_installed(py));
        assert!(registry::registration().is_none());
        assert!(!module.hasattr("add").unwrap());
        assert!(!module.hasattr("__version__").unwrap());

        common::unblock_protobuf(py);
        common::protobuf_stub(py);

        let module = PyModule::new(py, "planloader").unwrap();
        populate(&module).unwrap();
        assert!(caster::is_installed(py));
        assert!(module.hasattr("subtract").unwrap());
    });
}
