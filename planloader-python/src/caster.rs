//! Protobuf conversion across the Python boundary.
//!
//! [`Proto<M>`] wraps any prost message so it can appear directly in
//! `#[pyfunction]` signatures. Python callers may pass serialized `bytes`,
//! a `bytearray`, or a `google.protobuf` message of the same full name.
//! Returned values become Python message objects when the default descriptor
//! pool knows the type, and serialized `bytes` otherwise.
//!
//! [`install`] imports the Python protobuf runtime and must succeed before
//! the module finishes loading.

use prost::{Message, Name};
use pyo3::exceptions::{PyKeyError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::sync::GILOnceCell;
use pyo3::types::{PyByteArray, PyBytes};
use tracing::debug;

use planloader_proto::codec;

/// Name recorded in the registration record for this adapter.
pub const ADAPTER_NAME: &str = "protobuf";

/// Handles into the Python protobuf runtime, imported once per process.
struct ProtobufRuntime {
    message_type: Py<PyAny>,
    descriptor_pool: Py<PyAny>,
    message_factory: Py<PyModule>,
}

static RUNTIME: GILOnceCell<ProtobufRuntime> = GILOnceCell::new();

fn runtime(py: Python<'_>) -> PyResult<&ProtobufRuntime> {
    RUNTIME.get_or_try_init(py, || {
        let message = py.import("google.protobuf.message")?;
        let descriptor_pool = py.import("google.protobuf.descriptor_pool")?;
        let message_factory = py.import("google.protobuf.message_factory")?;
        debug!("python protobuf runtime imported");

        Ok(ProtobufRuntime {
            message_type: message.getattr("Message")?.unbind(),
            descriptor_pool: descriptor_pool.call_method0("Default")?.unbind(),
            message_factory: message_factory.unbind(),
        })
    })
}

/// Install the protobuf adapters. Repeated calls are no-ops.
pub fn install(py: Python<'_>) -> PyResult<()> {
    runtime(py).map(|_| ())
}

/// Whether [`install`] has completed in this process.
pub fn is_installed(py: Python<'_>) -> bool {
    RUNTIME.get(py).is_some()
}

/// A prost message crossing the Python boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Proto<M>(pub M);

impl<M> Proto<M> {
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M> From<M> for Proto<M> {
    fn from(message: M) -> Self {
        Proto(message)
    }
}

fn decode<M: Message + Default>(bytes: &[u8]) -> PyResult<M> {
    codec::decode(bytes).map_err(|e| {
        PyValueError::new_err(format!("failed to parse {}: {e}", std::any::type_name::<M>()))
    })
}

impl<'py, M> FromPyObject<'py> for Proto<M>
where
    M: Message + Name + Default,
{
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        if let Ok(bytes) = ob.downcast::<PyBytes>() {
            return decode(bytes.as_bytes()).map(Proto);
        }
        if let Ok(array) = ob.downcast::<PyByteArray>() {
            return decode(&array.to_vec()).map(Proto);
        }

        let py = ob.py();
        let runtime = runtime(py)?;
        if !ob.is_instance(runtime.message_type.bind(py))? {
            return Err(PyTypeError::new_err(format!(
                "expected {} message or bytes, got {}",
                M::full_name(),
                ob.get_type().name()?
            )));
        }

        let full_name: String = ob
            .getattr("DESCRIPTOR")?
            .getattr("full_name")?
            .extract()?;
        if full_name != M::full_name() {
            return Err(PyTypeError::new_err(format!(
                "expected {} message, got {}",
                M::full_name(),
                full_name
            )));
        }

        let serialized = ob.call_method0("SerializeToString")?;
        decode(serialized.downcast::<PyBytes>()?.as_bytes()).map(Proto)
    }
}

impl<'py, M> IntoPyObject<'py> for Proto<M>
where
    M: Message + Name,
{
    type Target = PyAny;
    type Output = Bound<'py, PyAny>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let bytes = PyBytes::new(py, &codec::encode(&self.0));

        let Some(runtime) = RUNTIME.get(py) else {
            return Ok(bytes.into_any());
        };

        let descriptor = match runtime
            .descriptor_pool
            .bind(py)
            .call_method1("FindMessageTypeByName", (M::full_name(),))
        {
            Ok(descriptor) => descriptor,
            Err(e) if e.is_instance_of::<PyKeyError>(py) => return Ok(bytes.into_any()),
            Err(e) => return Err(e),
        };

        let class = runtime
            .message_factory
            .bind(py)
            .call_method1("GetMessageClass", (descriptor,))?;
        class.call_method1("FromString", (bytes,))
    }
}
