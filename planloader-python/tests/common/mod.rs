//! In-process stand-in for the `google.protobuf` runtime.
//!
//! Only the surface the adapters touch is provided: `message.Message`,
//! `descriptor_pool.Default()` and `message_factory.GetMessageClass()`.
//! Stub messages carry their serialized payload verbatim.

#![allow(dead_code)]

use std::ffi::CString;

use pyo3::prelude::*;

const STUB_MODULE: &str = "_planloader_protobuf_stub";

const STUB_SOURCE: &str = r#"
import sys
import types

if "_planloader_protobuf_stub" not in sys.modules:
    stub = types.ModuleType("_planloader_protobuf_stub")

    class Message:
        pass

    class Descriptor:
        def __init__(self, full_name):
            self.full_name = full_name

    class Pool:
        def __init__(self):
            self.classes = {}

        def FindMessageTypeByName(self, full_name):
            if full_name not in self.classes:
                raise KeyError(full_name)
            return Descriptor(full_name)

    pool = Pool()

    def message_class(full_name):
        class StubMessage(Message):
            DESCRIPTOR = Descriptor(full_name)

            def __init__(self, payload=b""):
                self.payload = bytes(payload)

            def SerializeToString(self):
                return self.payload

            @classmethod
            def FromString(cls, data):
                return cls(data)

        StubMessage.__name__ = full_name.rsplit(".", 1)[-1]
        return StubMessage

    def register(full_name):
        cls = message_class(full_name)
        pool.classes[full_name] = cls
        return cls

    google = types.ModuleType("google")
    protobuf = types.ModuleType("google.protobuf")
    message = types.ModuleType("google.protobuf.message")
    descriptor_pool = types.ModuleType("google.protobuf.descriptor_pool")
    message_factory = types.ModuleType("google.protobuf.message_factory")

    message.Message = Message
    descriptor_pool.Default = lambda: pool
    message_factory.GetMessageClass = lambda descriptor: pool.classes[descriptor.full_name]

    google.protobuf = protobuf
    protobuf.message = message
    protobuf.descriptor_pool = descriptor_pool
    protobuf.message_factory = message_factory

    stub.message_class = message_class
    stub.register = register
    stub.pool = pool

    sys.modules.update({
        "google": google,
        "google.protobuf": protobuf,
        "google.protobuf.message": message,
        "google.protobuf.descriptor_pool": descriptor_pool,
        "google.protobuf.message_factory": message_factory,
        "_planloader_protobuf_stub": stub,
    })
"#;

/// Install the stub runtime (once per process) and return its helper module.
pub fn protobuf_stub(py: Python<'_>) -> Bound<'_, PyModule> {
    let source = CString::new(STUB_SOURCE).unwrap();
    py.run(&source, None, None).unwrap();
    py.import(STUB_MODULE).unwrap()
}

/// Make `google.protobuf` unimportable in this process.
pub fn block_protobuf(py: Python<'_>) {
    py.run(
        c"import sys\nfor name in ('google.protobuf.message', 'google.protobuf.descriptor_pool', 'google.protobuf.message_factory'):\n    sys.modules[name] = None\n",
        None,
        None,
    )
    .unwrap();
}

/// Undo [`block_protobuf`].
pub fn unblock_protobuf(py: Python<'_>) {
    py.run(
        c"import sys\nfor name in ('google.protobuf.message', 'google.protobuf.descriptor_pool', 'google.protobuf.message_factory'):\n    sys.modules.pop(name, None)\n",
        None,
        None,
    )
    .unwrap();
}
