//! Export table and the process-wide registration record.
//!
//! The symbol set is fixed at build time, so registration is a matter of
//! validating the static table, installing conversion adapters and freezing
//! the result. [`register_with`] runs that once per process; every later call
//! returns the same record.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::OnceLock;

use parking_lot::{const_mutex, Mutex};
use planloader_proto::ModuleManifest;
use tracing::{debug, info};

use crate::config::{MODULE_NAME, VERSION};
use crate::error::{Error, Result};
use crate::manifest;

/// Kind of a published symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Attribute,
}

/// One entry of the export table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub name: Cow<'static, str>,
    pub kind: SymbolKind,
    pub signature: Cow<'static, str>,
    pub doc: Cow<'static, str>,
}

impl Export {
    const fn function(name: &'static str, signature: &'static str, doc: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind: SymbolKind::Function,
            signature: Cow::Borrowed(signature),
            doc: Cow::Borrowed(doc),
        }
    }

    const fn attribute(name: &'static str, signature: &'static str, doc: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind: SymbolKind::Attribute,
            signature: Cow::Borrowed(signature),
            doc: Cow::Borrowed(doc),
        }
    }
}

/// Module docstring shown by the host runtime.
pub const MODULE_DOC: &str = "\
planloader binding module
-------------------------

.. currentmodule:: planloader

.. autosummary::
   :toctree: _generate

   add
   subtract
";

pub const ADD_DOC: &str = "Add two numbers\n\nWraps on 32-bit overflow.";
pub const SUBTRACT_DOC: &str = "Subtract two numbers\n\nWraps on 32-bit overflow.";

static EXPORTS: [Export; 3] = [
    Export::function("add", "add(i: int, j: int) -> int", ADD_DOC),
    Export::function("subtract", "subtract(i: int, j: int) -> int", SUBTRACT_DOC),
    Export::attribute("__version__", "__version__: str", "Build version string"),
];

/// The static export table, in registration order.
pub fn exports() -> &'static [Export] {
    &EXPORTS
}

/// Frozen registration record of the loaded module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: &'static str,
    version: &'static str,
    exports: Vec<Export>,
    adapters: Vec<String>,
}

impl Registration {
    /// Build a record after checking that export names are non-empty and
    /// unique.
    pub fn build(exports: &[Export], adapters: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(exports.len());
        for export in exports {
            if export.name.is_empty() {
                return Err(Error::Registration("export with empty name".to_string()));
            }
            if !seen.insert(&*export.name) {
                return Err(Error::Registration(format!(
                    "duplicate export '{}'",
                    export.name
                )));
            }
        }

        Ok(Self {
            name: MODULE_NAME,
            version: VERSION,
            exports: exports.to_vec(),
            adapters,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    /// Names of the conversion adapters installed at load time.
    pub fn adapters(&self) -> &[String] {
        &self.adapters
    }

    pub fn lookup(&self, name: &str) -> Option<&Export> {
        self.exports.iter().find(|e| e.name == name)
    }

    /// The record as a `planloader.v1.ModuleManifest`.
    pub fn manifest(&self) -> ModuleManifest {
        ModuleManifest {
            name: self.name.to_string(),
            version: self.version.to_string(),
            exports: self.exports.iter().map(manifest::to_proto).collect(),
            adapters: self.adapters.clone(),
        }
    }
}

static REGISTRATION: OnceLock<Registration> = OnceLock::new();
static INIT_LOCK: Mutex<()> = const_mutex(());

/// Register the module with no conversion adapters.
pub fn register() -> Result<&'static Registration> {
    register_with(|| Ok::<_, Error>(Vec::new()))
}

/// Register the module, running `install_adapters` at most once per process.
///
/// `install_adapters` returns the names of the adapters it installed. If it
/// fails, nothing is recorded and the error is returned to the caller; a
/// later call will try again.
pub fn register_with<F, E>(install_adapters: F) -> std::result::Result<&'static Registration, E>
where
    F: FnOnce() -> std::result::Result<Vec<String>, E>,
    E: From<Error>,
{
    if let Some(existing) = REGISTRATION.get() {
        debug!(module = existing.name, "module already registered");
        return Ok(existing);
    }

    let _guard = INIT_LOCK.lock();
    if let Some(existing) = REGISTRATION.get() {
        return Ok(existing);
    }

    let adapters = install_adapters()?;
    let registration = Registration::build(exports(), adapters)?;
    info!(
        module = registration.name,
        version = registration.version,
        exports = registration.exports.len(),
        adapters = ?registration.adapters,
        "module registered"
    );

    Ok(REGISTRATION.get_or_init(|| registration))
}

/// The registration record, if the module has been registered.
pub fn registration() -> Option<&'static Registration> {
    REGISTRATION.get()
}
