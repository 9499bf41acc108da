//! Conversion between export table entries and manifest protos.

use std::borrow::Cow;

use planloader_proto::{ExportedSymbol, SymbolKind as ProtoSymbolKind};

use crate::error::{Error, Result};
use crate::registry::{Export, SymbolKind};

impl From<SymbolKind> for ProtoSymbolKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Function => ProtoSymbolKind::Function,
            SymbolKind::Attribute => ProtoSymbolKind::Attribute,
        }
    }
}

/// Convert an export table entry to its proto form.
pub fn to_proto(export: &Export) -> ExportedSymbol {
    ExportedSymbol {
        name: export.name.to_string(),
        kind: ProtoSymbolKind::from(export.kind) as i32,
        signature: export.signature.to_string(),
        doc: export.doc.to_string(),
    }
}

/// Convert a proto symbol back to an export entry.
///
/// Fails when the kind is unspecified or not a known enum value.
pub fn from_proto(symbol: ExportedSymbol) -> Result<Export> {
    let kind = match ProtoSymbolKind::try_from(symbol.kind) {
        Ok(ProtoSymbolKind::Function) => SymbolKind::Function,
        Ok(ProtoSymbolKind::Attribute) => SymbolKind::Attribute,
        Ok(ProtoSymbolKind::Unspecified) | Err(_) => {
            return Err(Error::InvalidManifest(format!(
                "symbol '{}' has unsupported kind {}",
                symbol.name, symbol.kind
            )))
        }
    };

    Ok(Export {
        name: Cow::Owned(symbol.name),
        kind,
        signature: Cow::Owned(symbol.signature),
        doc: Cow::Owned(symbol.doc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::exports;

    #[test]
    fn test_proto_roundtrip() {
        for export in exports() {
            let back = from_proto(to_proto(export)).unwrap();
            assert_eq!(&back, export);
        }
    }

    #[test]
    fn test_kind_mapping() {
        let proto = to_proto(&exports()[2]);
        assert_eq!(proto.kind(), ProtoSymbolKind::Attribute);
    }

    #[test]
    fn test_unspecified_kind_rejected() {
        let symbol = ExportedSymbol {
            name: "mystery".to_string(),
            ..Default::default()
        };
        let err = from_proto(symbol).unwrap_err();
        assert!(matches!(err, Error::InvalidManifest(_)));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let symbol = ExportedSymbol {
            name: "mystery".to_string(),
            kind: 42,
            ..Default::default()
        };
        assert!(from_proto(symbol).is_err());
    }
}
