use crate::error::{LoadError, Section};
use crate::model::{BannedIdentConfig, PolicyDocumentV1};
use bancheck_domain::model::{BanEntry, Exemption, SourceId};
use bancheck_domain::{BanPolicy, PolicyTable};
use camino::Utf8Path;
use std::io::ErrorKind;

/// Ban tables declared by a single policy document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentTables {
    pub imports: PolicyTable,
    pub functions: PolicyTable,
}

/// Parse one policy document. `path` is only used for error reporting.
pub fn parse_policy_json(
    bytes: &[u8],
    path: &Utf8Path,
    source: SourceId,
) -> Result<DocumentTables, LoadError> {
    let doc: PolicyDocumentV1 =
        serde_json::from_slice(bytes).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(DocumentTables {
        imports: build_table(doc.imports.unwrap_or_default(), Section::Imports, path, source)?,
        functions: build_table(
            doc.functions.unwrap_or_default(),
            Section::Functions,
            path,
            source,
        )?,
    })
}

fn build_table(
    idents: Vec<BannedIdentConfig>,
    section: Section,
    path: &Utf8Path,
    source: SourceId,
) -> Result<PolicyTable, LoadError> {
    let mut table = PolicyTable::new();
    for (index, ident) in idents.into_iter().enumerate() {
        if ident.name.trim().is_empty() {
            return Err(LoadError::EmptyIdentifier {
                path: path.to_path_buf(),
                section,
                index,
            });
        }

        table.insert(BanEntry {
            name: ident.name,
            message: ident.msg.unwrap_or_default(),
            exemptions: ident
                .exemptions
                .unwrap_or_default()
                .into_iter()
                .map(|e| Exemption {
                    justification: e.justification,
                    allowed_dir: e.allowed_dir,
                })
                .collect(),
            source,
        });
    }
    Ok(table)
}

/// Load and merge policy documents in the given order.
///
/// Stops at the first document that cannot be read or parsed; no partial policy is
/// returned in that case.
pub fn load_policy<I, P>(paths: I) -> Result<BanPolicy, LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Utf8Path>,
{
    let mut sources = Vec::new();
    let mut imports = Vec::new();
    let mut functions = Vec::new();

    for (index, path) in paths.into_iter().enumerate() {
        let path = path.as_ref();
        let bytes = read_policy_file(path)?;
        let doc = parse_policy_json(&bytes, path, SourceId::new(index))?;

        tracing::debug!(
            path = %path,
            imports = doc.imports.entry_count(),
            functions = doc.functions.entry_count(),
            "loaded policy document"
        );

        sources.push(path.to_string());
        imports.push(doc.imports);
        functions.push(doc.functions);
    }

    Ok(BanPolicy {
        sources,
        imports: PolicyTable::merge(imports),
        functions: PolicyTable::merge(functions),
    })
}

fn read_policy_file(path: &Utf8Path) -> Result<Vec<u8>, LoadError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    std::fs::read(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
