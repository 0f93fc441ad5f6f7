use crate::model::{BanEntry, Exemption, Occurrence, OccurrenceKind, SourceId};
use crate::policy::{BanPolicy, PolicyTable};

pub fn entry(name: &str, message: &str, source: usize) -> BanEntry {
    BanEntry {
        name: name.to_string(),
        message: message.to_string(),
        exemptions: Vec::new(),
        source: SourceId::new(source),
    }
}

pub fn entry_with_exemptions(name: &str, allowed_dirs: &[&str]) -> BanEntry {
    BanEntry {
        exemptions: allowed_dirs
            .iter()
            .map(|dir| Exemption {
                justification: "test".to_string(),
                allowed_dir: dir.to_string(),
            })
            .collect(),
        ..entry(name, "", 0)
    }
}

pub fn occurrence(
    kind: OccurrenceKind,
    identifier: &str,
    path: &str,
    line: u32,
    column: u32,
) -> Occurrence {
    Occurrence {
        kind,
        identifier: identifier.to_string(),
        path: path.to_string(),
        line,
        column,
    }
}

pub fn import(identifier: &str, path: &str, line: u32, column: u32) -> Occurrence {
    occurrence(OccurrenceKind::Import, identifier, path, line, column)
}

pub fn function(identifier: &str, path: &str, line: u32, column: u32) -> Occurrence {
    occurrence(OccurrenceKind::Function, identifier, path, line, column)
}

pub fn table(entries: Vec<BanEntry>) -> PolicyTable {
    let mut t = PolicyTable::new();
    for e in entries {
        t.insert(e);
    }
    t
}

/// Policy whose sources are named `policy-<index>.json`, covering every source index used.
pub fn policy(imports: Vec<BanEntry>, functions: Vec<BanEntry>) -> BanPolicy {
    let sources = imports
        .iter()
        .chain(functions.iter())
        .map(|e| e.source.index() + 1)
        .max()
        .unwrap_or(0);

    BanPolicy {
        sources: (0..sources).map(|i| format!("policy-{i}.json")).collect(),
        imports: table(imports),
        functions: table(functions),
    }
}
