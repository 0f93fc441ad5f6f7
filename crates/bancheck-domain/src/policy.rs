use crate::engine::{Lookup, Violations};
use crate::model::{BanEntry, Occurrence, OccurrenceKind, SourceId};
use std::collections::BTreeMap;

/// Identifier name -> every ban entry declared for it, in accumulation order.
///
/// Several entries under one name are not a conflict: each comes from its own policy
/// document and is evaluated on its own. Keys are never empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyTable {
    entries: BTreeMap<String, Vec<BanEntry>>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under its own name.
    ///
    /// Callers validate names before inserting; see `bancheck-settings`.
    pub fn insert(&mut self, entry: BanEntry) {
        debug_assert!(!entry.name.trim().is_empty(), "ban entry names are validated at load");
        self.entries.entry(entry.name.clone()).or_default().push(entry);
    }

    pub fn get(&self, name: &str) -> Option<&[BanEntry]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Number of distinct banned identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of ban entries across all identifiers.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BanEntry])> {
        self.entries
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Concatenate `other` onto this table: for every key, its entries go after ours.
    pub fn append(&mut self, other: PolicyTable) {
        for (name, mut entries) in other.entries {
            self.entries.entry(name).or_default().append(&mut entries);
        }
    }

    /// Merge per-document tables in document order. Nothing is deduplicated.
    pub fn merge<I>(tables: I) -> PolicyTable
    where
        I: IntoIterator<Item = PolicyTable>,
    {
        let mut merged = PolicyTable::new();
        for table in tables {
            merged.append(table);
        }
        merged
    }
}

/// Both ban tables from a full set of policy documents, plus where each document came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BanPolicy {
    /// Policy document paths in load order; `SourceId` indexes into this.
    pub sources: Vec<String>,
    pub imports: PolicyTable,
    pub functions: PolicyTable,
}

impl BanPolicy {
    pub fn table(&self, kind: OccurrenceKind) -> &PolicyTable {
        match kind {
            OccurrenceKind::Import => &self.imports,
            OccurrenceKind::Function => &self.functions,
        }
    }

    pub fn source_path(&self, id: SourceId) -> Option<&str> {
        self.sources.get(id.index()).map(String::as_str)
    }

    /// Evaluate occurrences, checking imports against `imports` and calls against `functions`.
    pub fn evaluate<I>(&self, occurrences: I) -> Violations<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Occurrence>,
    {
        Violations::new(Lookup::ByKind(self), occurrences.into_iter())
    }
}
