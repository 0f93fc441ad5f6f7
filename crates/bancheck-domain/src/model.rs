use bancheck_types::ids;
use serde::{Deserialize, Serialize};

/// Opaque handle to the policy document a ban entry came from.
///
/// The value is the document's position in the input list, so handles compare in load order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(usize);

impl SourceId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A directory-scoped carve-out for one ban entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exemption {
    /// Free text, never interpreted.
    pub justification: String,
    /// Directory prefix. Empty means every path.
    pub allowed_dir: String,
}

/// One policy-declared rule banning a fully-qualified identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BanEntry {
    pub name: String,
    pub message: String,
    pub exemptions: Vec<Exemption>,
    pub source: SourceId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccurrenceKind {
    Import,
    Function,
}

impl OccurrenceKind {
    pub fn code(self) -> &'static str {
        match self {
            OccurrenceKind::Import => ids::CODE_BANNED_IMPORT,
            OccurrenceKind::Function => ids::CODE_BANNED_FUNCTION,
        }
    }
}

/// One observed use of an import or function call, as reported by the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub kind: OccurrenceKind,
    pub identifier: String,
    pub path: String,
    pub line: u32,
    pub column: u32,
}

/// An occurrence that matched a ban entry and was not exempted by it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation<'p> {
    pub occurrence: Occurrence,
    pub entry: &'p BanEntry,
}
