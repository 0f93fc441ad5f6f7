use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// Which section of a policy document an entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Imports,
    Functions,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Imports => f.write_str("imports"),
            Section::Functions => f.write_str("functions"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("policy file does not exist or is not a regular file: {path}")]
    NotFound { path: Utf8PathBuf },

    #[error("failed to read policy file: {path}")]
    Unreadable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed policy file: {path}")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("empty identifier in policy file {path}: {section}[{index}].name")]
    EmptyIdentifier {
        path: Utf8PathBuf,
        section: Section,
        index: usize,
    },
}

/// Fieldless discriminant of [`LoadError`], for callers mapping errors to exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadErrorKind {
    NotFound,
    Unreadable,
    Malformed,
    EmptyIdentifier,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::NotFound { .. } => LoadErrorKind::NotFound,
            LoadError::Unreadable { .. } => LoadErrorKind::Unreadable,
            LoadError::Malformed { .. } => LoadErrorKind::Malformed,
            LoadError::EmptyIdentifier { .. } => LoadErrorKind::EmptyIdentifier,
        }
    }

    /// The policy document the error is about.
    pub fn path(&self) -> &Utf8Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Unreadable { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::EmptyIdentifier { path, .. } => path.as_path(),
        }
    }
}
