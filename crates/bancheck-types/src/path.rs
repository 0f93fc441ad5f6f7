use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical slash-separated path used for exemption matching.
///
/// Normalization rules:
/// - `\` becomes `/`
/// - empty and `.` segments are dropped, `..` pops the previous segment
/// - leading `..` segments of relative paths are kept, at an absolute root they are dropped
/// - no trailing separator
/// - the empty relative path is spelled `.`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SourcePath(String);

impl Default for SourcePath {
    fn default() -> Self {
        SourcePath::new(".")
    }
}

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let raw = s.as_ref().replace('\\', "/");
        let absolute = raw.starts_with('/');

        let mut segments: Vec<&str> = Vec::new();
        for seg in raw.split('/') {
            match seg {
                "" | "." => {}
                ".." => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ if absolute => {}
                    _ => segments.push(".."),
                },
                other => segments.push(other),
            }
        }

        let joined = segments.join("/");
        let normalized = if absolute {
            format!("/{joined}")
        } else if joined.is_empty() {
            ".".to_string()
        } else {
            joined
        };
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Path segments, excluding the root marker and the `.` placeholder.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty() && *s != ".")
    }

    /// The directory component. `.` and `/` are their own parents.
    pub fn parent(&self) -> SourcePath {
        match self.0.rfind('/') {
            Some(0) => SourcePath::new("/"),
            Some(idx) => SourcePath(self.0[..idx].to_string()),
            None => SourcePath::new("."),
        }
    }

    /// Whether this path lies at or below `dir`, compared segment by segment.
    ///
    /// The empty relative path (`.`) contains every path. Otherwise both sides must agree on
    /// being absolute and every segment of `dir` must equal the corresponding segment here,
    /// so `pkg/foo` contains `pkg/foo/bar` but not `pkg/foobar`.
    pub fn is_within(&self, dir: &SourcePath) -> bool {
        if !dir.is_absolute() && dir.segments().next().is_none() {
            return true;
        }
        if self.is_absolute() != dir.is_absolute() {
            return false;
        }

        let mut own = self.segments();
        dir.segments().all(|want| own.next() == Some(want))
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
