use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for bancheck reports.
pub const SCHEMA_REPORT_V1: &str = "bancheck.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_violation_count(count: usize) -> Self {
        if count == 0 { Verdict::Pass } else { Verdict::Fail }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Position of an occurrence, exactly as the resolver reported it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: String,
    pub line: u32,
    pub col: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ViolationRecord {
    /// `banned_import` or `banned_function`.
    pub code: String,
    /// Fully-qualified identifier that matched the ban.
    pub identifier: String,
    /// Additional info from the ban entry (may be empty).
    pub message: String,
    /// Path of the policy document that declared the ban.
    pub policy: String,
    pub location: Location,

    /// Stable hash of `code + identifier + policy + location`.
    pub fingerprint: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BancheckData {
    pub policies_loaded: u32,
    pub occurrences_scanned: u32,
    pub violations_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BancheckReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub verdict: Verdict,
    pub violations: Vec<ViolationRecord>,
    pub data: BancheckData,
}
