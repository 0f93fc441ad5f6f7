use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A policy document.
///
/// Both sections are optional. Unknown fields are ignored so documents can carry
/// extra metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocumentV1 {
    /// Banned import paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<BannedIdentConfig>>,

    /// Banned fully-qualified functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<BannedIdentConfig>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BannedIdentConfig {
    /// Fully-qualified import or function name. Must not be empty.
    pub name: String,

    /// Additional info shown with every violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exemptions: Option<Vec<ExemptionConfig>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExemptionConfig {
    #[serde(default)]
    pub justification: String,

    /// Directory prefix whose files are exempt. Empty exempts every file.
    #[serde(rename = "allowedDir")]
    pub allowed_dir: String,
}
