//! Policy document parsing and loading.
//!
//! `parse_policy_json` is IO-free and turns one document into its ban tables.
//! `load_policy` reads an ordered list of documents from disk, fails fast on the first
//! bad one, and merges the rest into a single [`BanPolicy`].

#![forbid(unsafe_code)]

mod error;
mod load;
mod model;

pub use error::{LoadError, LoadErrorKind, Section};
pub use load::{DocumentTables, load_policy, parse_policy_json};
pub use model::{BannedIdentConfig, ExemptionConfig, PolicyDocumentV1};

pub use bancheck_domain::{BanPolicy, PolicyTable};

/// JSON Schema describing a policy document.
pub fn policy_schema() -> schemars::Schema {
    schemars::schema_for!(PolicyDocumentV1)
}
