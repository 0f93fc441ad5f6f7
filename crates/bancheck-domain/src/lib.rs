//! Pure ban policy evaluation (no IO).
//!
//! Input: ban tables built elsewhere (see `bancheck-settings`) and a stream of identifier
//! occurrences produced by a language resolver.
//! Output: violations, in a deterministic order.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod exempt;
mod fingerprint;

pub use engine::{Violations, evaluate};
pub use exempt::{is_exempt, matching_exemption};
pub use fingerprint::fingerprint_for_violation;
pub use policy::{BanPolicy, PolicyTable};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;
