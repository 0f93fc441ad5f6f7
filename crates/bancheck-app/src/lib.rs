//! Use case orchestration for bancheck.
//!
//! This crate provides the application layer: use cases that coordinate the settings,
//! domain, and render layers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod occurrences;
mod report;
mod validate;

pub use check::{
    CheckInput, CheckOutput, check_feed, load_check_policy, run_check, verdict_exit_code,
};
pub use occurrences::parse_occurrences_jsonl;
pub use report::{
    parse_report_json, render_annotations, render_text, serialize_report, to_renderable,
};
pub use validate::{ValidateOutput, format_validate, run_validate};
