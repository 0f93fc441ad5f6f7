//! Stable DTOs and IDs used across the bancheck workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted JSON report
//! - stable string codes
//! - canonical source path handling used by exemption matching

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::SourcePath;
pub use report::{
    BancheckData, BancheckReport, Location, SCHEMA_REPORT_V1, ToolMeta, Verdict, ViolationRecord,
};
