//! Stable identifiers for violation codes.
//!
//! `code` is a short snake_case discriminator carried by every reported violation.

pub const TOOL_NAME: &str = "bancheck";

// Codes
pub const CODE_BANNED_IMPORT: &str = "banned_import";
pub const CODE_BANNED_FUNCTION: &str = "banned_function";
