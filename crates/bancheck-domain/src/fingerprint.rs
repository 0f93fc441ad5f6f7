use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - code
/// - identifier
/// - policy document path
/// - occurrence path, line and column
pub fn fingerprint_for_violation(
    code: &str,
    identifier: &str,
    policy: &str,
    path: &str,
    line: u32,
    column: u32,
) -> String {
    let line = line.to_string();
    let column = column.to_string();
    let canonical = [code, identifier, policy, path, line.as_str(), column.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
