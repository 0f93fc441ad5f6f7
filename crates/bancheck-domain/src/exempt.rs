use crate::model::{BanEntry, Exemption};
use bancheck_types::SourcePath;

/// Whether any exemption on `entry` covers the directory holding `file_path`.
///
/// Pure string comparison on normalized path segments; the filesystem is never consulted.
pub fn is_exempt(entry: &BanEntry, file_path: &str) -> bool {
    matching_exemption(entry, file_path).is_some()
}

/// The first exemption on `entry` whose `allowed_dir` contains the directory of `file_path`.
pub fn matching_exemption<'e>(entry: &'e BanEntry, file_path: &str) -> Option<&'e Exemption> {
    if entry.exemptions.is_empty() {
        return None;
    }

    let dir = SourcePath::new(file_path).parent();
    entry
        .exemptions
        .iter()
        .find(|e| dir.is_within(&SourcePath::new(&e.allowed_dir)))
}
