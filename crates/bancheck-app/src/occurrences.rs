//! Occurrence feed: JSON Lines produced by a language resolver.

use anyhow::Context;
use bancheck_domain::model::Occurrence;

/// Parse one occurrence per non-blank line.
///
/// Line shape: `{"kind":"import","identifier":"fmt","path":"main.go","line":3,"column":8}`.
pub fn parse_occurrences_jsonl(text: &str) -> anyhow::Result<Vec<Occurrence>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("parse occurrence on line {}", idx + 1))
        })
        .collect()
}
