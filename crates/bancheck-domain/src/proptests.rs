//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - merge accumulation (no deduplication, document order)
//! - segment-aware exemption matching
//! - deterministic, repeatable evaluation

use crate::engine::evaluate;
use crate::exempt::is_exempt;
use crate::model::{BanEntry, Occurrence};
use crate::policy::PolicyTable;
use crate::test_support::{entry, entry_with_exemptions, import, table};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Package-qualified identifiers like `fmt` or `net/http.Get`.
fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,7}(/[a-z][a-z0-9]{0,7}){0,2}(\\.[A-Z][a-zA-Z]{0,7})?")
        .unwrap()
}

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

fn arb_dir() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_segment(), 1..4)
}

fn arb_file_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(arb_segment(), 0..4), arb_segment())
        .prop_map(|(dirs, file)| {
            let mut parts = dirs;
            parts.push(format!("{file}.go"));
            parts.join("/")
        })
}

fn arb_occurrences(names: Vec<String>) -> impl Strategy<Value = Vec<Occurrence>> {
    let pick = prop::sample::select(names);
    prop::collection::vec((pick, arb_file_path(), 1u32..500, 1u32..80), 0..20).prop_map(
        |items| {
            items
                .into_iter()
                .map(|(name, path, line, col)| import(&name, &path, line, col))
                .collect()
        },
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn merging_k_documents_keeps_k_entries_in_order(name in arb_identifier(), k in 1usize..8) {
        let docs: Vec<PolicyTable> = (0..k)
            .map(|i| table(vec![entry(&name, &format!("doc {i}"), i)]))
            .collect();

        let merged = PolicyTable::merge(docs);
        let entries = merged.get(&name).expect("identifier present");

        prop_assert_eq!(entries.len(), k);
        for (i, e) in entries.iter().enumerate() {
            prop_assert_eq!(e.source.index(), i);
            prop_assert_eq!(&e.message, &format!("doc {i}"));
        }
    }

    #[test]
    fn unbanned_identifier_never_violates(path in arb_file_path(), line in 1u32..1000) {
        let t = table(vec![entry("fmt", "banned", 0), entry("os/exec", "banned", 1)]);
        let out: Vec<_> = evaluate(&t, [import("strings", &path, line, 1)]).collect();
        prop_assert!(out.is_empty());
    }

    #[test]
    fn exemption_covers_subtree(dir in arb_dir(), rest in arb_file_path()) {
        let allowed = dir.join("/");
        let e = entry_with_exemptions("fmt", &[allowed.as_str()]);
        let file = format!("{allowed}/{rest}");
        prop_assert!(is_exempt(&e, &file));
    }

    #[test]
    fn exemption_is_segment_aware(dir in arb_dir(), suffix in arb_segment(), rest in arb_file_path()) {
        let allowed = dir.join("/");
        let e = entry_with_exemptions("fmt", &[allowed.as_str()]);
        // Same textual prefix, different final segment.
        let file = format!("{allowed}{suffix}/{rest}");
        prop_assert!(!is_exempt(&e, &file));
    }

    #[test]
    fn entry_without_exemptions_always_violates(
        names in prop::collection::vec(arb_identifier(), 1..5),
        seed in any::<u64>(),
    ) {
        let entries: Vec<BanEntry> = names.iter().map(|n| entry(n, "no", 0)).collect();
        let t = table(entries);
        let pick = names[(seed as usize) % names.len()].clone();
        let out: Vec<_> = evaluate(&t, [import(&pick, "any/where.go", 1, 1)]).collect();
        let expected = names.iter().filter(|n| **n == pick).count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn evaluation_is_repeatable(
        occurrences in arb_occurrences(vec!["fmt".into(), "os".into(), "strings".into()])
    ) {
        let t = table(vec![
            entry("fmt", "a", 0),
            entry_with_exemptions("fmt", &["lib"]),
            entry("os", "b", 1),
        ]);

        let first: Vec<_> = evaluate(&t, occurrences.clone()).collect();
        let second: Vec<_> = evaluate(&t, occurrences).collect();
        prop_assert_eq!(first, second);
    }
}
