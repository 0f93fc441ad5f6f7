//! Fuzz target for policy document parsing and evaluation.
//!
//! Goal: parsing should **never panic** on any input, and a document that parses must
//! evaluate without panicking.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_parser
//! ```

#![no_main]

use bancheck_domain::{BanPolicy, evaluate};
use bancheck_domain::model::{Occurrence, OccurrenceKind, SourceId};
use camino::Utf8Path;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(doc) =
        bancheck_settings::parse_policy_json(data, Utf8Path::new("fuzz.json"), SourceId::new(0))
    else {
        return;
    };

    // Every banned name from both sections, seen from a few directories including odd paths.
    let mut occurrences = Vec::new();
    let sections = [
        (OccurrenceKind::Import, &doc.imports),
        (OccurrenceKind::Function, &doc.functions),
    ];
    for (kind, table) in sections {
        for (name, _) in table.iter() {
            for path in ["x.go", "main/x.go", "../up/x.go", "/abs/x.go", name] {
                occurrences.push(Occurrence {
                    kind,
                    identifier: name.to_string(),
                    path: path.to_string(),
                    line: 1,
                    column: 1,
                });
            }
        }
    }

    let imports = occurrences.iter().filter(|o| o.kind == OccurrenceKind::Import).cloned();
    let _ = evaluate(&doc.imports, imports).count();
    let functions = occurrences.iter().filter(|o| o.kind == OccurrenceKind::Function).cloned();
    let _ = evaluate(&doc.functions, functions).count();

    let policy = BanPolicy {
        sources: vec!["fuzz.json".to_string()],
        imports: doc.imports,
        functions: doc.functions,
    };
    let _ = policy.evaluate(occurrences).count();
});
