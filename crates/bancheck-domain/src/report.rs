use crate::fingerprint::fingerprint_for_violation;
use crate::model::{Occurrence, Violation};
use crate::policy::BanPolicy;
use bancheck_types::{BancheckData, Location, Verdict, ViolationRecord};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub violations: Vec<ViolationRecord>,
    pub data: BancheckData,
}

/// Evaluate a whole occurrence stream and collect report-ready violations.
///
/// Violations are ordered by occurrence position (path, line, column). Violations at the
/// same position keep accumulation order, i.e. policy document order.
pub fn check<I>(policy: &BanPolicy, occurrences: I) -> DomainReport
where
    I: IntoIterator<Item = Occurrence>,
{
    let mut scanned: usize = 0;
    let counted = occurrences.into_iter().inspect(|_| scanned += 1);

    let mut violations: Vec<ViolationRecord> = policy
        .evaluate(counted)
        .map(|v| to_record(policy, &v))
        .collect();

    // Stable: equal positions keep evaluation order.
    violations.sort_by(|a, b| {
        a.location
            .path
            .cmp(&b.location.path)
            .then(a.location.line.cmp(&b.location.line))
            .then(a.location.col.cmp(&b.location.col))
    });

    let data = BancheckData {
        policies_loaded: saturating_count(policy.sources.len()),
        occurrences_scanned: saturating_count(scanned),
        violations_total: saturating_count(violations.len()),
    };

    DomainReport {
        verdict: Verdict::from_violation_count(violations.len()),
        violations,
        data,
    }
}

// Report counters are u32; very large runs clamp instead of wrapping.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn to_record(policy: &BanPolicy, violation: &Violation<'_>) -> ViolationRecord {
    let occurrence = &violation.occurrence;
    let code = occurrence.kind.code();
    let source = policy
        .source_path(violation.entry.source)
        .unwrap_or_default();

    ViolationRecord {
        code: code.to_string(),
        identifier: occurrence.identifier.clone(),
        message: violation.entry.message.clone(),
        policy: source.to_string(),
        location: Location {
            path: occurrence.path.clone(),
            line: occurrence.line,
            col: occurrence.column,
        },
        fingerprint: fingerprint_for_violation(
            code,
            &occurrence.identifier,
            source,
            &occurrence.path,
            occurrence.line,
            occurrence.column,
        ),
    }
}
