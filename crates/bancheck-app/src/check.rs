//! The `check` use case: load policy, evaluate occurrences, produce a report.

use anyhow::Context;
use bancheck_domain::BanPolicy;
use bancheck_types::{BancheckReport, SCHEMA_REPORT_V1, ToolMeta, Verdict, ids};
use camino::Utf8PathBuf;

use crate::occurrences::parse_occurrences_jsonl;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Policy documents, in merge order.
    pub config_paths: &'a [Utf8PathBuf],
    /// Occurrence feed contents (JSON Lines).
    pub occurrences_text: &'a str,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: BancheckReport,
}

/// Run the check use case.
///
/// Policy loading happens first and fails fast: if any document is bad, no occurrence is
/// read or evaluated.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let policy = load_check_policy(input.config_paths)?;
    check_feed(&policy, input.occurrences_text)
}

/// Load and merge the policy documents for a check run.
///
/// Callers that read the occurrence feed themselves should call this before touching the
/// feed, so a bad policy is reported ahead of any feed problem.
pub fn load_check_policy(config_paths: &[Utf8PathBuf]) -> anyhow::Result<BanPolicy> {
    bancheck_settings::load_policy(config_paths).context("load policy")
}

/// Evaluate an occurrence feed against an already loaded policy.
pub fn check_feed(policy: &BanPolicy, occurrences_text: &str) -> anyhow::Result<CheckOutput> {
    let occurrences =
        parse_occurrences_jsonl(occurrences_text).context("parse occurrence feed")?;

    let bancheck_domain::report::DomainReport {
        verdict,
        violations,
        data,
    } = bancheck_domain::report::check(policy, occurrences);

    tracing::info!(
        policies = data.policies_loaded,
        occurrences = data.occurrences_scanned,
        violations = data.violations_total,
        "check complete"
    );

    Ok(CheckOutput {
        report: BancheckReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: ids::TOOL_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            verdict,
            violations,
            data,
        },
    })
}

/// Map verdict to exit code: 0 = pass, 2 = at least one violation.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bancheck_settings::{LoadError, LoadErrorKind};
    use camino::Utf8Path;

    const FEED: &str = r#"{"kind":"import","identifier":"fmt","path":"main.go","line":3,"column":8}
{"kind":"function","identifier":"fmt.Printf","path":"main.go","line":6,"column":6}
"#;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        (tmp, root)
    }

    fn write(root: &Utf8Path, name: &str, text: &str) -> Utf8PathBuf {
        let path = root.join(name);
        std::fs::write(&path, text).expect("write");
        path
    }

    #[test]
    fn two_teams_produce_two_violations_in_source_order() {
        let (_tmp, root) = temp_root();
        let a = write(
            &root,
            "a.json",
            r#"{"imports": [{"name": "fmt", "msg": "Banned by team B"}]}"#,
        );
        let b = write(
            &root,
            "b.json",
            r#"{"functions": [{"name": "fmt.Printf", "msg": "Banned by team A"}]}"#,
        );
        let paths = vec![a.clone(), b.clone()];

        let output = run_check(CheckInput {
            config_paths: &paths,
            occurrences_text: FEED,
        })
        .expect("run_check");

        let report = output.report;
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].identifier, "fmt");
        assert_eq!(report.violations[0].message, "Banned by team B");
        assert_eq!(report.violations[0].policy, a.as_str());
        assert_eq!(report.violations[1].identifier, "fmt.Printf");
        assert_eq!(report.violations[1].message, "Banned by team A");
        assert_eq!(report.violations[1].policy, b.as_str());
        assert_eq!(verdict_exit_code(report.verdict), 2);
    }

    #[test]
    fn exempted_directory_passes() {
        let (_tmp, root) = temp_root();
        let a = write(
            &root,
            "a.json",
            r#"{"imports": [{"name": "fmt", "exemptions": [{"justification": "cli", "allowedDir": "main"}]}]}"#,
        );
        let paths = vec![a];

        let inside = run_check(CheckInput {
            config_paths: &paths,
            occurrences_text: r#"{"kind":"import","identifier":"fmt","path":"main/x.go","line":1,"column":1}"#,
        })
        .expect("run_check");
        assert_eq!(inside.report.verdict, Verdict::Pass);

        let outside = run_check(CheckInput {
            config_paths: &paths,
            occurrences_text: r#"{"kind":"import","identifier":"fmt","path":"other/x.go","line":1,"column":1}"#,
        })
        .expect("run_check");
        assert_eq!(outside.report.violations.len(), 1);
    }

    #[test]
    fn load_failure_skips_evaluation() {
        let (_tmp, root) = temp_root();
        let a = write(&root, "a.json", r#"{"imports": []}"#);
        let missing = root.join("missing.json");
        let paths = vec![a, missing.clone()];

        // The feed is garbage too; the load error must be what surfaces.
        let err = run_check(CheckInput {
            config_paths: &paths,
            occurrences_text: "not json",
        })
        .unwrap_err();

        let load = err.downcast_ref::<LoadError>().expect("load error");
        assert_eq!(load.kind(), LoadErrorKind::NotFound);
        assert_eq!(load.path(), missing.as_path());
    }

    #[test]
    fn loaded_policy_is_reused_across_feeds() {
        let (_tmp, root) = temp_root();
        let a = write(&root, "a.json", r#"{"imports": [{"name": "fmt", "msg": "no"}]}"#);
        let policy = load_check_policy(&[a]).expect("load");

        let dirty = check_feed(&policy, FEED).expect("check");
        assert_eq!(dirty.report.violations.len(), 1);
        assert_eq!(dirty.report.data.occurrences_scanned, 2);

        let clean = check_feed(&policy, "").expect("check");
        assert_eq!(clean.report.verdict, Verdict::Pass);
    }

    #[test]
    fn load_check_policy_reports_missing_file() {
        let (_tmp, root) = temp_root();
        let missing = root.join("missing.json");
        let err = load_check_policy(std::slice::from_ref(&missing)).unwrap_err();
        let load = err.downcast_ref::<LoadError>().expect("load error");
        assert_eq!(load.kind(), LoadErrorKind::NotFound);
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
