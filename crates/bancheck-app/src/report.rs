use anyhow::Context;
use bancheck_render::{RenderableLocation, RenderableReport, RenderableViolation};
use bancheck_types::{BancheckReport, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<BancheckReport> {
    let report: BancheckReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn serialize_report(report: &BancheckReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &BancheckReport) -> RenderableReport {
    RenderableReport {
        violations: report
            .violations
            .iter()
            .map(|v| RenderableViolation {
                code: v.code.clone(),
                identifier: v.identifier.clone(),
                message: v.message.clone(),
                location: RenderableLocation {
                    path: v.location.path.clone(),
                    line: v.location.line,
                    col: v.location.col,
                },
            })
            .collect(),
    }
}

pub fn render_text(report: &RenderableReport) -> Vec<String> {
    bancheck_render::render_text(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    bancheck_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}
