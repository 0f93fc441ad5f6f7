use crate::{RenderableReport, RenderableViolation};

/// `<path>:<line>:<col>: Banned API found "<identifier>". Additional info: <message>`
pub fn violation_line(v: &RenderableViolation) -> String {
    format!(
        "{}:{}:{}: {}",
        v.location.path,
        v.location.line,
        v.location.col,
        summary(v)
    )
}

pub(crate) fn summary(v: &RenderableViolation) -> String {
    format!(
        "Banned API found \"{}\". Additional info: {}",
        v.identifier, v.message
    )
}

/// One line per violation, in report order.
pub fn render_text(report: &RenderableReport) -> Vec<String> {
    report.violations.iter().map(violation_line).collect()
}
