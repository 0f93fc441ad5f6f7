use crate::RenderableReport;
use crate::text::summary;

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={path},line={line},col={col}::[bancheck:{code}] {summary}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report
        .violations
        .iter()
        .map(|v| {
            let meta = format!(
                "file={},line={},col={}",
                escape_property(&v.location.path),
                v.location.line,
                v.location.col
            );
            let message = escape_data(&format!("[bancheck:{}] {}", v.code, summary(v)));
            format!("::error {}::{}", meta, message)
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
