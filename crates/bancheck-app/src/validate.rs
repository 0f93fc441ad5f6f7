//! The `validate` use case: load policy documents without evaluating anything.

use anyhow::Context;
use camino::Utf8PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidateOutput {
    pub documents: usize,
    pub import_bans: usize,
    pub function_bans: usize,
}

pub fn run_validate(config_paths: &[Utf8PathBuf]) -> anyhow::Result<ValidateOutput> {
    let policy = bancheck_settings::load_policy(config_paths).context("load policy")?;
    Ok(ValidateOutput {
        documents: policy.sources.len(),
        import_bans: policy.imports.entry_count(),
        function_bans: policy.functions.entry_count(),
    })
}

pub fn format_validate(out: &ValidateOutput) -> String {
    format!(
        "{} policy document(s) OK: {} import ban(s), {} function ban(s)\n",
        out.documents, out.import_bans, out.function_bans
    )
}
