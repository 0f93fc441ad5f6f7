//! CLI entry point for bancheck.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `bancheck-app` crate.

use anyhow::Context;
use bancheck_app::{
    check_feed, format_validate, load_check_policy, parse_report_json, render_annotations,
    render_text, run_validate, serialize_report, to_renderable, verdict_exit_code,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::io::Read;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "bancheck",
    version,
    about = "Flag banned imports and function calls against policy files"
)]
struct Cli {
    /// Policy files with banned APIs, separated by commas. Order is preserved.
    #[arg(long, value_delimiter = ',', global = true)]
    configs: Vec<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an occurrence feed against the policy files.
    Check {
        /// JSON Lines occurrence feed from the resolver (`-` reads stdin).
        #[arg(long, default_value = "-")]
        occurrences: String,

        /// Output format: text, json, or github.
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Load and validate the policy files without evaluating anything.
    Validate,

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Print the JSON Schema of a policy document.
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Github,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Check {
            ref occurrences,
            ref format,
            ref report_out,
        } => cmd_check(&cli.configs, occurrences, format, report_out.as_deref()),
        Commands::Validate => cmd_validate(&cli.configs),
        Commands::Annotations { report, max } => cmd_annotations(&report, max),
        Commands::Schema => cmd_schema(),
    };

    exit_with(result)
}

// Diagnostics go to stderr so stdout stays machine readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn cmd_check(
    configs: &[Utf8PathBuf],
    occurrences: &str,
    format: &str,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let format = parse_format(format)?;
    require_configs(configs)?;

    // A bad policy must surface before the feed is read, even when the feed is stdin.
    let policy = load_check_policy(configs)?;
    tracing::debug!(configs = configs.len(), feed = occurrences, "running check");
    let occurrences_text = read_feed(occurrences)?;
    let output = check_feed(&policy, &occurrences_text)?;

    if let Some(path) = report_out {
        let data = serialize_report(&output.report)?;
        write_file(path, &data).context("write report json")?;
    }

    match format {
        OutputFormat::Text => {
            for line in render_text(&to_renderable(&output.report)) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let data = serialize_report(&output.report)?;
            println!("{}", String::from_utf8_lossy(&data));
        }
        OutputFormat::Github => {
            let renderable = to_renderable(&output.report);
            for line in render_annotations(&renderable, usize::MAX) {
                println!("{line}");
            }
        }
    }

    Ok(verdict_exit_code(output.report.verdict))
}

fn cmd_validate(configs: &[Utf8PathBuf]) -> anyhow::Result<i32> {
    require_configs(configs)?;
    let out = run_validate(configs)?;
    print!("{}", format_validate(&out));
    Ok(0)
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);

    for annotation in render_annotations(&renderable, max) {
        println!("{}", annotation);
    }

    Ok(0)
}

fn cmd_schema() -> anyhow::Result<i32> {
    let schema = serde_json::to_string_pretty(&bancheck_settings::policy_schema())
        .context("serialize policy schema")?;
    println!("{schema}");
    Ok(0)
}

fn exit_with(result: anyhow::Result<i32>) {
    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("bancheck error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn require_configs(configs: &[Utf8PathBuf]) -> anyhow::Result<()> {
    if configs.is_empty() {
        anyhow::bail!("no policy files given (use --configs a.json,b.json)");
    }
    Ok(())
}

fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "github" | "gha" => Ok(OutputFormat::Github),
        other => anyhow::bail!("unknown format: {other} (expected text, json, or github)"),
    }
}

fn read_feed(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read occurrence feed from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(source).with_context(|| format!("read occurrence feed: {source}"))
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}
