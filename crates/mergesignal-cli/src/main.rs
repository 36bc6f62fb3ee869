//! CLI entry point for mergesignal.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `mergesignal-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use mergesignal_app::{
    Behavior, CheckInput, ExplainOutput, format_explanation, format_not_found, format_validation,
    parse_report_json, render_markdown, run_check, run_explain, run_validate,
    runtime_error_report, serialize_report, verdict_exit_code,
};
use mergesignal_types::ReportEnvelope;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "mergesignal",
    version,
    about = "Decide whether a pull request should be merged or updated from its signals"
)]
struct Cli {
    /// Path to mergesignal config TOML.
    #[arg(long, global = true, default_value = "mergesignal.toml")]
    config: Utf8PathBuf,

    /// Enable verbose logging (info level).
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Enable debug logging (debug level).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide one behavior for a pull request snapshot and write artifacts.
    Check {
        /// Path to the pull request snapshot (JSON).
        #[arg(long)]
        pull: Utf8PathBuf,

        /// Behavior to decide (merge or update).
        #[arg(long, default_value = "merge")]
        behavior: String,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/mergesignal/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/mergesignal/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Check the config file and summarize the configured signal sets.
    Validate,

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/mergesignal/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a signal ID or match mode ID with configuration guidance.
    Explain {
        /// The signal ID (e.g., "signal.label") or mode ID (e.g., "match.all") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match cli.cmd {
        Commands::Check {
            ref pull,
            ref behavior,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli.config,
            pull,
            behavior,
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Validate => cmd_validate(&cli.config),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

fn cmd_check(
    config: &Utf8Path,
    pull: &Utf8Path,
    behavior: &str,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let behavior = Behavior::parse(behavior)?;

    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config_if_present(config)?;
        let pull_text =
            std::fs::read_to_string(pull).with_context(|| format!("read pull request: {}", pull))?;

        let output = run_check(CheckInput {
            config_text: &cfg_text,
            pull_text: &pull_text,
            behavior,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;
        if let Some(md_path) = markdown_out {
            write_text_file(md_path, &render_markdown(&output.report))
                .context("write markdown")?;
        }

        println!(
            "{}: {} ({})",
            output.report.behavior,
            output.report.verdict.as_str(),
            output.report.reason
        );
        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(behavior.as_str(), &format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("mergesignal error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config is allowed: every behavior is then unconfigured.
fn read_config_if_present(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        warn!("config not found at {}; no signals configured", path);
        return Ok(String::new());
    }
    debug!("Loading config from: {}", path);
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn write_report_file(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_validate(config: &Utf8Path) -> anyhow::Result<()> {
    info!("Validating configuration file");
    let text =
        std::fs::read_to_string(config).with_context(|| format!("read config: {}", config))?;
    let output = run_validate(&text).with_context(|| format!("invalid config: {}", config))?;
    print!("{}", format_validation(&output));
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_signal_ids,
            available_mode_ids,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_signal_ids, available_mode_ids)
            );
            std::process::exit(1);
        }
    }
}
