//! CLI entry point for depalign.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `depalign-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use depalign_app::{ReportInput, run_report, serialize_receipt, verdict_exit_code, write_text};
use depalign_graph::ProjectSelection;
use depalign_settings::Overrides;
use depalign_types::{Verdict, ids};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "depalign",
    version,
    about = "Report which dependencies are aligned to a version pattern"
)]
struct Cli {
    /// Resolved dependency graph exported by the build tool.
    #[arg(long, default_value = ids::GRAPH_FILE_NAME)]
    graph: Utf8PathBuf,

    /// Path to depalign config TOML (missing file = defaults).
    #[arg(long, default_value = ids::CONFIG_FILE_NAME)]
    config: Utf8PathBuf,

    /// Regular expression an aligned version must contain a match for.
    #[arg(long, allow_hyphen_values = true)]
    alignment_pattern: Option<String>,

    /// Resolution scope (compile|runtime|compile+runtime|runtime+system|test|provided|system).
    #[arg(long)]
    scope: Option<String>,

    /// Comma-separated exclude patterns: [groupId]:[artifactId]:[type]:[version], `*` wildcards.
    #[arg(long)]
    excludes: Option<String>,

    /// Write the report to this file instead of the log.
    #[arg(long)]
    output_file: Option<Utf8PathBuf>,

    /// Append to the output file instead of overwriting it.
    #[arg(long)]
    append_output: bool,

    /// Fail (exit 2) when unaligned dependencies are found.
    #[arg(long)]
    fail_on_unaligned: bool,

    /// Skip the report entirely.
    #[arg(long)]
    skip: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report on a single project of the build.
    Report {
        /// Project name or artifact id (defaults to the first project in the graph).
        #[arg(long)]
        project: Option<String>,

        /// Also write a JSON receipt here.
        #[arg(long)]
        report_json: Option<Utf8PathBuf>,
    },

    /// Report on the union of every project's direct dependencies.
    AggregateReport {
        /// Also write a JSON receipt here.
        #[arg(long)]
        report_json: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cmd_report(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("depalign error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn cmd_report(cli: &Cli) -> anyhow::Result<i32> {
    let (selection, report_json) = match &cli.cmd {
        Commands::Report {
            project,
            report_json,
        } => (ProjectSelection::Single(project.clone()), report_json),
        Commands::AggregateReport { report_json } => (ProjectSelection::Aggregate, report_json),
    };

    let cfg_text = read_config(&cli.config)?;

    let overrides = Overrides {
        alignment_pattern: cli.alignment_pattern.clone(),
        scope: cli.scope.clone(),
        excludes: cli.excludes.clone(),
        fail_on_unaligned: cli.fail_on_unaligned.then_some(true),
        output_file: cli.output_file.clone(),
        append_output: cli.append_output.then_some(true),
        skip: cli.skip.then_some(true),
    };

    let output = run_report(ReportInput {
        config_text: &cfg_text,
        overrides,
        graph_path: &cli.graph,
        selection,
    })?;

    if let (Some(path), Some(receipt)) = (report_json, &output.receipt) {
        let json = serialize_receipt(receipt)?;
        write_text(path, &json, false).context("write report json")?;
    }

    if output.verdict == Verdict::Fail
        && let Some(failure) = &output.failure
    {
        eprintln!("depalign: {failure}");
    }

    Ok(verdict_exit_code(output.verdict))
}

/// Missing config file is allowed (defaults apply); any other read error is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config {path}")),
    }
}
