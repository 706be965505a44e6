//! The `report` use case: resolve settings, load the graph, analyse, render, and emit.

use anyhow::Context;
use camino::Utf8Path;
use depalign_domain::{And, ArtifactNodeFilter, evaluate};
use depalign_graph::{ProjectSelection, collect_direct_dependencies, load_graph};
use depalign_render::{render_project_title, render_text};
use depalign_settings::{DepalignConfigV1, Overrides};
use depalign_types::{AlignmentReceipt, Verdict};
use time::OffsetDateTime;

use crate::receipt::{build_receipt, to_renderable};
use crate::sink::emit_report;

/// Input for the report use case.
#[derive(Clone, Debug)]
pub struct ReportInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Path of the exported dependency graph.
    pub graph_path: &'a Utf8Path,
    pub selection: ProjectSelection,
}

#[derive(Clone, Debug)]
pub struct ReportOutput {
    pub verdict: Verdict,
    /// Set only when the verdict is `Fail`.
    pub failure: Option<String>,
    /// `None` when the run was skipped.
    pub receipt: Option<AlignmentReceipt>,
    /// Rendered report body (without the title banner).
    pub text: String,
}

pub fn run_report(input: ReportInput<'_>) -> anyhow::Result<ReportOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        DepalignConfigV1::default()
    } else {
        depalign_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        depalign_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    if resolved.skip {
        tracing::info!("Skipping execution");
        return Ok(ReportOutput {
            verdict: Verdict::Skip,
            failure: None,
            receipt: None,
            text: String::new(),
        });
    }

    let doc = load_graph(input.graph_path).context("build dependency graph")?;

    let filter = And(&resolved.scope, &resolved.excludes);
    let direct = collect_direct_dependencies(&doc, &input.selection, &filter)
        .context("select direct dependencies")?;

    let domain = evaluate(
        &direct.nodes,
        &resolved.predicate,
        &ArtifactNodeFilter(&filter),
        resolved.fail_policy,
    );

    let text = render_text(&to_renderable(&domain.report));
    let title = direct
        .projects
        .first()
        .map(String::as_str)
        .unwrap_or(depalign_types::ids::TOOL_NAME);
    emit_report(&resolved.output, &render_project_title(title), &text)?;

    let finished_at = OffsetDateTime::now_utc();
    let receipt = build_receipt(
        started_at,
        finished_at,
        direct.projects,
        resolved.predicate.as_str(),
        &domain,
    );

    Ok(ReportOutput {
        verdict: domain.verdict,
        failure: domain.failure,
        receipt: Some(receipt),
        text,
    })
}

/// Exit code for a verdict: 0 for pass or skip, 2 for a policy failure.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass | Verdict::Skip => 0,
        Verdict::Fail => 2,
    }
}
