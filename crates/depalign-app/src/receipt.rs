//! Conversions from the domain report to the renderable model and the JSON receipt.

use anyhow::Context;
use depalign_domain::DomainReport;
use depalign_domain::report::AlignmentReport;
use depalign_render::RenderableReport;
use depalign_types::{AlignmentReceipt, Artifact, SCHEMA_REPORT_V1, ToolMeta, ids};
use time::OffsetDateTime;

fn strings(artifacts: &[Artifact]) -> Vec<String> {
    artifacts.iter().map(ToString::to_string).collect()
}

pub fn to_renderable(report: &AlignmentReport) -> RenderableReport {
    RenderableReport {
        aligned: strings(&report.aligned),
        unaligned: strings(&report.unaligned),
        incompletely_aligned: strings(&report.incompletely_aligned),
        chains: report
            .chains
            .iter()
            .map(|chain| strings(chain.artifacts()))
            .collect(),
    }
}

pub fn build_receipt(
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
    projects: Vec<String>,
    alignment_pattern: &str,
    domain: &DomainReport,
) -> AlignmentReceipt {
    let report = &domain.report;
    AlignmentReceipt {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain.verdict,
        projects,
        alignment_pattern: alignment_pattern.to_string(),
        counts: report.counts(),
        aligned: report.aligned.clone(),
        unaligned: report.unaligned.clone(),
        incompletely_aligned: report.incompletely_aligned.clone(),
        chains: report.chains.clone(),
        failure: domain.failure.clone(),
    }
}

/// Pretty JSON with a trailing newline.
pub fn serialize_receipt(receipt: &AlignmentReceipt) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(receipt).context("serialize receipt")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depalign_types::{PathChain, Verdict};

    fn domain() -> DomainReport {
        let core = Artifact::new("lib", "core", "1.0.0-rel").with_scope("compile");
        DomainReport {
            report: AlignmentReport {
                aligned: vec![core.clone()],
                unaligned: Vec::new(),
                incompletely_aligned: vec![core.clone()],
                chains: vec![PathChain::new(vec![
                    Artifact::new("lib", "util", "2.0.0-SNAPSHOT").with_scope("compile"),
                    core,
                ])],
            },
            verdict: Verdict::Fail,
            failure: Some(
                "There is 1 aligned direct dependency with at least one unaligned transitive dependency"
                    .to_string(),
            ),
        }
    }

    #[test]
    fn renderable_formats_artifacts() {
        let r = to_renderable(&domain().report);
        assert_eq!(r.aligned, vec!["lib:core:jar:1.0.0-rel:compile"]);
        assert_eq!(
            r.chains,
            vec![vec![
                "lib:util:jar:2.0.0-SNAPSHOT:compile".to_string(),
                "lib:core:jar:1.0.0-rel:compile".to_string()
            ]]
        );
    }

    #[test]
    fn receipt_serializes_and_parses_back() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let receipt = build_receipt(now, now, vec!["Demo".to_string()], "-rel$", &domain());
        assert_eq!(receipt.counts.incompletely_aligned, 1);
        assert_eq!(receipt.verdict, Verdict::Fail);

        let json = serialize_receipt(&receipt).expect("serialize");
        assert!(json.ends_with('\n'));
        let back: AlignmentReceipt = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, receipt);
    }
}
