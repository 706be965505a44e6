use crate::{Artifact, PathChain};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers.
pub const SCHEMA_REPORT_V1: &str = "depalign.report.v1";
pub const SCHEMA_GRAPH_V1: &str = "depalign.graph.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
    /// Execution was skipped by configuration.
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReceiptCounts {
    pub aligned: u32,
    pub unaligned: u32,
    pub incompletely_aligned: u32,
    pub chains: u32,
}

/// Machine-readable alignment report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlignmentReceipt {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    /// Display name(s) of the analysed project(s).
    pub projects: Vec<String>,
    pub alignment_pattern: String,
    pub counts: ReceiptCounts,
    pub aligned: Vec<Artifact>,
    pub unaligned: Vec<Artifact>,
    pub incompletely_aligned: Vec<Artifact>,
    pub chains: Vec<PathChain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}
