//! Stable identifiers shared by the CLI, receipts, and developer tooling.

pub const TOOL_NAME: &str = "depalign";

/// Default artifact type when a graph node does not declare one.
pub const DEFAULT_ARTIFACT_TYPE: &str = "jar";

pub const CONFIG_FILE_NAME: &str = "depalign.toml";
pub const GRAPH_FILE_NAME: &str = "depalign-graph.json";
