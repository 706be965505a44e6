use crate::{Artifact, DependencyNode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resolved dependency graph document exported by the host build tool.
///
/// One entry per project of a (possibly multi-project) build. Each project's
/// `dependencies` are its direct dependency nodes with their resolved subtrees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphDocument {
    /// Schema identifier (`depalign.graph.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    pub projects: Vec<ProjectGraph>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectGraph {
    /// Human-readable project name, used for report titles.
    pub name: String,

    pub artifact: Artifact,

    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}
