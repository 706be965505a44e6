use crate::Artifact;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A node of a resolved dependency tree: an artifact plus its ordered children.
///
/// Trees are produced by the graph collaborator; nodes hold no parent links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyNode {
    #[serde(flatten)]
    pub artifact: Artifact,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn leaf(artifact: Artifact) -> Self {
        Self {
            artifact,
            children: Vec::new(),
        }
    }

    pub fn with_children(artifact: Artifact, children: Vec<DependencyNode>) -> Self {
        Self { artifact, children }
    }
}
