use crate::Artifact;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ancestor path explaining how an unaligned version was reached.
///
/// Ordered from the unaligned descendant (head) outward to the aligned direct
/// dependency the scan started from (root).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PathChain(Vec<Artifact>);

impl PathChain {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self(artifacts)
    }

    /// The unaligned descendant.
    pub fn head(&self) -> Option<&Artifact> {
        self.0.first()
    }

    /// The scan root the chain terminates at.
    pub fn root(&self) -> Option<&Artifact> {
        self.0.last()
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PathChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, artifact) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" <- ")?;
            }
            write!(f, "{artifact}")?;
        }
        Ok(())
    }
}
