use crate::ids::DEFAULT_ARTIFACT_TYPE;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Coordinate key used to order artifacts in reports: `(group_id, artifact_id)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactKey<'a> {
    pub group_id: &'a str,
    pub artifact_id: &'a str,
}

/// A resolved dependency unit.
///
/// Equality and hashing use `group_id`, `artifact_id`, `type` and `version`.
/// `scope` is carried for display and scope filtering only, so the same
/// artifact resolved under two scopes is still one artifact.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(rename = "type", default = "default_type")]
    kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    scope: String,
}

fn default_type() -> String {
    DEFAULT_ARTIFACT_TYPE.to_string()
}

impl Artifact {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            kind: default_type(),
            scope: String::new(),
        }
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Resolution scope, empty for artifacts that carry none (e.g. project roots).
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn key(&self) -> ArtifactKey<'_> {
        ArtifactKey {
            group_id: &self.group_id,
            artifact_id: &self.artifact_id,
        }
    }

    /// Compare by coordinate only (`group_id`, then `artifact_id`).
    pub fn cmp_coordinate(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }

    /// Total order: coordinate first, then type, version and scope.
    pub fn cmp_full(&self, other: &Self) -> Ordering {
        self.cmp_coordinate(other)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.scope.cmp(&other.scope))
    }
}

impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.kind == other.kind
            && self.version == other.version
    }
}

impl Eq for Artifact {}

impl Hash for Artifact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
        self.kind.hash(state);
        self.version.hash(state);
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.kind, self.version
        )?;
        if !self.scope.is_empty() {
            write!(f, ":{}", self.scope)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseArtifactError(String);

impl fmt::Display for ParseArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid artifact coordinate '{}' (expected group:artifact[:type]:version[:scope])",
            self.0
        )
    }
}

impl std::error::Error for ParseArtifactError {}

/// Parses `group:artifact:version`, `group:artifact:type:version` or
/// `group:artifact:type:version:scope`, i.e. the inverse of `Display`.
impl FromStr for Artifact {
    type Err = ParseArtifactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(ParseArtifactError(s.to_string()));
        }
        match parts.as_slice() {
            [g, a, v] => Ok(Artifact::new(*g, *a, *v)),
            [g, a, t, v] => Ok(Artifact::new(*g, *a, *v).with_type(*t)),
            [g, a, t, v, scope] => Ok(Artifact::new(*g, *a, *v).with_type(*t).with_scope(*scope)),
            _ => Err(ParseArtifactError(s.to_string())),
        }
    }
}
