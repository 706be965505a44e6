use depalign_types::Artifact;
use regex::Regex;

/// Answers "is this version aligned?" for a configured pattern.
///
/// A version is aligned when the pattern is found anywhere in it; the match is
/// not anchored unless the pattern itself says so (`^`, `$`).
#[derive(Clone, Debug)]
pub struct AlignmentPredicate {
    pattern: Regex,
}

impl AlignmentPredicate {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::new)
    }

    pub fn is_aligned(&self, version: &str) -> bool {
        self.pattern.is_match(version)
    }

    pub fn is_artifact_aligned(&self, artifact: &Artifact) -> bool {
        self.is_aligned(artifact.version())
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}
