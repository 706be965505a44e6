//! Artifact and node filters.
//!
//! `ArtifactFilter` is the resolution-time view (scope and exclude rules applied to a single
//! artifact). `NodeFilter` is what the scanner consults; a rejected node hides its whole subtree.

use depalign_types::{Artifact, DependencyNode};
use globset::{GlobBuilder, GlobMatcher};
use std::fmt;
use std::str::FromStr;

pub trait ArtifactFilter: Send + Sync {
    fn include(&self, artifact: &Artifact) -> bool;
}

pub trait NodeFilter: Send + Sync {
    fn accept(&self, node: &DependencyNode) -> bool;
}

impl<F> NodeFilter for F
where
    F: Fn(&DependencyNode) -> bool + Send + Sync,
{
    fn accept(&self, node: &DependencyNode) -> bool {
        self(node)
    }
}

/// Includes everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl ArtifactFilter for AcceptAll {
    fn include(&self, _artifact: &Artifact) -> bool {
        true
    }
}

/// Node filter that applies an artifact filter to each node's artifact.
#[derive(Clone, Debug)]
pub struct ArtifactNodeFilter<F>(pub F);

impl<F: ArtifactFilter> NodeFilter for ArtifactNodeFilter<F> {
    fn accept(&self, node: &DependencyNode) -> bool {
        self.0.include(&node.artifact)
    }
}

/// Conjunction of two artifact filters.
#[derive(Clone, Debug)]
pub struct And<A, B>(pub A, pub B);

impl<A: ArtifactFilter, B: ArtifactFilter> ArtifactFilter for And<A, B> {
    fn include(&self, artifact: &Artifact) -> bool {
        self.0.include(artifact) && self.1.include(artifact)
    }
}

impl<T: ArtifactFilter + ?Sized> ArtifactFilter for &T {
    fn include(&self, artifact: &Artifact) -> bool {
        (**self).include(artifact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("unknown scope: {0} (expected compile|runtime|compile+runtime|runtime+system|test|provided|system)")]
    UnknownScope(String),

    #[error("exclude pattern '{pattern}' has {segments} segments (expected at most 4: groupId:artifactId:type:version)")]
    TooManySegments { pattern: String, segments: usize },

    #[error("invalid exclude pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

// ============================================================================
// Scope filter
// ============================================================================

/// Resolution scope selector, with the inclusion rules of the host build tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionScope {
    Compile,
    Runtime,
    CompileRuntime,
    RuntimeSystem,
    Test,
    Provided,
    System,
}

/// Artifact scopes the resolution rules know about.
const KNOWN_ARTIFACT_SCOPES: [&str; 5] = ["compile", "provided", "system", "runtime", "test"];

impl ResolutionScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionScope::Compile => "compile",
            ResolutionScope::Runtime => "runtime",
            ResolutionScope::CompileRuntime => "compile+runtime",
            ResolutionScope::RuntimeSystem => "runtime+system",
            ResolutionScope::Test => "test",
            ResolutionScope::Provided => "provided",
            ResolutionScope::System => "system",
        }
    }

    /// Whether an artifact in `artifact_scope` is part of this resolution scope.
    ///
    /// Scopes outside the known set (`import`, custom scopes) are always included.
    pub fn includes(self, artifact_scope: &str) -> bool {
        if !KNOWN_ARTIFACT_SCOPES.contains(&artifact_scope) {
            return true;
        }
        let allowed: &[&str] = match self {
            ResolutionScope::Compile => &["compile", "provided", "system"],
            ResolutionScope::Runtime => &["compile", "runtime"],
            ResolutionScope::CompileRuntime => &["compile", "provided", "system", "runtime"],
            ResolutionScope::RuntimeSystem => &["compile", "runtime", "system"],
            ResolutionScope::Test => &["compile", "provided", "system", "runtime", "test"],
            ResolutionScope::Provided => &["provided"],
            ResolutionScope::System => &["system"],
        };
        allowed.contains(&artifact_scope)
    }
}

impl FromStr for ResolutionScope {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compile" => Ok(ResolutionScope::Compile),
            "runtime" => Ok(ResolutionScope::Runtime),
            "compile+runtime" => Ok(ResolutionScope::CompileRuntime),
            "runtime+system" => Ok(ResolutionScope::RuntimeSystem),
            "test" => Ok(ResolutionScope::Test),
            "provided" => Ok(ResolutionScope::Provided),
            "system" => Ok(ResolutionScope::System),
            other => Err(FilterError::UnknownScope(other.to_string())),
        }
    }
}

impl fmt::Display for ResolutionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters artifacts by resolution scope; `None` includes every scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScopeFilter {
    scope: Option<ResolutionScope>,
}

impl ScopeFilter {
    pub fn new(scope: Option<ResolutionScope>) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> Option<ResolutionScope> {
        self.scope
    }
}

impl ArtifactFilter for ScopeFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        match self.scope {
            None => true,
            // Unscoped artifacts (project roots) are always part of the graph.
            Some(_) if artifact.scope().is_empty() => true,
            Some(scope) => scope.includes(artifact.scope()),
        }
    }
}

// ============================================================================
// Exclude filter
// ============================================================================

/// One `[groupId]:[artifactId]:[type]:[version]` pattern.
///
/// Each segment may use `*` as a full or partial wildcard; an empty or missing
/// segment matches anything.
#[derive(Clone, Debug)]
pub struct ExcludePattern {
    source: String,
    segments: [Option<GlobMatcher>; 4],
}

impl ExcludePattern {
    pub fn parse(pattern: &str) -> Result<Self, FilterError> {
        let parts: Vec<&str> = pattern.split(':').collect();
        if parts.len() > 4 {
            return Err(FilterError::TooManySegments {
                pattern: pattern.to_string(),
                segments: parts.len(),
            });
        }

        let mut segments: [Option<GlobMatcher>; 4] = [None, None, None, None];
        for (slot, part) in segments.iter_mut().zip(parts) {
            *slot = segment_matcher(pattern, part)?;
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, artifact: &Artifact) -> bool {
        let fields = [
            artifact.group_id(),
            artifact.artifact_id(),
            artifact.kind(),
            artifact.version(),
        ];
        self.segments
            .iter()
            .zip(fields)
            .all(|(segment, field)| segment.as_ref().is_none_or(|m| m.is_match(field)))
    }
}

fn segment_matcher(pattern: &str, segment: &str) -> Result<Option<GlobMatcher>, FilterError> {
    if segment.is_empty() || segment.chars().all(|c| c == '*') {
        return Ok(None);
    }

    // Only `*` is special; everything else is matched literally.
    let mut glob = String::with_capacity(segment.len());
    let mut last_star = false;
    for piece in segment.split_inclusive('*') {
        let (literal, star) = match piece.strip_suffix('*') {
            Some(literal) => (literal, true),
            None => (piece, false),
        };
        if !literal.is_empty() {
            glob.push_str(&globset::escape(literal));
            last_star = false;
        }
        if star && !last_star {
            glob.push('*');
            last_star = true;
        }
    }

    let matcher = GlobBuilder::new(&glob)
        .literal_separator(false)
        .build()
        .map_err(|source| FilterError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();
    Ok(Some(matcher))
}

/// Rejects artifacts matching any of a set of exclude patterns.
#[derive(Clone, Debug, Default)]
pub struct ExcludeFilter {
    patterns: Vec<ExcludePattern>,
}

impl ExcludeFilter {
    /// Parse a comma-separated exclude list. Blank entries are ignored.
    pub fn parse(list: &str) -> Result<Self, FilterError> {
        Self::from_patterns(list.split(','))
    }

    pub fn from_patterns<'a, I>(patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns = patterns
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ExcludePattern::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[ExcludePattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl ArtifactFilter for ExcludeFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        !self.patterns.iter().any(|p| p.matches(artifact))
    }
}
