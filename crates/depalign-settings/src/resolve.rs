use crate::model::{DepalignConfigV1, ExcludesConfig};
use anyhow::Context;
use camino::Utf8PathBuf;
use depalign_domain::policy::FailPolicy;
use depalign_domain::{
    AlignmentPredicate, ExcludeFilter, ExcludePattern, ResolutionScope, ScopeFilter,
};

/// Command-line values; each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub alignment_pattern: Option<String>,
    pub scope: Option<String>,
    /// Comma-separated exclude list.
    pub excludes: Option<String>,
    pub fail_on_unaligned: Option<bool>,
    pub output_file: Option<Utf8PathBuf>,
    pub append_output: Option<bool>,
    pub skip: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Emit report lines to the log at info level.
    Log,
    File { path: Utf8PathBuf, append: bool },
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub predicate: AlignmentPredicate,
    pub scope: ScopeFilter,
    pub excludes: ExcludeFilter,
    pub fail_policy: FailPolicy,
    pub output: OutputTarget,
    pub skip: bool,
}

pub fn resolve_config(
    cfg: DepalignConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let pattern = overrides
        .alignment_pattern
        .or(cfg.alignment_pattern)
        .context("alignment_pattern is required (set it in depalign.toml or pass --alignment-pattern)")?;
    let predicate = AlignmentPredicate::parse(&pattern)
        .with_context(|| format!("invalid alignment_pattern: {pattern}"))?;

    let scope = match overrides.scope.or(cfg.scope) {
        Some(s) => {
            let scope: ResolutionScope = s.parse()?;
            tracing::debug!(%scope, "resolving dependency tree for scope");
            ScopeFilter::new(Some(scope))
        }
        None => ScopeFilter::default(),
    };

    let excludes = match overrides.excludes.map(ExcludesConfig::Csv).or(cfg.excludes) {
        Some(ex) => {
            let filter = ExcludeFilter::from_patterns(ex.patterns()).context("invalid excludes")?;
            let patterns: Vec<&str> = filter
                .patterns()
                .iter()
                .map(ExcludePattern::as_str)
                .collect();
            tracing::debug!(?patterns, "filtering dependency tree by artifact exclude patterns");
            filter
        }
        None => ExcludeFilter::default(),
    };

    let fail_policy = FailPolicy {
        fail_on_unaligned: overrides
            .fail_on_unaligned
            .or(cfg.fail_on_unaligned)
            .unwrap_or(false),
    };

    let append = overrides
        .append_output
        .or(cfg.append_output)
        .unwrap_or(false);
    let output = match overrides
        .output_file
        .or(cfg.output_file.map(Utf8PathBuf::from))
    {
        Some(path) => OutputTarget::File { path, append },
        None => OutputTarget::Log,
    };

    Ok(ResolvedConfig {
        predicate,
        scope,
        excludes,
        fail_policy,
        output,
        skip: overrides.skip.or(cfg.skip).unwrap_or(false),
    })
}
