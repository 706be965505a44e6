use camino::Utf8PathBuf;

/// Failures building the dependency graph. Distinct from configuration and policy failures.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("cannot read dependency graph {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse dependency graph {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported dependency graph schema: {0} (expected depalign.graph.v1)")]
    UnsupportedSchema(String),

    #[error("dependency graph contains no projects")]
    NoProjects,

    #[error("unknown project '{name}' (available: {})", available.join(", "))]
    UnknownProject { name: String, available: Vec<String> },
}
