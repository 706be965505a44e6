use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `depalign.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DepalignConfigV1 {
    /// Optional schema string for tooling (`depalign.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Regular expression; versions containing a match are aligned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_pattern: Option<String>,

    /// Resolution scope to analyse (`compile`, `runtime`, `test`, ...). All scopes when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// `[groupId]:[artifactId]:[type]:[version]` patterns to leave out of the analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<ExcludesConfig>,

    /// Fail the run when unaligned or incompletely aligned dependencies are found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_unaligned: Option<bool>,

    /// Write the report here instead of logging it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,

    /// Append to `output_file` rather than overwrite it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_output: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
}

/// Excludes may be a comma-separated string or a list of patterns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ExcludesConfig {
    List(Vec<String>),
    Csv(String),
}

impl ExcludesConfig {
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            ExcludesConfig::List(items) => items.iter().map(String::as_str).collect(),
            ExcludesConfig::Csv(s) => s.split(',').collect(),
        }
    }
}
