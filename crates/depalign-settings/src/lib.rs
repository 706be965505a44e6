//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! Every user-supplied pattern is compiled here, so the analysis never sees an invalid one.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{DepalignConfigV1, ExcludesConfig};
pub use resolve::{OutputTarget, Overrides, ResolvedConfig};

/// Parse `depalign.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DepalignConfigV1> {
    let cfg: DepalignConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (file values + CLI overrides), compiling patterns and filters.
pub fn resolve_config(
    cfg: DepalignConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
