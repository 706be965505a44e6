//! Fuzz target for exclude pattern parsing and matching.
//!
//! Goal: Parsing a comma-separated exclude list and matching it against an artifact should
//! **never panic**. Malformed lists may return errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_exclude_patterns
//! ```

#![no_main]

use arbitrary::Arbitrary;
use depalign_domain::{ArtifactFilter, ExcludeFilter};
use depalign_types::Artifact;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ExcludeInput {
    /// Comma-separated `[groupId]:[artifactId]:[type]:[version]` list.
    excludes: String,
    group_id: String,
    artifact_id: String,
    kind: String,
    version: String,
}

fuzz_target!(|input: ExcludeInput| {
    if input.excludes.len() > 1024 {
        return;
    }

    if let Ok(filter) = ExcludeFilter::parse(&input.excludes) {
        let artifact = Artifact::new(input.group_id, input.artifact_id, input.version)
            .with_type(input.kind);
        let _ = filter.include(&artifact);
    }
});
