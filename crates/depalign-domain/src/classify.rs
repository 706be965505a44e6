use crate::AlignmentPredicate;
use depalign_types::Artifact;
use std::collections::HashSet;

/// Direct dependencies split by alignment, each sorted by `(group_id, artifact_id)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub aligned: Vec<Artifact>,
    pub unaligned: Vec<Artifact>,
}

/// Partition direct dependency artifacts into aligned and unaligned.
///
/// Duplicate artifacts (same group, artifact, type and version) are collapsed.
/// Ties on coordinate are ordered by type, version and scope so output is
/// deterministic regardless of input order.
pub fn classify<'a, I>(direct: I, predicate: &AlignmentPredicate) -> ClassificationResult
where
    I: IntoIterator<Item = &'a Artifact>,
{
    let mut seen = HashSet::new();
    let (mut aligned, mut unaligned): (Vec<Artifact>, Vec<Artifact>) = direct
        .into_iter()
        .filter(|a| seen.insert(*a))
        .cloned()
        .partition(|a| predicate.is_artifact_aligned(a));

    aligned.sort_by(Artifact::cmp_full);
    unaligned.sort_by(Artifact::cmp_full);

    ClassificationResult { aligned, unaligned }
}
