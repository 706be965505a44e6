use crate::{ClassificationResult, ScanResult};
use depalign_types::{Artifact, PathChain, ReceiptCounts};

/// The four logical report sections, ready for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    pub aligned: Vec<Artifact>,
    pub unaligned: Vec<Artifact>,
    /// Aligned direct dependencies with at least one unaligned transitive, sorted by coordinate.
    pub incompletely_aligned: Vec<Artifact>,
    pub chains: Vec<PathChain>,
}

impl AlignmentReport {
    pub fn build(classification: ClassificationResult, scan: ScanResult) -> Self {
        let mut incompletely_aligned: Vec<Artifact> =
            scan.incompletely_aligned.into_iter().collect();
        incompletely_aligned.sort_by(Artifact::cmp_full);

        Self {
            aligned: classification.aligned,
            unaligned: classification.unaligned,
            incompletely_aligned,
            chains: scan.chains,
        }
    }

    pub fn counts(&self) -> ReceiptCounts {
        ReceiptCounts {
            aligned: self.aligned.len() as u32,
            unaligned: self.unaligned.len() as u32,
            incompletely_aligned: self.incompletely_aligned.len() as u32,
            chains: self.chains.len() as u32,
        }
    }
}
