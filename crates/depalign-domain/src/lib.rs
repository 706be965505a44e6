//! Pure alignment analysis (no IO).
//!
//! Input: direct dependency nodes resolved elsewhere, a compiled alignment pattern, and a node filter.
//! Output: aligned/unaligned partition, incompletely aligned direct dependencies, and path chains.

#![forbid(unsafe_code)]

pub mod alignment;
pub mod classify;
pub mod filter;
pub mod policy;
pub mod report;
pub mod scan;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use alignment::AlignmentPredicate;
pub use classify::{ClassificationResult, classify};
pub use engine::{DomainReport, evaluate};
pub use filter::{
    AcceptAll, And, ArtifactFilter, ArtifactNodeFilter, ExcludeFilter, ExcludePattern, FilterError,
    NodeFilter, ResolutionScope, ScopeFilter,
};
pub use policy::{FailPolicy, failure_message};
pub use report::AlignmentReport;
pub use scan::{ScanResult, scan};
