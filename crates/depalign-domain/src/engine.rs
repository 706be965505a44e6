use crate::{AlignmentPredicate, AlignmentReport, FailPolicy, NodeFilter, classify, scan};
use depalign_types::{DependencyNode, Verdict};
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub report: AlignmentReport,
    pub verdict: Verdict,
    pub failure: Option<String>,
}

/// Classify the direct dependencies, scan the aligned ones, and apply the fail policy.
///
/// `direct` must already be pruned by the collaborator's scope and exclude rules;
/// `node_filter` applies to the transitive walk.
pub fn evaluate(
    direct: &[DependencyNode],
    predicate: &AlignmentPredicate,
    node_filter: &dyn NodeFilter,
    policy: FailPolicy,
) -> DomainReport {
    let classification = classify(direct.iter().map(|n| &n.artifact), predicate);

    let aligned: HashSet<_> = classification.aligned.iter().collect();
    let scan_roots: Vec<DependencyNode> = direct
        .iter()
        .filter(|n| aligned.contains(&n.artifact))
        .cloned()
        .collect();

    let scan = scan(&scan_roots, predicate, node_filter);
    let report = AlignmentReport::build(classification, scan);
    let (verdict, failure) = policy.verdict(&report);

    DomainReport {
        report,
        verdict,
        failure,
    }
}
