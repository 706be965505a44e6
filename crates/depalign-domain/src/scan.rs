//! Transitive alignment scanning.
//!
//! Each scan root is an aligned direct dependency. Its subtree is walked depth first; every
//! unaligned node yields a [`PathChain`] from that node back up to the root, and marks the root
//! as incompletely aligned. Roots are independent and are scanned in parallel.

use crate::{AlignmentPredicate, NodeFilter};
use depalign_types::{Artifact, DependencyNode, PathChain};
use rayon::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
pub struct ScanResult {
    /// Scan roots with at least one unaligned descendant.
    pub incompletely_aligned: HashSet<Artifact>,
    /// Deduplicated chains, sorted by the head artifact's coordinate.
    pub chains: Vec<PathChain>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.incompletely_aligned.is_empty() && self.chains.is_empty()
    }
}

/// Immutable ancestor path: each frame lives on the stack of the call that entered it.
struct Ancestry<'a> {
    artifact: &'a Artifact,
    parent: Option<&'a Ancestry<'a>>,
}

impl Ancestry<'_> {
    fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Descendant first, root last.
    fn to_chain(&self) -> PathChain {
        let mut artifacts = Vec::new();
        let mut frame = Some(self);
        while let Some(f) = frame {
            artifacts.push(f.artifact.clone());
            frame = f.parent;
        }
        PathChain::new(artifacts)
    }
}

#[derive(Default)]
struct RootScan {
    chains: Vec<PathChain>,
    incomplete: bool,
}

pub fn scan(
    roots: &[DependencyNode],
    predicate: &AlignmentPredicate,
    filter: &dyn NodeFilter,
) -> ScanResult {
    let per_root: Vec<RootScan> = roots
        .par_iter()
        .map(|root| scan_root(root, predicate, filter))
        .collect();

    let mut incompletely_aligned = HashSet::new();
    let mut chains = Vec::new();
    for (root, result) in roots.iter().zip(per_root) {
        if result.incomplete {
            tracing::debug!(root = %root.artifact, "aligned direct dependency has unaligned transitives");
            incompletely_aligned.insert(root.artifact.clone());
        }
        chains.extend(result.chains);
    }

    ScanResult {
        incompletely_aligned,
        chains: dedup_and_sort(chains),
    }
}

fn scan_root(
    root: &DependencyNode,
    predicate: &AlignmentPredicate,
    filter: &dyn NodeFilter,
) -> RootScan {
    let mut out = RootScan::default();
    visit(root, None, predicate, filter, &mut out);
    out
}

fn visit(
    node: &DependencyNode,
    parent: Option<&Ancestry<'_>>,
    predicate: &AlignmentPredicate,
    filter: &dyn NodeFilter,
    out: &mut RootScan,
) {
    if !filter.accept(node) {
        return;
    }

    let frame = Ancestry {
        artifact: &node.artifact,
        parent,
    };

    for child in &node.children {
        visit(child, Some(&frame), predicate, filter, out);
    }

    if !predicate.is_artifact_aligned(&node.artifact) {
        out.chains.push(frame.to_chain());
        // The root's own alignment is a precondition, not a finding.
        if !frame.is_root() {
            out.incomplete = true;
        }
    }
}

/// Keep the first occurrence of each chain, then stable-sort by the head's coordinate.
fn dedup_and_sort(chains: Vec<PathChain>) -> Vec<PathChain> {
    let mut seen = HashSet::new();
    let mut unique: Vec<PathChain> = chains
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect();
    unique.sort_by(|a, b| match (a.head(), b.head()) {
        (Some(x), Some(y)) => x.cmp_coordinate(y),
        (x, y) => x.is_some().cmp(&y.is_some()),
    });
    unique
}
