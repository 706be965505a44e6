//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Direct dependency partitioning
//! - Chain shape (head unaligned, tail is a scan root, true ancestor path)
//! - Determinism, deduplication and monotonicity under filtering

use crate::filter::{AcceptAll, ArtifactNodeFilter};
use crate::{AlignmentPredicate, classify, scan};
use depalign_types::{Artifact, DependencyNode, PathChain};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

const PATTERN: &str = "-rel$";

fn arb_artifact() -> impl Strategy<Value = Artifact> {
    (
        prop::sample::select(vec!["org.a", "org.b", "com.c"]),
        prop::sample::select(vec!["core", "util", "api", "impl", "io"]),
        prop::sample::select(vec!["1.0-rel", "2.1-rel", "1.0", "3.0-SNAPSHOT", "0.9-rel-1"]),
        prop::sample::select(vec!["jar", "pom"]),
    )
        .prop_map(|(g, a, v, t)| Artifact::new(g, a, v).with_type(t))
}

/// Small trees: bounded depth and fan-out keep path enumeration cheap.
fn arb_tree() -> impl Strategy<Value = DependencyNode> {
    let leaf = arb_artifact().prop_map(DependencyNode::leaf);
    leaf.prop_recursive(4, 32, 4, |inner| {
        (arb_artifact(), prop::collection::vec(inner, 0..4))
            .prop_map(|(artifact, children)| DependencyNode::with_children(artifact, children))
    })
}

/// Scan roots as the engine would hand them over: aligned direct dependencies only.
fn arb_aligned_roots() -> impl Strategy<Value = Vec<DependencyNode>> {
    prop::collection::vec(arb_tree(), 0..5).prop_map(|trees| {
        let predicate = predicate();
        trees
            .into_iter()
            .filter(|t| predicate.is_artifact_aligned(&t.artifact))
            .collect()
    })
}

fn predicate() -> AlignmentPredicate {
    AlignmentPredicate::parse(PATTERN).expect("pattern compiles")
}

/// Whether `chain` (descendant first) is a root-to-node path of `tree`.
fn is_ancestor_path(tree: &DependencyNode, chain: &[Artifact]) -> bool {
    match chain.split_last() {
        None => false,
        Some((last, rest)) => {
            tree.artifact == *last
                && (rest.is_empty() || tree.children.iter().any(|c| is_ancestor_path(c, rest)))
        }
    }
}

fn chain_set(chains: &[PathChain]) -> HashSet<PathChain> {
    chains.iter().cloned().collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn classification_is_a_partition(direct in prop::collection::vec(arb_artifact(), 0..20)) {
        let result = classify(&direct, &predicate());

        let input: HashSet<&Artifact> = direct.iter().collect();
        let aligned: HashSet<&Artifact> = result.aligned.iter().collect();
        let unaligned: HashSet<&Artifact> = result.unaligned.iter().collect();

        prop_assert!(aligned.is_disjoint(&unaligned));
        let union: HashSet<&Artifact> = aligned.union(&unaligned).copied().collect();
        prop_assert_eq!(union, input);

        for pair in result.aligned.windows(2) {
            prop_assert!(pair[0].cmp_coordinate(&pair[1]).is_le());
        }
        for pair in result.unaligned.windows(2) {
            prop_assert!(pair[0].cmp_coordinate(&pair[1]).is_le());
        }
    }

    #[test]
    fn scanning_is_idempotent(roots in arb_aligned_roots()) {
        let filter = ArtifactNodeFilter(AcceptAll);
        let first = scan(&roots, &predicate(), &filter);
        let second = scan(&roots, &predicate(), &filter);

        prop_assert_eq!(first.incompletely_aligned, second.incompletely_aligned);
        prop_assert_eq!(first.chains, second.chains);
    }

    #[test]
    fn chains_are_well_formed(roots in arb_aligned_roots()) {
        let predicate = predicate();
        let result = scan(&roots, &predicate, &ArtifactNodeFilter(AcceptAll));
        let root_artifacts: HashSet<&Artifact> = roots.iter().map(|r| &r.artifact).collect();

        for chain in &result.chains {
            let head = chain.head().expect("chains are never empty");
            let tail = chain.root().expect("chains are never empty");
            prop_assert!(!predicate.is_artifact_aligned(head));
            prop_assert!(root_artifacts.contains(tail));
            prop_assert!(
                roots.iter().any(|r| is_ancestor_path(r, chain.artifacts())),
                "chain {} is not a path of any scan root", chain
            );
        }

        for pair in result.chains.windows(2) {
            let (a, b) = (pair[0].head().expect("head"), pair[1].head().expect("head"));
            prop_assert!(a.cmp_coordinate(b).is_le());
        }
    }

    #[test]
    fn no_duplicate_chains(roots in arb_aligned_roots()) {
        let result = scan(&roots, &predicate(), &ArtifactNodeFilter(AcceptAll));
        prop_assert_eq!(chain_set(&result.chains).len(), result.chains.len());
    }

    #[test]
    fn incompletely_aligned_roots_have_a_longer_chain(roots in arb_aligned_roots()) {
        let result = scan(&roots, &predicate(), &ArtifactNodeFilter(AcceptAll));

        let with_transitive: HashSet<&Artifact> = result
            .chains
            .iter()
            .filter(|c| c.len() > 1)
            .filter_map(PathChain::root)
            .collect();
        let marked: HashSet<&Artifact> = result.incompletely_aligned.iter().collect();
        prop_assert_eq!(marked, with_transitive);
    }

    #[test]
    fn filtering_never_grows_results(
        roots in arb_aligned_roots(),
        excluded in prop::sample::select(vec!["core", "util", "api", "impl", "io"]),
    ) {
        let predicate = predicate();
        let full = scan(&roots, &predicate, &ArtifactNodeFilter(AcceptAll));
        let filter = move |n: &DependencyNode| n.artifact.artifact_id() != excluded;
        let pruned = scan(&roots, &predicate, &filter);

        prop_assert!(pruned.incompletely_aligned.is_subset(&full.incompletely_aligned));
        prop_assert!(chain_set(&pruned.chains).is_subset(&chain_set(&full.chains)));
    }
}
