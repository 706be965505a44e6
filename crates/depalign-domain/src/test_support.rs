use crate::AlignmentPredicate;
use depalign_types::{Artifact, DependencyNode};

pub fn artifact(coordinate: &str) -> Artifact {
    coordinate.parse().expect("test coordinate must parse")
}

pub fn leaf(coordinate: &str) -> DependencyNode {
    DependencyNode::leaf(artifact(coordinate))
}

pub fn node(coordinate: &str, children: Vec<DependencyNode>) -> DependencyNode {
    DependencyNode::with_children(artifact(coordinate), children)
}

pub fn predicate(pattern: &str) -> AlignmentPredicate {
    AlignmentPredicate::parse(pattern).expect("test pattern must compile")
}
