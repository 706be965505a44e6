//! Stable DTOs and IDs used across the depalign workspace.
//!
//! This crate is intentionally boring:
//! - artifact identity and coordinate ordering
//! - the resolved dependency tree shape handed to the analysis
//! - path chains explaining how an unaligned version was reached
//! - the graph document exported by the host build tool
//! - the serialized report receipt

#![forbid(unsafe_code)]

pub mod artifact;
pub mod chain;
pub mod graph;
pub mod ids;
pub mod node;
pub mod receipt;

pub use artifact::{Artifact, ArtifactKey, ParseArtifactError};
pub use chain::PathChain;
pub use graph::{GraphDocument, ProjectGraph};
pub use node::DependencyNode;
pub use receipt::{
    AlignmentReceipt, ReceiptCounts, SCHEMA_GRAPH_V1, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
