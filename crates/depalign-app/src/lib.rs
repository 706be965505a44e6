//! Use case orchestration for depalign.
//!
//! This crate provides the application layer: it coordinates settings, graph loading, the
//! analysis, rendering, and output. The CLI crate depends on this; it only handles argument
//! parsing and exit codes.

#![forbid(unsafe_code)]

mod receipt;
mod report;
mod sink;

pub use receipt::{build_receipt, serialize_receipt, to_renderable};
pub use report::{ReportInput, ReportOutput, run_report, verdict_exit_code};
pub use sink::{emit_report, write_text};
