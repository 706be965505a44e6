//! Rendering of alignment reports to plain text.

#![forbid(unsafe_code)]

mod model;
mod text;

pub use model::RenderableReport;
pub use text::{render_project_title, render_text};
