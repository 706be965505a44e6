//! Graph adapters: read the resolved dependency graph and select direct dependencies.
//!
//! This crate is allowed to do filesystem IO. It does not resolve versions itself; the host build
//! tool exports an already-resolved tree (`depalign.graph.v1`) and this crate only reads, prunes
//! and selects from it.

#![forbid(unsafe_code)]

mod error;
mod select;

use camino::Utf8Path;
use depalign_types::{GraphDocument, SCHEMA_GRAPH_V1};

pub use error::GraphError;
pub use select::{DirectDependencies, ProjectSelection, collect_direct_dependencies, prune};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a graph document and select from it in aggregate mode.
    ///
    /// **Never panics** on any input.
    pub fn parse_and_select(text: &str) -> Result<usize, GraphError> {
        let doc = parse_graph(text, "<fuzz>")?;
        let direct = collect_direct_dependencies(
            &doc,
            &ProjectSelection::Aggregate,
            &depalign_domain::AcceptAll,
        )?;
        Ok(direct.nodes.len())
    }
}

/// Parse a graph document from JSON text. `origin` names the source in error messages.
pub fn parse_graph(text: &str, origin: &str) -> Result<GraphDocument, GraphError> {
    let doc: GraphDocument = serde_json::from_str(text).map_err(|source| GraphError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    if let Some(schema) = doc.schema.as_deref()
        && schema != SCHEMA_GRAPH_V1
    {
        return Err(GraphError::UnsupportedSchema(schema.to_string()));
    }
    if doc.projects.is_empty() {
        return Err(GraphError::NoProjects);
    }

    Ok(doc)
}

/// Read and parse the graph document at `path`.
pub fn load_graph(path: &Utf8Path) -> Result<GraphDocument, GraphError> {
    let text = std::fs::read_to_string(path).map_err(|source| GraphError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_graph(&text, path.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "schema": "depalign.graph.v1",
        "projects": [{
            "name": "demo",
            "artifact": {"group_id": "com.example", "artifact_id": "demo", "version": "1.0"},
            "dependencies": [
                {"group_id": "lib", "artifact_id": "core", "version": "1.0.0-rel", "scope": "compile"}
            ]
        }]
    }"#;

    #[test]
    fn parses_minimal_document() {
        let doc = parse_graph(MINIMAL, "inline").expect("parse");
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.projects[0].dependencies.len(), 1);
    }

    #[test]
    fn rejects_unknown_schema() {
        let text = MINIMAL.replace("depalign.graph.v1", "depalign.graph.v9");
        assert!(matches!(
            parse_graph(&text, "inline"),
            Err(GraphError::UnsupportedSchema(s)) if s == "depalign.graph.v9"
        ));
    }

    #[test]
    fn rejects_empty_project_list() {
        assert!(matches!(
            parse_graph(r#"{"projects": []}"#, "inline"),
            Err(GraphError::NoProjects)
        ));
    }

    #[test]
    fn parse_error_names_origin() {
        let err = parse_graph("{", "graph.json").expect_err("malformed");
        assert!(err.to_string().contains("graph.json"));
    }

    #[test]
    fn load_graph_reads_file_and_reports_missing() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");

        let path = root.join("graph.json");
        std::fs::write(&path, MINIMAL).expect("write graph");
        assert!(load_graph(&path).is_ok());

        let missing = root.join("missing.json");
        assert!(matches!(
            load_graph(&missing),
            Err(GraphError::Read { .. })
        ));
    }

    proptest! {
        #[test]
        fn fuzz_parser_never_panics(input in ".*") {
            let _ = fuzz::parse_and_select(&input);
        }
    }
}
