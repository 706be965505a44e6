use crate::GraphError;
use depalign_domain::ArtifactFilter;
use depalign_types::{Artifact, DependencyNode, GraphDocument, ProjectGraph};
use std::collections::HashSet;

/// Which project(s) of a multi-project build to report on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectSelection {
    /// One project by name; the first project of the document when `None`.
    Single(Option<String>),
    /// The union of every project's direct dependencies.
    Aggregate,
}

#[derive(Clone, Debug, Default)]
pub struct DirectDependencies {
    /// Display names of the selected projects, in document order.
    pub projects: Vec<String>,
    /// Direct dependency nodes with their pruned subtrees.
    pub nodes: Vec<DependencyNode>,
}

/// Drop `node` and its subtree if the filter rejects it; otherwise prune its children.
pub fn prune(node: &DependencyNode, filter: &dyn ArtifactFilter) -> Option<DependencyNode> {
    if !filter.include(&node.artifact) {
        return None;
    }
    Some(DependencyNode {
        artifact: node.artifact.clone(),
        children: node
            .children
            .iter()
            .filter_map(|c| prune(c, filter))
            .collect(),
    })
}

/// Select the direct dependencies of the chosen project(s).
///
/// Subtrees are pruned with `filter` (scope and exclude rules applied at resolution time).
/// Dependencies on other projects of the same build are not direct dependencies.
pub fn collect_direct_dependencies(
    doc: &GraphDocument,
    selection: &ProjectSelection,
    filter: &dyn ArtifactFilter,
) -> Result<DirectDependencies, GraphError> {
    let selected: Vec<&ProjectGraph> = match selection {
        ProjectSelection::Aggregate => doc.projects.iter().collect(),
        ProjectSelection::Single(None) => doc.projects.first().into_iter().collect(),
        ProjectSelection::Single(Some(name)) => {
            let project = doc
                .projects
                .iter()
                .find(|p| &p.name == name || p.artifact.artifact_id() == name)
                .ok_or_else(|| GraphError::UnknownProject {
                    name: name.clone(),
                    available: doc.projects.iter().map(|p| p.name.clone()).collect(),
                })?;
            vec![project]
        }
    };
    if selected.is_empty() {
        return Err(GraphError::NoProjects);
    }

    let build_artifacts: HashSet<&Artifact> = doc.projects.iter().map(|p| &p.artifact).collect();

    let mut out = DirectDependencies::default();
    for project in selected {
        let mut direct: Vec<DependencyNode> = project
            .dependencies
            .iter()
            .filter(|n| !build_artifacts.contains(&n.artifact))
            .filter_map(|n| prune(n, filter))
            .collect();

        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut sorted: Vec<&Artifact> = direct.iter().map(|n| &n.artifact).collect();
            sorted.sort_by(|a, b| a.cmp_full(b));
            for artifact in sorted {
                tracing::debug!(project = %project.artifact, dependency = %artifact, "found direct dependency");
            }
        }

        out.projects.push(project.name.clone());
        out.nodes.append(&mut direct);
    }

    Ok(out)
}
