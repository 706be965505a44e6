/// Display-ready report: artifacts are already formatted, lists already sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableReport {
    pub aligned: Vec<String>,
    pub unaligned: Vec<String>,
    pub incompletely_aligned: Vec<String>,
    /// Each chain descendant first.
    pub chains: Vec<Vec<String>>,
}
