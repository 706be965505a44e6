use crate::RenderableReport;

const SUMMARY_TITLE: &str =
    "Summary - Aligned direct dependencies with unaligned transitive dependencies";
const DETAIL_TITLE: &str =
    "Detail - Aligned direct dependencies with unaligned transitive dependencies";

/// Banner written at the top of a report file.
pub fn render_project_title(name: &str) -> String {
    let eye_catcher = "=".repeat(name.chars().count());
    format!("{eye_catcher}\n{name}\n{eye_catcher}\n\n")
}

/// Render the four report sections. Summary and detail are omitted when empty.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    direct_section(&mut out, &report.aligned, "Aligned");
    direct_section(&mut out, &report.unaligned, "Unaligned");

    if !report.incompletely_aligned.is_empty() {
        heading(&mut out, SUMMARY_TITLE);
        for artifact in &report.incompletely_aligned {
            out.push_str(&format!("Incompletely aligned - {artifact}\n"));
        }
        out.push('\n');
    }

    if !report.chains.is_empty() {
        heading(&mut out, DETAIL_TITLE);
        for chain in &report.chains {
            out.push_str(&format!("Unaligned transitive - {}\n", chain.join(" <- ")));
        }
        out.push('\n');
    }

    out
}

fn direct_section(out: &mut String, artifacts: &[String], prefix: &str) {
    let noun = if artifacts.len() == 1 {
        "dependency"
    } else {
        "dependencies"
    };
    heading(out, &format!("{} {prefix} direct {noun}", artifacts.len()));
    for artifact in artifacts {
        out.push_str(&format!("{prefix} - {artifact}\n"));
    }
    out.push('\n');
}

fn heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}
