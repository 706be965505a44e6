use crate::AlignmentReport;
use depalign_types::Verdict;

/// Whether misalignment fails the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FailPolicy {
    pub fail_on_unaligned: bool,
}

impl FailPolicy {
    pub fn verdict(&self, report: &AlignmentReport) -> (Verdict, Option<String>) {
        if !self.fail_on_unaligned {
            return (Verdict::Pass, None);
        }
        match failure_message(report.unaligned.len(), report.incompletely_aligned.len()) {
            Some(message) => (Verdict::Fail, Some(message)),
            None => (Verdict::Pass, None),
        }
    }
}

fn plural(count: usize) -> (&'static str, &'static str) {
    if count == 1 { ("is", "y") } else { ("are", "ies") }
}

/// Human-readable failure summary, or `None` when both counts are zero.
pub fn failure_message(unaligned: usize, incompletely_aligned: usize) -> Option<String> {
    let mut message = String::new();

    if unaligned > 0 {
        let (verb, suffix) = plural(unaligned);
        message.push_str(&format!(
            "There {verb} {unaligned} unaligned direct dependenc{suffix}"
        ));
    }

    if incompletely_aligned > 0 {
        let (verb, suffix) = plural(incompletely_aligned);
        message.push_str(if message.is_empty() { "There" } else { " and there" });
        message.push_str(&format!(
            " {verb} {incompletely_aligned} aligned direct dependenc{suffix} with at least one unaligned transitive dependency"
        ));
    } else if !message.is_empty() {
        message.push('.');
    }

    (!message.is_empty()).then_some(message)
}
