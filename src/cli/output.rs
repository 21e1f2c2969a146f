//! Output formatting utilities

use crate::application::{PatchReport, RunOptions};
use crate::domain::UnpatchReport;

/// Echo the resolved configuration before anything is changed
pub fn format_configuration(options: &RunOptions) -> String {
    format!(
        "op:             {}\n\
         safe mode:      {}\n\
         comment symbol: {}\n\
         patch file:     {}\n\
         target file:    {}\n",
        options.operation,
        options.safe,
        options.separator,
        options.patch.path.display(),
        options.target.path.display()
    )
}

pub fn format_patch_report(report: &PatchReport) -> String {
    let mut output = format!("Appended {} line(s)", report.appended);
    if report.separated {
        output.push_str(" after a blank line");
    }
    output
}

pub fn format_unpatch_report(report: &UnpatchReport) -> String {
    if report.unmatched == 0 {
        format!("Removed {} line(s)", report.removed)
    } else {
        format!(
            "Removed {} line(s), {} patch line(s) not found",
            report.removed, report.unmatched
        )
    }
}

pub fn format_unpatch_all_report(removed: usize) -> String {
    format!("Removed {} line(s)", removed)
}
