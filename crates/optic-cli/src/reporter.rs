//! Terminal rendering of usage diagnostics.

use colored::Colorize;

use optic_checker::diagnostics::{Diagnostic, DiagnosticCategory};

use crate::driver::FileReport;

/// Render one diagnostic as a single line.
///
/// With a line map: `file(line,col): warning OPT5101: message`.
/// Without one the byte offset is shown instead.
#[must_use]
pub fn render(report: &FileReport, diagnostic: &Diagnostic) -> String {
    let location = match &report.line_map {
        Some(map) => {
            let pos = map.position(diagnostic.start);
            format!("{}({},{})", diagnostic.file, pos.line, pos.column)
        }
        None => format!("{}(+{})", diagnostic.file, diagnostic.start),
    };
    let severity = match diagnostic.category {
        DiagnosticCategory::Error => "error".red().bold(),
        DiagnosticCategory::Warning => "warning".yellow().bold(),
        DiagnosticCategory::Suggestion => "suggestion".cyan().bold(),
        DiagnosticCategory::Message => "message".normal(),
    };
    format!(
        "{}: {} OPT{}: {}",
        location.cyan(),
        severity,
        diagnostic.code,
        diagnostic.message_text
    )
}

/// Print every diagnostic of a report to stdout.
pub fn print_report(report: &FileReport) {
    for diagnostic in &report.diagnostics {
        println!("{}", render(report, diagnostic));
    }
}

/// Trailing summary line.
#[must_use]
pub fn summary(files: usize, diagnostics: usize) -> String {
    let files_word = if files == 1 { "file" } else { "files" };
    if diagnostics == 0 {
        format!("{files} {files_word} checked, no issues found")
    } else {
        let issues_word = if diagnostics == 1 { "issue" } else { "issues" };
        format!("{files} {files_word} checked, {diagnostics} {issues_word} found")
    }
}
