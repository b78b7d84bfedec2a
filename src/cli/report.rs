//! Summary printing.
//!
//! Per-file failures are logged as they are committed; this module only
//! prints the final tally on stdout.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::context::BatchReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Print the run summary to stdout.
pub fn print_summary(report: &BatchReport) {
    print_summary_to(report, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
pub fn print_summary_to<W: Write>(report: &BatchReport, writer: &mut W) {
    let processed = report.exploded_count() + report.copied_count();
    let headline = format!(
        "Exploded {} {} to {} using method '{}'",
        processed,
        plural(processed, "file", "files"),
        report.output.display(),
        report.layout
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), headline.green());

    let definitions = report.definitions_count();
    let _ = writeln!(
        writer,
        "  {} {} extracted from {} {}, {} copied unchanged",
        definitions,
        plural(definitions, "definition", "definitions"),
        report.exploded_count(),
        plural(report.exploded_count(), "file", "files"),
        report.copied_count()
    );

    let failed = report.failed_count();
    if failed > 0 {
        let line = format!(
            "{} {} failed",
            failed,
            plural(failed, "file", "files")
        );
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), line.red().bold());
        for (source, err) in report.failures() {
            let _ = writeln!(writer, "  {} ({})", source.display(), err.kind());
        }
    }
}

/// Print the warning shown when discovery finds nothing.
pub fn print_no_files(input: &Path) {
    eprintln!(
        "{} No Python files found in {}",
        "warning:".bold().yellow(),
        input.display()
    );
}
