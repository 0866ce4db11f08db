//! Console rendering of pass results

use colored::Colorize;
use qauto_core::{LogSink, PassReport, SUMMARY_LABEL};

/// Prints the end-of-pass buffer to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn emit(&mut self, lines: &[String]) {
        for line in lines {
            println!("{}", style_line(line));
        }
    }
}

/// Style one buffered line by its shape: headings bold, group names green.
fn style_line(line: &str) -> String {
    if line.starts_with(SUMMARY_LABEL) {
        if line.contains("Error:") {
            return line.red().bold().to_string();
        }
        return line.bold().to_string();
    }
    if line.starts_with("  ") && !line.starts_with("    ") {
        return line.green().bold().to_string();
    }
    line.to_string()
}

/// One-line outcome printed after the buffer.
pub fn print_outcome(report: &PassReport) {
    if !report.errors.is_empty() {
        return;
    }
    if report.written {
        println!(
            "{} Updated {} ({} scanned).",
            "OK".green().bold(),
            report.updated.join(", ").cyan(),
            report.scanned
        );
    } else if report.missing_count() == 0 {
        println!(
            "{} Configuration is up to date ({} scanned).",
            "OK".green().bold(),
            report.scanned
        );
    } else {
        println!(
            "{} {} missing item(s) left in place ({} scanned).",
            "MISSING".yellow().bold(),
            report.missing_count(),
            report.scanned
        );
    }
    for group in &report.skipped {
        println!(
            "   {} no `{}: [...]` literal found, group skipped",
            "!".yellow(),
            group
        );
    }
}
