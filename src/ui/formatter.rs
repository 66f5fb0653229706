//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic. Functions here only
//! print; building the text is kept in `format_*` helpers so it can be tested.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::changelog::CategoryMap;
use crate::cli::ReleaseOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One line per category: "<category>: <n> change(s) in <m> module(s)"
pub fn format_category_summary(map: &CategoryMap) -> Vec<String> {
    map.iter()
        .map(|(category, modules)| {
            let changes: usize = modules.values().map(Vec::len).sum();
            format!(
                "{}: {} change(s) in {} module(s)",
                category,
                changes,
                modules.len()
            )
        })
        .collect()
}

/// Display the outcome of a release build.
///
/// Shows the range that was collected, where the files were written, and
/// any boundary warnings raised along the way.
pub fn display_release_outcome(outcome: &ReleaseOutcome) {
    for warning in &outcome.warnings {
        display_boundary_warning(warning);
    }

    println!(
        "\n{}",
        style(format!("Changelog for {}", outcome.version.tag_name())).bold()
    );
    println!(
        "  Since:   {} ({} commits, {} entries)",
        style(&outcome.previous.name).cyan(),
        outcome.commit_count,
        outcome.entry_count
    );
    for line in format_category_summary(&outcome.changelog) {
        println!("    {}", line);
    }

    display_success(&format!("Wrote {}", outcome.changelog_path.display()));
    display_success(&format!(
        "Rebuilt {} ({} versions)",
        outcome.index_path.display(),
        outcome.indexed_versions.len()
    ));
}
