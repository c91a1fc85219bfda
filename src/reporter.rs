//! Terminal summary output.
//!
//! This module is separate from the core library logic so prefdiff can be
//! used as a library without printing side effects. The full report goes to
//! the report file; what prints here is the one-glance verdict.

use colored::Colorize;

use crate::core::report::category_label;
use crate::core::{Category, Comparison, Side};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a one-line verdict for the comparison, plus broken-syntax warnings.
pub fn print_summary(cmp: &Comparison, label_a: &str, label_b: &str) {
    if cmp.has_differences() {
        let breakdown: Vec<String> = Category::ALL
            .into_iter()
            .filter(|&category| category != Category::Match)
            .filter_map(|category| {
                let count = cmp.count(category);
                (count > 0).then(|| format!("{} {}", count, category_label(category, label_a, label_b)))
            })
            .collect();

        println!(
            "{} {} of {} prefs differ ({})",
            FAILURE_MARK.red(),
            cmp.difference_count(),
            cmp.total_unique(),
            breakdown.join(", ")
        );
    } else {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Compared {} {} - no differences found",
                cmp.total_unique(),
                if cmp.total_unique() == 1 { "pref" } else { "prefs" }
            )
            .green()
        );
    }

    for (side, label) in [(Side::A, label_a), (Side::B, label_b)] {
        let broken = cmp.broken_count(side);
        if broken > 0 {
            eprintln!(
                "{} {} declaration{} with broken syntax in {}",
                "warning:".bold().yellow(),
                broken,
                if broken == 1 { "" } else { "s" },
                label
            );
        }
    }
}
