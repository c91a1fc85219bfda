//! Plain-text report rendering.
//!
//! The report is a fixed-order document: header, summary block, then one
//! detail section per category. Sections are suppressible through a bitmask;
//! a suppressed section disappears from the detail body while its count
//! stays visible in the summary.
//!
//! Names and file labels are column-aligned using display width, not byte
//! length, so CJK preference names line up too.

use chrono::Utc;
use unicode_width::UnicodeWidthStr;

use crate::core::compare::{Category, Comparison, Outcome};
use crate::core::data::{PrefRecord, Side};

/// Suppression bits for [`render`]. The two broken-syntax sections share
/// [`HIDE_BROKEN`]; every other section has its own bit.
pub const HIDE_MATCHING: u32 = 1;
pub const HIDE_DIFFS: u32 = 1 << 1;
pub const HIDE_MISSING_IN_A: u32 = 1 << 2;
pub const HIDE_MISSING_IN_B: u32 = 1 << 3;
pub const HIDE_INACTIVE_IN_A: u32 = 1 << 4;
pub const HIDE_INACTIVE_IN_B: u32 = 1 << 5;
pub const HIDE_MISMATCHED: u32 = 1 << 6;
pub const HIDE_BROKEN: u32 = 1 << 7;

fn mask_bit(category: Category) -> u32 {
    match category {
        Category::Match => HIDE_MATCHING,
        Category::ValueDiff => HIDE_DIFFS,
        Category::MissingInA => HIDE_MISSING_IN_A,
        Category::MissingInB => HIDE_MISSING_IN_B,
        Category::InactiveInA => HIDE_INACTIVE_IN_A,
        Category::InactiveInB => HIDE_INACTIVE_IN_B,
        Category::Mismatched => HIDE_MISMATCHED,
    }
}

/// Summary wording for a category, with the side labels substituted in.
pub fn category_label(category: Category, label_a: &str, label_b: &str) -> String {
    match category {
        Category::Match => "matching prefs, same state".to_string(),
        Category::ValueDiff => "prefs with different values".to_string(),
        Category::MissingInA => format!("prefs not declared in {label_a}"),
        Category::MissingInB => format!("prefs not declared in {label_b}"),
        Category::InactiveInA => {
            format!("prefs with matching values but inactive in {label_a}")
        }
        Category::InactiveInB => {
            format!("prefs with matching values but inactive in {label_b}")
        }
        Category::Mismatched => "prefs with both value and state mismatched".to_string(),
    }
}

/// Renders the full report text.
pub fn render(cmp: &Comparison, label_a: &str, label_b: &str, hide_mask: u32) -> String {
    let name_width = cmp
        .outcomes
        .iter()
        .map(|o| o.name.width())
        .max()
        .unwrap_or(0);
    let label_width = label_a.width().max(label_b.width());

    let mut out = String::new();

    out.push_str("prefdiff report\n");
    out.push_str(&format!(
        "generated {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("comparing A: {label_a}\n"));
    out.push_str(&format!("          B: {label_b}\n"));

    out.push_str("\nSummary:\n\n");
    out.push_str(&format!("  {:>6} unique prefs in {}\n", cmp.unique_a, label_a));
    out.push_str(&format!("  {:>6} unique prefs in {}\n", cmp.unique_b, label_b));
    out.push('\n');
    for category in Category::ALL {
        let count = cmp.count(category);
        if count > 0 {
            out.push_str(&format!(
                "  {:>6} {}\n",
                count,
                category_label(category, label_a, label_b)
            ));
        }
    }
    out.push_str(&format!("  {:>6} unique prefs in total\n", cmp.total_unique()));

    let broken_a = cmp.broken_count(Side::A);
    let broken_b = cmp.broken_count(Side::B);
    if broken_a > 0 || broken_b > 0 {
        out.push('\n');
        for (count, label) in [(broken_a, label_a), (broken_b, label_b)] {
            if count > 0 {
                out.push_str(&format!(
                    "  warning: {count} declarations with broken syntax in {label}\n"
                ));
            }
        }
    }

    out.push_str("\nlegend: [i] marks a pref declared only inside comments\n");

    for category in Category::ALL {
        if hide_mask & mask_bit(category) != 0 {
            continue;
        }
        let entries: Vec<&Outcome> = cmp.in_category(category).collect();
        if entries.is_empty() {
            continue;
        }

        push_section_header(
            &mut out,
            &category_label(category, label_a, label_b),
            entries.len(),
        );
        for outcome in entries {
            match primary_record(outcome) {
                Some(record) => push_entry_line(&mut out, &outcome.name, record, name_width),
                None => {
                    // Two-value categories get a header line plus one value
                    // line per side.
                    out.push_str(&format!("      {}\n", outcome.name));
                    for (label, record) in [(label_a, &outcome.a), (label_b, &outcome.b)] {
                        if let Some(record) = record {
                            out.push_str(&format!(
                                "        {}  {:>3} {}\n",
                                pad(label, label_width),
                                record.state.tag(),
                                record.value
                            ));
                        }
                    }
                }
            }
        }
    }

    if hide_mask & HIDE_BROKEN == 0 {
        for (side, label) in [(Side::A, label_a), (Side::B, label_b)] {
            let entries: Vec<&Outcome> = cmp.broken_on(side).collect();
            if entries.is_empty() {
                continue;
            }
            push_section_header(&mut out, &format!("broken syntax in {label}"), entries.len());
            for outcome in entries {
                if let Some(record) = outcome.record(side) {
                    push_entry_line(&mut out, &outcome.name, record, name_width);
                }
            }
        }
    }

    out
}

/// Which side's record carries a single-line section entry. The two-value
/// categories return `None` and are rendered as multi-line entries.
fn primary_record(outcome: &Outcome) -> Option<&PrefRecord> {
    match outcome.category {
        Category::Match | Category::MissingInB | Category::InactiveInA => outcome.a.as_ref(),
        Category::MissingInA | Category::InactiveInB => outcome.b.as_ref(),
        Category::ValueDiff | Category::Mismatched => None,
    }
}

fn push_section_header(out: &mut String, label: &str, count: usize) {
    let title = format!("{} ({})", capitalize(label), count);
    out.push('\n');
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"-".repeat(title.width()));
    out.push('\n');
}

fn push_entry_line(out: &mut String, name: &str, record: &PrefRecord, name_width: usize) {
    // Broken values may span lines; flatten them so the listing stays
    // line-oriented.
    let value = record.value.replace('\n', " ");
    out.push_str(&format!(
        "  {:>3} {}  {}\n",
        record.state.tag(),
        pad(name, name_width),
        value.trim()
    ));
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
