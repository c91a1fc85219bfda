//! Declaration extraction.
//!
//! Finds every well-formed preference call in a block of text and records
//! its name, classified value, and state into a [`PrefMap`]. The three
//! accepted call forms are `pref(...)`, `user_pref(...)` and
//! `sticky_pref(...)`; matching is case-sensitive and anything else in the
//! text is ignored.
//!
//! The scan is unanchored: a well-formed call is recognized wherever it
//! appears in the text, which is what lets a raw (comment-parsing disabled)
//! pass pick up declarations behind `//` markers and treat them as active.
//!
//! Extraction is deliberately not a parser: a call that matches the coarse
//! shape but whose value cannot be classified as string, boolean or integer
//! is still recorded, flagged as broken, with the raw value text preserved
//! verbatim for the report.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::{DeclState, PrefMap, PrefRecord};
use crate::core::literal::{self, QUOTED_CAPTURE};

// The coarse call shape: call name, quoted name argument (slots 1 and 2),
// comma, raw value text (slot 3), closing parenthesis, terminator. The
// leading \b keeps identifiers like `xpref` from matching on their tail.
static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:pref|user_pref|sticky_pref)\s*\(\s*{QUOTED_CAPTURE}\s*,((?s:.*?))\)\s*;"
    ))
    .unwrap()
});

// Value classification, in priority order: string, boolean, integer.
static STRING_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\s*{QUOTED_CAPTURE}\s*$")).unwrap());
static BOOL_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(true|false)\s*$").unwrap());
static INT_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(-?\d+)\s*$").unwrap());

/// Extracts every declaration in `text` into `prefs` with the given state.
///
/// Re-declared names overwrite the prior record, so within one call the last
/// occurrence wins; across calls the caller's pass order decides precedence.
pub fn extract_into(prefs: &mut PrefMap, text: &str, state: DeclState) {
    for caps in CALL.captures_iter(text) {
        let name = literal::unescape(literal::captured_inner(&caps, 1, 2));
        let raw_value = caps.get(3).map(|m| m.as_str()).unwrap_or("");

        let (value, broken) = classify_value(raw_value);
        prefs.insert(
            name,
            PrefRecord {
                value,
                state,
                broken,
            },
        );
    }
}

/// Classifies a raw value argument.
///
/// Returns the normalized value text and whether classification failed.
/// String values are wrapped in a canonical double-quote pair for uniform
/// comparison; their inner text (escapes included) is kept verbatim.
fn classify_value(raw: &str) -> (String, bool) {
    if let Some(caps) = STRING_VALUE.captures(raw) {
        let inner = literal::captured_inner(&caps, 1, 2);
        return (format!("\"{inner}\""), false);
    }
    if let Some(caps) = BOOL_VALUE.captures(raw) {
        return (caps[1].to_string(), false);
    }
    if let Some(caps) = INT_VALUE.captures(raw) {
        return (caps[1].to_string(), false);
    }
    (raw.to_string(), true)
}
