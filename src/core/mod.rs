//! Core comparison engine.
//!
//! Turns two raw preference file texts into a categorized difference report
//! in four stages:
//!
//! 1. [`segment`]: split each side into line-comment, block-comment, and
//!    active streams (skipped when comment parsing is disabled);
//! 2. [`extract`]: collect declarations from each stream into one per-side
//!    mapping, comment streams tagged inactive;
//! 3. [`compare`]: classify the sorted union of both sides' names;
//! 4. [`report`]: render the classified outcomes as an aligned text report.
//!
//! The engine is infallible by design: malformed declarations become broken
//! records, unrecognized text is ignored, and any two inputs (including
//! empty ones) produce a report.

pub mod compare;
pub mod data;
pub mod extract;
pub mod literal;
pub mod report;
pub mod segment;

pub use compare::{Category, Comparison, Outcome, compare};
pub use data::{DeclState, PrefMap, PrefRecord, Side};

/// Parses one side's text into its preference mapping.
///
/// With `comment_aware` set, the extraction passes run in fixed precedence
/// order: single-line comment content first, multi-line comment content
/// second, active code last. All three write into the same mapping, so the
/// active pass overwrites comment-pass records for names declared in both
/// places. Without `comment_aware`, the whole unmodified text is treated as
/// active; this is faster but classifies commented-out declarations as
/// active.
pub fn parse_prefs(text: &str, comment_aware: bool) -> PrefMap {
    let mut prefs = PrefMap::new();
    if comment_aware {
        let segments = segment::segment(text);
        extract::extract_into(&mut prefs, &segments.line, DeclState::Inactive);
        extract::extract_into(&mut prefs, &segments.block, DeclState::Inactive);
        extract::extract_into(&mut prefs, &segments.active, DeclState::Active);
    } else {
        extract::extract_into(&mut prefs, text, DeclState::Active);
    }
    prefs
}
