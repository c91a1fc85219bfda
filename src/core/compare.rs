//! Comparison of two per-side preference mappings.
//!
//! Every name in the sorted union of both sides is classified into exactly
//! one primary category. Broken-syntax flags are an independent axis: the
//! same entry can sit in one primary category and in either side's broken
//! set at the same time.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::data::{PrefMap, PrefRecord, Side};

/// Primary comparison outcome for one declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Same value, same state on both sides.
    Match,
    /// Same state, different values.
    ValueDiff,
    /// Declared only in B.
    MissingInA,
    /// Declared only in A.
    MissingInB,
    /// Same value, but commented out in A only.
    InactiveInA,
    /// Same value, but commented out in B only.
    InactiveInB,
    /// Different value and different state.
    Mismatched,
}

impl Category {
    /// Fixed category order used by the summary and the detail sections.
    pub const ALL: [Category; 7] = [
        Category::Match,
        Category::ValueDiff,
        Category::MissingInA,
        Category::MissingInB,
        Category::InactiveInA,
        Category::InactiveInB,
        Category::Mismatched,
    ];
}

/// One entry of the comparison result. Holds the per-side records so the
/// renderer can show values and states without going back to the mappings.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub name: String,
    pub category: Category,
    pub a: Option<PrefRecord>,
    pub b: Option<PrefRecord>,
}

impl Outcome {
    pub fn record(&self, side: Side) -> Option<&PrefRecord> {
        match side {
            Side::A => self.a.as_ref(),
            Side::B => self.b.as_ref(),
        }
    }
}

/// Classified result of comparing two sides.
#[derive(Debug)]
pub struct Comparison {
    /// One entry per name, ascending by name.
    pub outcomes: Vec<Outcome>,
    /// Unique declaration count on side A.
    pub unique_a: usize,
    /// Unique declaration count on side B.
    pub unique_b: usize,
}

impl Comparison {
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(move |o| o.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.in_category(category).count()
    }

    /// Entries whose record on the given side failed value classification.
    pub fn broken_on(&self, side: Side) -> impl Iterator<Item = &Outcome> {
        self.outcomes
            .iter()
            .filter(move |o| o.record(side).is_some_and(|r| r.broken))
    }

    pub fn broken_count(&self, side: Side) -> usize {
        self.broken_on(side).count()
    }

    /// Size of the union of both sides' names.
    pub fn total_unique(&self) -> usize {
        self.outcomes.len()
    }

    pub fn difference_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.category != Category::Match)
            .count()
    }

    pub fn has_differences(&self) -> bool {
        self.difference_count() > 0
    }
}

/// Compares two mappings into one [`Comparison`], never mutating either.
pub fn compare(a: &PrefMap, b: &PrefMap) -> Comparison {
    let names: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();

    let outcomes = names
        .into_iter()
        .map(|name| {
            let rec_a = a.get(name);
            let rec_b = b.get(name);
            Outcome {
                name: name.to_string(),
                category: classify(rec_a, rec_b),
                a: rec_a.cloned(),
                b: rec_b.cloned(),
            }
        })
        .collect();

    Comparison {
        outcomes,
        unique_a: a.len(),
        unique_b: b.len(),
    }
}

fn classify(a: Option<&PrefRecord>, b: Option<&PrefRecord>) -> Category {
    match (a, b) {
        (Some(_), None) => Category::MissingInB,
        (None, Some(_)) => Category::MissingInA,
        (Some(a), Some(b)) if a.state != b.state => {
            if a.value == b.value {
                if a.state.is_inactive() {
                    Category::InactiveInA
                } else {
                    Category::InactiveInB
                }
            } else {
                Category::Mismatched
            }
        }
        (Some(a), Some(b)) => {
            if a.value == b.value {
                Category::Match
            } else {
                Category::ValueDiff
            }
        }
        (None, None) => unreachable!("name came from the union of both sides"),
    }
}
