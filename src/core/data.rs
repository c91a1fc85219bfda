use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One of the two compared inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Whether a declaration lives in active code or only inside comment syntax.
///
/// A name declared both inside a comment and in active code ends up
/// [`DeclState::Active`], because the active extraction pass runs last and
/// overwrites the earlier record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclState {
    Active,
    Inactive,
}

impl DeclState {
    /// Marker rendered next to commented-out declarations.
    pub const INACTIVE_TAG: &'static str = "[i]";

    pub fn tag(self) -> &'static str {
        match self {
            DeclState::Active => "",
            DeclState::Inactive => Self::INACTIVE_TAG,
        }
    }

    pub fn is_inactive(self) -> bool {
        matches!(self, DeclState::Inactive)
    }
}

/// One extracted preference declaration.
///
/// `value` holds the classified textual form: string values get a canonical
/// double-quote wrapper, booleans and integers are stored as the literal
/// token. When the value could not be classified, `broken` is set and
/// `value` preserves the raw text between the separating comma and the
/// closing call, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefRecord {
    pub value: String,
    pub state: DeclState,
    pub broken: bool,
}

/// Per-side result mapping. Keyed by preference name, so re-declaration
/// silently overwrites the prior record: last write wins.
pub type PrefMap = BTreeMap<String, PrefRecord>;
