//! Person and family-link records.
//!
//! All event fields are free text as entered or imported; no date parsing
//! happens here. `parents` carries at most two ids with a fixed meaning:
//! slot 0 is the father, slot 1 the mother, and the codec preserves that
//! order in both directions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Recorded sex of a person.
///
/// Serializes as the GEDCOM letter (`"M"`, `"F"`, `"X"`) or the empty
/// string, matching the persisted project format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    /// Male (`M`).
    Male,
    /// Female (`F`).
    Female,
    /// Other (`X`).
    Other,
    /// Not recorded.
    #[default]
    Unknown,
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        Self::from_gedcom(&value)
    }
}

impl From<Sex> for String {
    fn from(value: Sex) -> Self {
        value.as_gedcom().unwrap_or("").to_string()
    }
}

impl Sex {
    /// Parse a GEDCOM `SEX` value. Anything unrecognized maps to `Unknown`.
    #[must_use]
    pub fn from_gedcom(value: &str) -> Self {
        match value.trim() {
            "M" => Self::Male,
            "F" => Self::Female,
            "X" => Self::Other,
            _ => Self::Unknown,
        }
    }

    /// GEDCOM tag value, or `None` when not recorded.
    #[must_use]
    pub const fn as_gedcom(self) -> Option<&'static str> {
        match self {
            Self::Male => Some("M"),
            Self::Female => Some("F"),
            Self::Other => Some("X"),
            Self::Unknown => None,
        }
    }
}

/// One marriage entry on a person.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spouse {
    /// Id of the other spouse.
    pub spouse_id: String,
    /// Marriage date, free text.
    pub marriage_date: String,
    /// Marriage place, free text.
    pub marriage_place: String,
    /// Divorce date, free text; empty when the marriage did not end.
    pub divorce_date: String,
}

/// One genealogical record.
///
/// Field names serialize in camelCase so project files written by earlier
/// versions of the application load unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    /// Unique id.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub birth_place: String,
    pub death_date: String,
    pub death_place: String,
    pub sex: Sex,
    pub occupation: String,
    /// Free-form notes, possibly multi-line.
    pub notes: String,
    /// Source citations, in document order.
    pub sources: Vec<String>,
    /// At most two parent ids: slot 0 father, slot 1 mother.
    pub parents: SmallVec<[String; 2]>,
    pub spouses: Vec<Spouse>,
    /// Derived from family groupings; not authoritative.
    pub siblings: Vec<String>,
}

impl Person {
    /// Create an empty record with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// "First Last", trimmed when either part is empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Father id (parent slot 0), if declared.
    #[must_use]
    pub fn father(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }

    /// Mother id (parent slot 1), if declared.
    #[must_use]
    pub fn mother(&self) -> Option<&str> {
        self.parents.get(1).map(String::as_str)
    }
}
