//! Persisted project state and chart settings.
//!
//! The core never touches storage itself; an external collaborator hands a
//! [`ProjectState`] in and takes one back out. Settings travel through the
//! layout pass as an explicit parameter rather than ambient globals.

use std::collections::HashMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Rgb;
use crate::person::Person;

/// The `{ people, colors }` shape an external persistence layer reads and
/// writes. Color overrides are stored as hex strings keyed by person id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectState {
    pub people: Vec<Person>,
    pub colors: HashMap<String, String>,
}

impl ProjectState {
    /// Typed color overrides, parsed once at the persistence boundary.
    ///
    /// Entries that do not parse as `#rrggbb` are dropped with a warning;
    /// a bad color in a saved file never poisons the layout pass.
    #[must_use]
    pub fn color_overrides(&self) -> FxHashMap<String, Rgb> {
        let mut overrides = FxHashMap::default();
        for (person_id, value) in &self.colors {
            match Rgb::from_hex(value) {
                Some(color) => {
                    overrides.insert(person_id.clone(), color);
                }
                None => {
                    warn!(person_id, value, "ignoring unparseable color override");
                }
            }
        }
        overrides
    }
}

/// Chart configuration for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSettings {
    /// Ancestor generations to render, clamped to 1..=8 by the indexer.
    pub max_generations: u32,
    /// Label font size in pixels.
    pub font_size: f64,
    /// Radial distance between stacked label lines.
    pub line_spacing: f64,
    /// Append birth/death dates to segment labels.
    pub show_dates: bool,
    /// Append the birth place to segment labels.
    pub show_places: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            max_generations: 8,
            font_size: 8.0,
            line_spacing: 10.0,
            show_dates: true,
            show_places: false,
        }
    }
}
