//! One layout pass: ancestor slots to renderable chart segments.

use std::f64::consts::TAU;

use fanchart_core::{ChartSettings, Person, Rgb};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::ancestry::AncestorTree;
use crate::gradient::{ChildIndex, ColorGradient};
use crate::rings::RingGeometry;
use crate::textlayout::{TextLine, layout_label};

/// Fill for slots with no person behind them.
pub const PLACEHOLDER_FILL: Rgb = Rgb::new(0xee, 0xee, 0xee);

/// One renderable wedge (or the center disc) of the chart.
///
/// Ephemeral: created fresh on each layout pass, owned by the rendering
/// step, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    /// Generation index, 0 for the center disc.
    pub generation: u32,
    /// Slot index within the generation.
    pub slot: usize,
    /// Person id occupying the slot; `None` for placeholder wedges.
    pub person_id: Option<String>,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub fill: Rgb,
    /// Text color chosen for contrast against `fill`.
    pub ink: Rgb,
    /// Wrapped label lines with their arc radii; empty for placeholders.
    pub lines: Vec<TextLine>,
}

impl ChartSegment {
    /// Placeholder wedges reserve their angular share but are only
    /// interactive as an insertion point.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.person_id.is_none()
    }
}

/// Run one full layout pass.
///
/// Pure function of its inputs; the returned list is freshly allocated and
/// complete (a consumer never sees a partially rebuilt chart). Every
/// generation covers the full circle, so the segment count is exactly
/// `2^depth - 1`.
#[must_use]
pub fn build_segments(
    people: &FxHashMap<String, Person>,
    center_id: &str,
    settings: &ChartSettings,
    overrides: &FxHashMap<String, Rgb>,
    geometry: &RingGeometry,
) -> Vec<ChartSegment> {
    let tree = AncestorTree::build(people, center_id, settings.max_generations);
    let gradient = ColorGradient::new(tree.depth() as u32);
    let children = ChildIndex::build(people);

    let mut segments = Vec::with_capacity((1usize << tree.depth()) - 1);
    for g in 0..tree.depth() {
        for (k, slot) in tree.generation(g).iter().enumerate() {
            segments.push(build_one(
                slot.as_deref(),
                g as u32,
                k,
                people,
                settings,
                overrides,
                geometry,
                &gradient,
                &children,
            ));
        }
    }

    debug!(
        segments = segments.len(),
        populated = segments.iter().filter(|s| !s.is_placeholder()).count(),
        "layout pass complete"
    );
    segments
}

#[allow(clippy::too_many_arguments)]
fn build_one(
    slot: Option<&str>,
    g: u32,
    k: usize,
    people: &FxHashMap<String, Person>,
    settings: &ChartSettings,
    overrides: &FxHashMap<String, Rgb>,
    geometry: &RingGeometry,
    gradient: &ColorGradient,
    children: &ChildIndex,
) -> ChartSegment {
    let (start_angle, end_angle) = if g == 0 {
        (0.0, TAU)
    } else {
        geometry.slot_angles(g, k)
    };
    let inner_radius = geometry.inner_radius(g);
    let outer_radius = geometry.outer_radius(g);

    let Some(person_id) = slot else {
        return ChartSegment {
            generation: g,
            slot: k,
            person_id: None,
            start_angle,
            end_angle,
            inner_radius,
            outer_radius,
            fill: PLACEHOLDER_FILL,
            ink: PLACEHOLDER_FILL.contrast_ink(),
            lines: Vec::new(),
        };
    };

    let person = people.get(person_id);
    let fill = gradient.resolve(person_id, g, overrides, children);
    let ink = fill.contrast_ink();
    let label = label_for(person, g, settings);
    let lines = if g == 0 {
        // The center disc gets a single unwrapped line through its middle.
        vec![TextLine {
            text: label,
            radius: 0.0,
        }]
    } else {
        layout_label(
            &label,
            start_angle,
            end_angle,
            inner_radius,
            outer_radius,
            settings.font_size,
            settings.line_spacing,
        )
    };

    ChartSegment {
        generation: g,
        slot: k,
        person_id: Some(person_id.to_string()),
        start_angle,
        end_angle,
        inner_radius,
        outer_radius,
        fill,
        ink,
        lines,
    }
}

/// Segment label: name, optionally decorated with dates and birth place.
///
/// A slot id with no record behind it labels "Unknown". The center disc
/// shows only the name.
fn label_for(person: Option<&Person>, g: u32, settings: &ChartSettings) -> String {
    let Some(person) = person else {
        return "Unknown".to_string();
    };
    let mut label = person.display_name();
    if label.is_empty() {
        label = "Unknown".to_string();
    }
    if g == 0 {
        return label;
    }
    if settings.show_dates {
        label.push_str(&format!(" ({} - {})", person.birth_date, person.death_date));
    }
    if settings.show_places && !person.birth_place.is_empty() {
        label.push_str(&format!(", {}", person.birth_place));
    }
    label
}
