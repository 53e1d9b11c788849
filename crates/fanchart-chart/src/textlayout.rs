//! Chord-fitting word wrap and stacked line placement.
//!
//! Widths are approximated, not measured: a label's width is its grapheme
//! count times a fixed per-character factor times the font size. That is
//! what the rendering surface assumes too, so "fits" is consistent across
//! the pipeline even though neither side consults real font metrics.

use unicode_segmentation::UnicodeSegmentation;

/// Average glyph width as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Fraction of the angular span reserved on each side so text does not
/// collide with the wedge borders.
pub const TEXT_INSET_FRACTION: f64 = 0.15;

/// One wrapped label line and the radius of the arc it follows.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub radius: f64,
}

/// Approximate rendered width of `text` at `font_size`.
#[must_use]
pub fn approximate_width(text: &str, font_size: f64) -> f64 {
    text.graphemes(true).count() as f64 * font_size * CHAR_WIDTH_FACTOR
}

/// Usable chord length for text in a wedge, after the border insets.
#[must_use]
pub fn effective_chord(start_angle: f64, end_angle: f64, mid_radius: f64) -> f64 {
    let span = (end_angle - start_angle).max(0.0);
    let inset = span * TEXT_INSET_FRACTION;
    ((span - 2.0 * inset) * mid_radius).max(0.0)
}

/// Greedy word wrap against an approximate chord length.
///
/// Words accumulate onto the current line until the next word would push
/// the approximate width past `chord`; the line is then closed and the
/// word starts the next one. A single word wider than the chord still
/// gets a line of its own (it is never broken mid-word). A label that
/// fits outright comes back as exactly one line.
#[must_use]
pub fn wrap_to_chord(label: &str, chord: f64, font_size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in label.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if approximate_width(&candidate, font_size) <= chord || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Radii for `line_count` lines stacked symmetrically around `mid_radius`.
///
/// Line 0 is the outermost; each following line steps inward by
/// `line_spacing`.
#[must_use]
pub fn line_radii(line_count: usize, mid_radius: f64, line_spacing: f64) -> Vec<f64> {
    if line_count == 0 {
        return Vec::new();
    }
    let total_height = (line_count - 1) as f64 * line_spacing;
    let outermost = mid_radius + total_height / 2.0;
    (0..line_count)
        .map(|idx| outermost - idx as f64 * line_spacing)
        .collect()
}

/// Wrap a label for a wedge and place each line on its arc.
#[must_use]
pub fn layout_label(
    label: &str,
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    font_size: f64,
    line_spacing: f64,
) -> Vec<TextLine> {
    let mid_radius = (inner_radius + outer_radius) / 2.0;
    let chord = effective_chord(start_angle, end_angle, mid_radius);
    let lines = wrap_to_chord(label, chord, font_size);
    let radii = line_radii(lines.len(), mid_radius, line_spacing);
    lines
        .into_iter()
        .zip(radii)
        .map(|(text, radius)| TextLine { text, radius })
        .collect()
}
