//! Ring geometry: radius bands and angular slots per generation.

use std::f64::consts::TAU;

/// Maps a generation index to its radius band and each slot to its angular
/// range.
///
/// Generation 0 is the center disc. For `g >= 1` the ring width grows
/// linearly with the generation (`base + (g - 1) * growth`), and each
/// generation's `2^g` slots share the full circle, so every generation
/// covers 2π regardless of how many slots are populated. Empty slots keep
/// their angular share and render as neutral placeholder wedges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Radius of the center disc.
    pub center_radius: f64,
    /// Width of the first ring.
    pub base_ring_width: f64,
    /// Extra width added per generation beyond the first ring.
    pub ring_growth: f64,
    /// Angular gap subtracted from the end of each slot, in radians.
    pub padding_angle: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            center_radius: 30.0,
            base_ring_width: 60.0,
            ring_growth: 0.0,
            padding_angle: 0.0,
        }
    }
}

impl RingGeometry {
    /// Set the center disc radius.
    #[must_use]
    pub fn with_center_radius(mut self, radius: f64) -> Self {
        self.center_radius = radius;
        self
    }

    /// Set the first ring's width.
    #[must_use]
    pub fn with_base_ring_width(mut self, width: f64) -> Self {
        self.base_ring_width = width;
        self
    }

    /// Set the per-generation width increase.
    #[must_use]
    pub fn with_ring_growth(mut self, growth: f64) -> Self {
        self.ring_growth = growth;
        self
    }

    /// Set the inter-slot padding angle in radians.
    #[must_use]
    pub fn with_padding_angle(mut self, padding: f64) -> Self {
        self.padding_angle = padding;
        self
    }

    /// Band thickness of generation `g` (the center disc radius for g = 0).
    #[must_use]
    pub fn ring_width(&self, g: u32) -> f64 {
        if g == 0 {
            self.center_radius
        } else {
            self.base_ring_width + f64::from(g - 1) * self.ring_growth
        }
    }

    /// Inner radius of generation `g`'s band (0 for the center disc).
    #[must_use]
    pub fn inner_radius(&self, g: u32) -> f64 {
        if g == 0 {
            return 0.0;
        }
        let mut radius = self.center_radius;
        for ring in 1..g {
            radius += self.ring_width(ring);
        }
        radius
    }

    /// Outer radius of generation `g`'s band.
    #[must_use]
    pub fn outer_radius(&self, g: u32) -> f64 {
        self.inner_radius(g) + self.ring_width(g)
    }

    /// Angular share of one slot at generation `g` before padding.
    ///
    /// Well defined for any `g`; the slot count is computed in floating
    /// point, so depths past the chart's practical range shrink smoothly
    /// instead of overflowing.
    #[must_use]
    pub fn slot_span(&self, g: u32) -> f64 {
        TAU / f64::from(g).exp2()
    }

    /// Start and end angle of slot `k` at generation `g`.
    ///
    /// The end angle is pulled back by the padding angle, clamped so a
    /// large padding can never invert the wedge.
    #[must_use]
    pub fn slot_angles(&self, g: u32, k: usize) -> (f64, f64) {
        let span = self.slot_span(g);
        let start = span * k as f64;
        let width = (span - self.padding_angle).max(0.0);
        (start, start + width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_tile_without_gaps() {
        let geometry = RingGeometry::default().with_ring_growth(8.0);
        for g in 0..7 {
            let outer = geometry.outer_radius(g);
            let next_inner = geometry.inner_radius(g + 1);
            assert!(
                (outer - next_inner).abs() < 1e-9,
                "ring {g} outer {outer} != ring {} inner {next_inner}",
                g + 1
            );
        }
    }

    #[test]
    fn center_disc_spans_from_origin() {
        let geometry = RingGeometry::default();
        assert_eq!(geometry.inner_radius(0), 0.0);
        assert_eq!(geometry.outer_radius(0), 30.0);
        assert_eq!(geometry.inner_radius(1), 30.0);
        assert_eq!(geometry.outer_radius(1), 90.0);
    }

    #[test]
    fn growth_widens_outer_rings() {
        let geometry = RingGeometry::default().with_ring_growth(10.0);
        assert_eq!(geometry.ring_width(1), 60.0);
        assert_eq!(geometry.ring_width(2), 70.0);
        assert_eq!(geometry.ring_width(3), 80.0);
    }

    #[test]
    fn slots_cover_the_full_circle() {
        let geometry = RingGeometry::default();
        for g in 1..=4u32 {
            let total = geometry.slot_span(g) * f64::from(1u32 << g);
            assert!((total - TAU).abs() < 1e-9);
        }
    }

    #[test]
    fn slot_span_stays_finite_at_extreme_depths() {
        let geometry = RingGeometry::default();
        for g in [32, 64, u32::MAX] {
            let span = geometry.slot_span(g);
            assert!(span.is_finite());
            assert!(span >= 0.0);
        }
        let (start, end) = geometry.slot_angles(40, 0);
        assert!(end >= start);
    }

    #[test]
    fn slot_angles_are_contiguous_without_padding() {
        let geometry = RingGeometry::default();
        let (_, end0) = geometry.slot_angles(2, 0);
        let (start1, _) = geometry.slot_angles(2, 1);
        assert!((end0 - start1).abs() < 1e-9);
    }

    #[test]
    fn padding_shrinks_the_wedge() {
        let geometry = RingGeometry::default().with_padding_angle(0.05);
        let (start, end) = geometry.slot_angles(3, 2);
        assert!((end - start) < geometry.slot_span(3));
        assert!(end > start);
    }

    #[test]
    fn oversized_padding_clamps_to_zero_width() {
        let geometry = RingGeometry::default().with_padding_angle(10.0);
        let (start, end) = geometry.slot_angles(3, 0);
        assert_eq!(start, end);
    }
}
