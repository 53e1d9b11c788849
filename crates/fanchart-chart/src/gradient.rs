//! Generation gradient and per-person color override resolution.

use std::collections::VecDeque;

use fanchart_core::{Person, Rgb};
use rustc_hash::{FxHashMap, FxHashSet};

/// Reverse parent index: person id to the ids of their children.
///
/// Built once per layout pass; children lists are sorted so override
/// resolution is deterministic regardless of map iteration order.
#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    children: FxHashMap<String, Vec<String>>,
}

impl ChildIndex {
    /// Build the index from the person set.
    #[must_use]
    pub fn build(people: &FxHashMap<String, Person>) -> Self {
        let mut children: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for person in people.values() {
            for parent in &person.parents {
                children.entry(parent.clone()).or_default().push(person.id.clone());
            }
        }
        for list in children.values_mut() {
            list.sort_unstable();
        }
        Self { children }
    }

    /// Children of `person_id`, possibly empty.
    #[must_use]
    pub fn children_of(&self, person_id: &str) -> &[String] {
        self.children.get(person_id).map_or(&[], Vec::as_slice)
    }
}

/// Linear color scale over generations, dark at the center and light at
/// the rim, with per-person overrides.
///
/// Override resolution for a slot: a color assigned directly to the person
/// wins verbatim. Otherwise the nearest descendant (breadth-first over the
/// child index) carrying an override contributes its color faded toward
/// white by `hops / (generations - 1)`, so close descendants tint their
/// ancestors strongly and distant ones barely at all. With no override in
/// reach, the plain generation gradient applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorGradient {
    /// Color of generation 0.
    pub start: Rgb,
    /// Color of the outermost generation.
    pub end: Rgb,
    /// Number of generations the scale spans.
    pub generations: u32,
}

impl ColorGradient {
    /// Dark green to light green, the application's default scale.
    #[must_use]
    pub fn new(generations: u32) -> Self {
        Self {
            start: Rgb::new(0x00, 0x22, 0x00),
            end: Rgb::new(0x99, 0xff, 0x99),
            generations: generations.max(1),
        }
    }

    /// Use a custom start/end range.
    #[must_use]
    pub fn with_range(mut self, start: Rgb, end: Rgb) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Plain gradient color for generation `g`.
    #[must_use]
    pub fn generation_color(&self, g: u32) -> Rgb {
        if self.generations <= 1 {
            return self.start;
        }
        let t = f64::from(g) / f64::from(self.generations - 1);
        self.start.lerp(self.end, t)
    }

    /// Resolve the fill color for `person_id` at generation `g`.
    #[must_use]
    pub fn resolve(
        &self,
        person_id: &str,
        g: u32,
        overrides: &FxHashMap<String, Rgb>,
        children: &ChildIndex,
    ) -> Rgb {
        if let Some(color) = overrides.get(person_id) {
            return *color;
        }
        if let Some((color, hops)) = self.nearest_descendant_override(person_id, overrides, children)
        {
            let reach = f64::from(self.generations.max(2) - 1);
            return color.lerp(Rgb::WHITE, f64::from(hops) / reach);
        }
        self.generation_color(g)
    }

    /// Breadth-first search down the child index for the closest override.
    fn nearest_descendant_override(
        &self,
        person_id: &str,
        overrides: &FxHashMap<String, Rgb>,
        children: &ChildIndex,
    ) -> Option<(Rgb, u32)> {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut queue: VecDeque<(&str, u32)> = VecDeque::new();
        visited.insert(person_id);
        queue.push_back((person_id, 0));

        while let Some((id, hops)) = queue.pop_front() {
            for child in children.children_of(id) {
                if !visited.insert(child) {
                    continue;
                }
                if let Some(color) = overrides.get(child) {
                    return Some((*color, hops + 1));
                }
                queue.push_back((child, hops + 1));
            }
        }
        None
    }
}
