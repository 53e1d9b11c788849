//! Fixed-depth binary ancestor index.

use fanchart_core::Person;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A complete binary tree of ancestor slots rooted at one person.
///
/// Generation `g` holds `2^g` slots; slot `k` of generation `g` expands
/// into slots `2k` (father) and `2k + 1` (mother) of generation `g + 1`.
/// A slot carries the *declared* parent id even when no record exists for
/// it; such slots simply never expand further. There is no cycle
/// detection: expansion is strictly depth-bounded, so a self-referential
/// graph cannot loop, but a person can appear in several slots.
///
/// Rebuilt from scratch whenever the person set, the root, or the depth
/// changes; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorTree {
    generations: Vec<Vec<Option<String>>>,
}

impl AncestorTree {
    /// Shallowest usable depth.
    pub const MIN_DEPTH: u32 = 1;
    /// Deepest supported depth (8 generations, 255 slots).
    pub const MAX_DEPTH: u32 = 8;

    /// Build the index for `root_id` down to `depth` generations.
    ///
    /// `depth` is clamped to `MIN_DEPTH..=MAX_DEPTH` rather than rejected.
    #[must_use]
    pub fn build(people: &FxHashMap<String, Person>, root_id: &str, depth: u32) -> Self {
        let depth = depth.clamp(Self::MIN_DEPTH, Self::MAX_DEPTH) as usize;
        let mut generations: Vec<Vec<Option<String>>> =
            (0..depth).map(|g| vec![None; 1 << g]).collect();
        generations[0][0] = Some(root_id.to_string());

        for g in 0..depth - 1 {
            for k in 0..1usize << g {
                let Some(slot_id) = generations[g][k].clone() else {
                    continue;
                };
                let Some(person) = people.get(&slot_id) else {
                    continue;
                };
                let father = person.father().map(str::to_string);
                let mother = person.mother().map(str::to_string);
                if father.is_some() {
                    generations[g + 1][2 * k] = father;
                }
                if mother.is_some() {
                    generations[g + 1][2 * k + 1] = mother;
                }
            }
        }

        let tree = Self { generations };
        debug!(
            depth,
            populated = tree.populated_count(),
            "built ancestor index"
        );
        tree
    }

    /// Number of generations in the index.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.generations.len()
    }

    /// All slots of one generation.
    #[must_use]
    pub fn generation(&self, g: usize) -> &[Option<String>] {
        &self.generations[g]
    }

    /// The person id at slot `(g, k)`, if populated.
    #[must_use]
    pub fn slot(&self, g: usize, k: usize) -> Option<&str> {
        self.generations
            .get(g)
            .and_then(|slots| slots.get(k))
            .and_then(|slot| slot.as_deref())
    }

    /// Count of populated slots across all generations.
    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.generations
            .iter()
            .map(|slots| slots.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people_with_parents(entries: &[(&str, &[&str])]) -> FxHashMap<String, Person> {
        let mut map = FxHashMap::default();
        for (id, parents) in entries {
            let mut p = Person::new(*id);
            p.parents.extend(parents.iter().map(|s| s.to_string()));
            map.insert(id.to_string(), p);
        }
        map
    }

    #[test]
    fn root_with_two_parents() {
        let people = people_with_parents(&[("R", &["A", "B"]), ("A", &[]), ("B", &[])]);
        let tree = AncestorTree::build(&people, "R", 2);
        assert_eq!(tree.slot(0, 0), Some("R"));
        assert_eq!(tree.slot(1, 0), Some("A"));
        assert_eq!(tree.slot(1, 1), Some("B"));
        assert_eq!(tree.populated_count(), 3);
    }

    #[test]
    fn depth_one_keeps_only_the_root() {
        let people = people_with_parents(&[("R", &["A", "B"])]);
        let tree = AncestorTree::build(&people, "R", 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.populated_count(), 1);
    }

    #[test]
    fn depth_is_clamped() {
        let people = people_with_parents(&[("R", &[])]);
        assert_eq!(AncestorTree::build(&people, "R", 0).depth(), 1);
        assert_eq!(AncestorTree::build(&people, "R", 99).depth(), 8);
    }

    #[test]
    fn mother_only_fills_the_odd_slot() {
        // Slot 0 is the father by definition; a single declared parent
        // occupies it even if that parent is in fact the mother record.
        let people = people_with_parents(&[("R", &["M"]), ("M", &[])]);
        let tree = AncestorTree::build(&people, "R", 2);
        assert_eq!(tree.slot(1, 0), Some("M"));
        assert_eq!(tree.slot(1, 1), None);
    }

    #[test]
    fn unknown_parent_id_is_kept_but_not_expanded() {
        let people = people_with_parents(&[("R", &["GHOST"])]);
        let tree = AncestorTree::build(&people, "R", 3);
        assert_eq!(tree.slot(1, 0), Some("GHOST"));
        // No record for GHOST, so generation 2 stays empty.
        assert_eq!(tree.generation(2).iter().flatten().count(), 0);
    }

    #[test]
    fn parent_child_slot_invariant() {
        let people = people_with_parents(&[
            ("R", &["A", "B"]),
            ("A", &["C", "D"]),
            ("B", &["E"]),
            ("C", &[]),
            ("D", &[]),
            ("E", &[]),
        ]);
        let tree = AncestorTree::build(&people, "R", 3);
        for g in 0..tree.depth() - 1 {
            for k in 0..tree.generation(g).len() {
                let Some(id) = tree.slot(g, k) else { continue };
                let Some(person) = people.get(id) else { continue };
                assert_eq!(tree.slot(g + 1, 2 * k), person.father());
                assert_eq!(tree.slot(g + 1, 2 * k + 1), person.mother());
            }
        }
    }

    #[test]
    fn self_referential_graph_duplicates_without_looping() {
        let people = people_with_parents(&[("R", &["R"])]);
        let tree = AncestorTree::build(&people, "R", 4);
        // Bounded by depth: R simply repeats down the father line.
        assert_eq!(tree.slot(3, 0), Some("R"));
        assert_eq!(tree.populated_count(), 4);
    }
}
