//! End-to-end pass: GEDCOM text in, renderable segments out.

use fanchart_chart::{RingGeometry, build_segments};
use fanchart_core::ChartSettings;
use rustc_hash::FxHashMap;

const SAMPLE: &str = "0 HEAD\n\
                      0 @R@ INDI\n1 NAME Root /Person/\n1 BIRT\n2 DATE 1950\n\
                      0 @A@ INDI\n1 NAME Alan /Elder/\n1 BIRT\n2 DATE 1920\n\
                      0 @B@ INDI\n1 NAME Bea /Elder/\n\
                      0 @F1@ FAM\n1 HUSB @A@\n1 WIFE @B@\n1 CHIL @R@\n\
                      0 TRLR\n";

#[test]
fn decoded_tree_lays_out_as_a_chart() {
    let outcome = fanchart_gedcom::decode(SAMPLE).unwrap();
    assert!(outcome.warnings.is_empty());
    let people: FxHashMap<String, _> = outcome
        .people
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect();

    let settings = ChartSettings {
        max_generations: 3,
        ..ChartSettings::default()
    };
    let segments = build_segments(
        &people,
        "R",
        &settings,
        &FxHashMap::default(),
        &RingGeometry::default(),
    );

    assert_eq!(segments.len(), 7);
    let populated: Vec<_> = segments.iter().filter(|s| !s.is_placeholder()).collect();
    assert_eq!(populated.len(), 3);

    let father = segments
        .iter()
        .find(|s| s.person_id.as_deref() == Some("A"))
        .unwrap();
    assert_eq!(father.generation, 1);
    assert_eq!(father.slot, 0);
    let label: Vec<_> = father.lines.iter().map(|l| l.text.as_str()).collect();
    assert!(label.join(" ").contains("Alan Elder"));
}

#[test]
fn layout_pass_is_deterministic() {
    let outcome = fanchart_gedcom::decode(SAMPLE).unwrap();
    let people: FxHashMap<String, _> = outcome
        .people
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect();
    let settings = ChartSettings::default();
    let geometry = RingGeometry::default();

    let first = build_segments(&people, "R", &settings, &FxHashMap::default(), &geometry);
    let second = build_segments(&people, "R", &settings, &FxHashMap::default(), &geometry);
    assert_eq!(first, second);
}
