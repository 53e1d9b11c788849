//! Encode/decode round-trip coverage.
//!
//! The guarantee is scoped to the minimal field set: id, first/last name,
//! birth and death dates, and parents survive a full round trip exactly.
//! Cosmetic fields (notes, sources) may be reshaped by the single-line
//! note flattening and are checked separately where exact.

use fanchart_core::Person;
use fanchart_gedcom::{decode, encode};
use proptest::prelude::*;

fn minimal(id: &str, first: &str, last: &str, birth: &str, death: &str) -> Person {
    let mut p = Person::new(id);
    p.first_name = first.into();
    p.last_name = last.into();
    p.birth_date = birth.into();
    p.death_date = death.into();
    p
}

fn sorted_by_id(mut people: Vec<Person>) -> Vec<Person> {
    people.sort_by(|a, b| a.id.cmp(&b.id));
    people
}

#[test]
fn minimal_fields_round_trip() {
    let mut father = minimal("A", "Adam", "Stone", "1870", "1940");
    let mother = minimal("B", "Beth", "Stone", "1875", "1950");
    let mut child = minimal("C", "Carl", "Stone", "1900", "");
    child.parents.extend(["A".to_string(), "B".to_string()]);
    father.sex = fanchart_core::Sex::Male;

    let people = vec![father, mother, child];
    let decoded = decode(&encode(&people)).unwrap();

    for (orig, back) in sorted_by_id(people).iter().zip(sorted_by_id(decoded.people)) {
        assert_eq!(orig.id, back.id);
        assert_eq!(orig.first_name, back.first_name);
        assert_eq!(orig.last_name, back.last_name);
        assert_eq!(orig.birth_date, back.birth_date);
        assert_eq!(orig.death_date, back.death_date);
        assert_eq!(orig.parents, back.parents);
    }
}

#[test]
fn round_trip_restores_marriage_details() {
    let mut father = minimal("A", "Pa", "X", "", "");
    father.spouses.push(fanchart_core::Spouse {
        spouse_id: "B".into(),
        marriage_date: "1920".into(),
        marriage_place: "Lyon".into(),
        divorce_date: String::new(),
    });
    let mother = minimal("B", "Ma", "X", "", "");
    let mut child = minimal("C", "Kid", "X", "", "");
    child.parents.extend(["A".to_string(), "B".to_string()]);

    let decoded = decode(&encode(&[father, mother, child])).unwrap();
    let back_father = decoded.people.iter().find(|p| p.id == "A").unwrap();
    assert_eq!(back_father.spouses.len(), 1);
    assert_eq!(back_father.spouses[0].marriage_date, "1920");
    assert_eq!(back_father.spouses[0].marriage_place, "Lyon");
}

#[test]
fn round_trip_rederives_siblings() {
    let mut c1 = minimal("C1", "Kid", "One", "", "");
    c1.parents.extend(["A".to_string(), "B".to_string()]);
    let mut c2 = minimal("C2", "Kid", "Two", "", "");
    c2.parents.extend(["A".to_string(), "B".to_string()]);

    let decoded = decode(&encode(&[c1, c2])).unwrap();
    let back = decoded.people.iter().find(|p| p.id == "C1").unwrap();
    assert_eq!(back.siblings, ["C2"]);
}

proptest! {
    #[test]
    fn generated_person_sets_round_trip(
        names in proptest::collection::vec(("[A-Za-z]{1,8}", "[A-Za-z]{1,8}"), 1..8),
        dates in proptest::collection::vec("[0-9]{4}", 8),
        link_child in any::<bool>(),
    ) {
        let mut people: Vec<Person> = names
            .iter()
            .enumerate()
            .map(|(idx, (first, last))| {
                minimal(
                    &format!("I{idx}"),
                    first,
                    last,
                    &dates[idx % dates.len()],
                    "",
                )
            })
            .collect();
        if link_child && people.len() >= 3 {
            let parents = ["I0".to_string(), "I1".to_string()];
            people[2].parents.extend(parents);
        }

        let decoded = decode(&encode(&people)).unwrap();
        prop_assert_eq!(decoded.people.len(), people.len());
        for (orig, back) in sorted_by_id(people).iter().zip(sorted_by_id(decoded.people)) {
            prop_assert_eq!(&orig.id, &back.id);
            prop_assert_eq!(&orig.first_name, &back.first_name);
            prop_assert_eq!(&orig.last_name, &back.last_name);
            prop_assert_eq!(&orig.birth_date, &back.birth_date);
            prop_assert_eq!(&orig.parents, &back.parents);
        }
    }
}
