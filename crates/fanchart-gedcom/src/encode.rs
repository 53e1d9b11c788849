//! GEDCOM encoder.
//!
//! The person model has no family records of its own, so export infers one
//! family per unique parent pair: every person with at least one parent
//! contributes a key (the sorted parent ids), and each distinct key becomes
//! one `FAM` record listing all people whose key matches as children. The
//! husband/wife lines keep the declared father-then-mother order; sorting
//! only affects the grouping key and the generated family id.

use fanchart_core::Person;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use std::fmt::Write as _;

/// Encode people as GEDCOM text.
///
/// Always produces output; an empty slice yields just the header and
/// trailer. Decoding the result reproduces each person's id, names,
/// birth/death dates, and parents exactly.
#[must_use]
pub fn encode(people: &[Person]) -> String {
    let mut out = String::from("0 HEAD\n1 CHAR UTF-8\n1 GEDC\n2 VERS 7.0\n");

    for person in people {
        encode_individual(&mut out, person);
    }
    encode_families(&mut out, people);

    out.push_str("0 TRLR\n");
    debug!(people = people.len(), bytes = out.len(), "encoded GEDCOM output");
    out
}

fn encode_individual(out: &mut String, person: &Person) {
    let _ = writeln!(out, "0 @{}@ INDI", person.id);
    let _ = writeln!(out, "1 NAME {} /{}/", person.first_name, person.last_name);
    if let Some(tag) = person.sex.as_gedcom() {
        let _ = writeln!(out, "1 SEX {tag}");
    }
    encode_event(out, "BIRT", &person.birth_date, &person.birth_place);
    encode_event(out, "DEAT", &person.death_date, &person.death_place);
    if !person.occupation.is_empty() {
        let _ = writeln!(out, "1 OCCU {}", person.occupation);
    }
    for source in &person.sources {
        let _ = writeln!(out, "1 SOUR {source}");
    }
    if !person.notes.is_empty() {
        // Notes flatten to a single line; embedded newlines would otherwise
        // break the line grammar.
        let _ = writeln!(out, "1 NOTE {}", person.notes.replace('\n', " "));
    }
    if !person.parents.is_empty() {
        let _ = writeln!(out, "1 FAMC @{}@", family_id(person));
    }
}

/// Emit an event block when either the date or the place is present.
fn encode_event(out: &mut String, tag: &str, date: &str, place: &str) {
    if date.is_empty() && place.is_empty() {
        return;
    }
    let _ = writeln!(out, "1 {tag}");
    if !date.is_empty() {
        let _ = writeln!(out, "2 DATE {date}");
    }
    if !place.is_empty() {
        let _ = writeln!(out, "2 PLAC {place}");
    }
}

fn encode_families(out: &mut String, people: &[Person]) {
    let by_id: FxHashMap<&str, &Person> = people.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut emitted: FxHashSet<String> = FxHashSet::default();

    for person in people {
        if person.parents.is_empty() {
            continue;
        }
        let key = family_key(person);
        if !emitted.insert(key.clone()) {
            continue;
        }

        let _ = writeln!(out, "0 @F{key}@ FAM");
        let husband = person.parents.first();
        let wife = person.parents.get(1);
        if let Some(id) = husband {
            let _ = writeln!(out, "1 HUSB @{id}@");
        }
        if let Some(id) = wife {
            let _ = writeln!(out, "1 WIFE @{id}@");
        }

        // Marriage details live on the spouses' own records; recover them
        // from the husband's entry for this wife when both are known.
        if let (Some(husband_id), Some(wife_id)) = (husband, wife)
            && let Some(husband_record) = by_id.get(husband_id.as_str())
            && let Some(spouse) = husband_record
                .spouses
                .iter()
                .find(|s| s.spouse_id == *wife_id)
        {
            if !spouse.marriage_date.is_empty() || !spouse.marriage_place.is_empty() {
                out.push_str("1 MARR\n");
                if !spouse.marriage_date.is_empty() {
                    let _ = writeln!(out, "2 DATE {}", spouse.marriage_date);
                }
                if !spouse.marriage_place.is_empty() {
                    let _ = writeln!(out, "2 PLAC {}", spouse.marriage_place);
                }
            }
            if !spouse.divorce_date.is_empty() {
                out.push_str("1 DIV\n");
                let _ = writeln!(out, "2 DATE {}", spouse.divorce_date);
            }
        }

        for child in people.iter().filter(|p| !p.parents.is_empty() && family_key(p) == key) {
            let _ = writeln!(out, "1 CHIL @{}@", child.id);
        }
    }
}

/// Grouping key: parent ids sorted and joined. A sorted *copy* — the
/// declared father/mother order on the record is left untouched.
fn family_key(person: &Person) -> String {
    let mut ids: Vec<&str> = person.parents.iter().map(String::as_str).collect();
    ids.sort_unstable();
    ids.join("_")
}

fn family_id(person: &Person) -> String {
    format!("F{}", family_key(person))
}
