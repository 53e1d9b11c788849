//! Stateful line-by-line GEDCOM decoder.
//!
//! The decoder keeps one open record accumulator at a time. A level-0 line
//! with a bracketed `@id@` token flushes the previous accumulator into the
//! id-keyed map and opens a new one; every other line attaches data to the
//! open record. Family records are held back until the end of input, then a
//! linking pass turns them into parent, spouse, and sibling links on the
//! person records and discards them.
//!
//! Ambiguous `DATE`/`PLAC` lines (no enclosing `BIRT`/`DEAT` block) keep the
//! historical assignment: the first one seen goes to birth, later ones to
//! death. Files produced by other tools rely on this, so it is preserved
//! rather than fixed.

use fanchart_core::{Person, Sex, Spouse};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse GEDCOM text into person records.
///
/// People are returned in document order. Recoverable issues (malformed
/// lines, references to unknown ids) are reported as warnings inside the
/// outcome.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidFormat`] when the input contains neither a
/// level-0 `HEAD` line nor a level-0 individual record, and
/// [`DecodeError::EmptyResult`] when parsing succeeds but yields no people.
/// No partial result is returned in either case.
pub fn decode(text: &str) -> Result<DecodeOutcome, DecodeError> {
    if !looks_like_gedcom(text) {
        return Err(DecodeError::InvalidFormat);
    }

    let mut decoder = Decoder::default();
    decoder.run(text);

    if decoder.people.is_empty() {
        return Err(DecodeError::EmptyResult);
    }

    let Decoder {
        mut people,
        order,
        warnings,
        ..
    } = decoder;
    let people: Vec<Person> = order.into_iter().filter_map(|id| people.remove(&id)).collect();
    info!(
        people = people.len(),
        warnings = warnings.len(),
        "decoded GEDCOM input"
    );
    Ok(DecodeOutcome { people, warnings })
}

/// Result of a successful decode.
#[derive(Debug, Clone)]
pub struct DecodeOutcome {
    /// Decoded people, in document order.
    pub people: Vec<Person>,
    /// Non-fatal issues encountered while parsing and linking.
    pub warnings: Vec<DecodeWarning>,
}

/// Fatal decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input has neither a header marker nor an individual record.
    InvalidFormat,
    /// The input parsed but contained no individual records.
    EmptyResult,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => {
                write!(f, "input does not look like GEDCOM (no HEAD or INDI records)")
            }
            Self::EmptyResult => write!(f, "GEDCOM input contained no individual records"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Machine-readable warning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarningCode {
    /// A line did not match the `<level> <tag> [args...]` grammar.
    MalformedLine,
    /// A family referenced a person id with no record.
    UnresolvedReference,
}

impl DecodeWarningCode {
    /// Stable identifier for logs and UI filtering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedLine => "gedcom/warning/malformed-line",
            Self::UnresolvedReference => "gedcom/warning/unresolved-reference",
        }
    }
}

/// One recoverable issue found while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeWarning {
    pub code: DecodeWarningCode,
    pub message: String,
    /// 1-based source line, when the issue maps to a single line.
    pub line: Option<usize>,
}

impl DecodeWarning {
    fn new(code: DecodeWarningCode, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            code,
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {}): {}", self.code.as_str(), line, self.message),
            None => write!(f, "{}: {}", self.code.as_str(), self.message),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal decoder
// ---------------------------------------------------------------------------

/// Family grouping, kept only until linking.
#[derive(Debug, Clone, Default)]
struct Family {
    id: String,
    husband: Option<String>,
    wife: Option<String>,
    children: Vec<String>,
    marriage_date: String,
    marriage_place: String,
    divorce_date: String,
}

/// Subsection context inside an individual record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndiSection {
    General,
    Birth,
    Death,
}

/// Subsection context inside a family record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FamSection {
    General,
    Marriage,
    Divorce,
}

#[derive(Debug)]
enum OpenRecord {
    Individual { person: Person, section: IndiSection },
    Family { family: Family, section: FamSection },
}

#[derive(Debug, Default)]
struct Decoder {
    people: FxHashMap<String, Person>,
    /// Insertion order of person ids, for document-order output.
    order: Vec<String>,
    families: Vec<Family>,
    warnings: Vec<DecodeWarning>,
    current: Option<OpenRecord>,
}

impl Decoder {
    fn run(&mut self, text: &str) {
        for (idx, raw) in text.lines().enumerate() {
            self.line(idx + 1, raw);
        }
        self.flush();
        self.link();
    }

    fn line(&mut self, number: usize, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        let (level_token, rest) = split_token(trimmed);
        let Ok(level) = level_token.parse::<u32>() else {
            self.warn_malformed(number, "line does not start with an integer level");
            return;
        };
        if rest.is_empty() {
            self.warn_malformed(number, "line has a level but no tag");
            return;
        }
        let (tag, value) = split_token(rest);

        if level == 0 {
            self.open_record(tag, value);
            return;
        }

        match &mut self.current {
            Some(OpenRecord::Individual { person, section }) => {
                individual_line(person, section, level, tag, value);
            }
            Some(OpenRecord::Family { family, section }) => {
                family_line(family, section, level, tag, value);
            }
            // Subordinate lines of records we do not track (HEAD, SUBM, ...).
            None => {}
        }
    }

    fn open_record(&mut self, tag: &str, value: &str) {
        self.flush();
        let Some(id) = tag.strip_prefix('@').and_then(|t| t.strip_suffix('@')) else {
            // Plain level-0 markers (HEAD, TRLR) carry no data of their own.
            return;
        };
        let record_type = value.split_whitespace().next().unwrap_or("");
        match record_type {
            "INDI" => {
                self.current = Some(OpenRecord::Individual {
                    person: Person::new(id),
                    section: IndiSection::General,
                });
            }
            "FAM" => {
                self.current = Some(OpenRecord::Family {
                    family: Family {
                        id: id.to_string(),
                        ..Family::default()
                    },
                    section: FamSection::General,
                });
            }
            // Other record kinds (SOUR, SUBM, OBJE, ...) are skipped wholesale.
            _ => {}
        }
    }

    fn flush(&mut self) {
        match self.current.take() {
            Some(OpenRecord::Individual { person, .. }) => {
                debug!(id = %person.id, "finished individual record");
                let id = person.id.clone();
                if self.people.insert(id.clone(), person).is_none() {
                    self.order.push(id);
                }
            }
            Some(OpenRecord::Family { family, .. }) => {
                debug!(id = %family.id, children = family.children.len(), "finished family record");
                self.families.push(family);
            }
            None => {}
        }
    }

    /// Linking pass: fold family records into links on the person records.
    fn link(&mut self) {
        let families = std::mem::take(&mut self.families);
        for family in &families {
            for referenced in family
                .husband
                .iter()
                .chain(family.wife.iter())
                .chain(family.children.iter())
            {
                if !self.people.contains_key(referenced) {
                    self.warnings.push(DecodeWarning::new(
                        DecodeWarningCode::UnresolvedReference,
                        format!("family {} references unknown id {}", family.id, referenced),
                        None,
                    ));
                }
            }

            // Parent ids are data and are kept even when the parent's own
            // record is absent; only actions that need the record are skipped.
            for child_id in &family.children {
                let Some(child) = self.people.get_mut(child_id) else {
                    continue;
                };
                child.parents.clear();
                if let Some(husband) = &family.husband {
                    child.parents.push(husband.clone());
                }
                if let Some(wife) = &family.wife {
                    child.parents.push(wife.clone());
                }
                // Last family wins when a person appears in several child
                // lists; a child has at most one parent family in this model.
                child.siblings = family
                    .children
                    .iter()
                    .filter(|id| *id != child_id)
                    .cloned()
                    .collect();
            }

            if let (Some(husband), Some(wife)) = (&family.husband, &family.wife)
                && self.people.contains_key(husband)
                && self.people.contains_key(wife)
            {
                let entry = |other: &str| Spouse {
                    spouse_id: other.to_string(),
                    marriage_date: family.marriage_date.clone(),
                    marriage_place: family.marriage_place.clone(),
                    divorce_date: family.divorce_date.clone(),
                };
                if let Some(person) = self.people.get_mut(husband) {
                    person.spouses.push(entry(wife));
                }
                if let Some(person) = self.people.get_mut(wife) {
                    person.spouses.push(entry(husband));
                }
            }
        }
    }

    fn warn_malformed(&mut self, line: usize, message: &str) {
        debug!(line, message, "skipping malformed line");
        self.warnings.push(DecodeWarning::new(
            DecodeWarningCode::MalformedLine,
            message,
            Some(line),
        ));
    }
}

fn individual_line(person: &mut Person, section: &mut IndiSection, level: u32, tag: &str, value: &str) {
    // A level-0/1 tag other than DATE/PLAC closes any open event block.
    if level <= 1 && !matches!(tag, "DATE" | "PLAC") {
        *section = match tag {
            "BIRT" => IndiSection::Birth,
            "DEAT" => IndiSection::Death,
            _ => IndiSection::General,
        };
    }

    match tag {
        "NAME" => {
            let parts: Vec<&str> = value.split('/').collect();
            if parts.len() >= 2 {
                person.first_name = parts[0].trim().to_string();
                person.last_name = parts[1].trim().to_string();
            } else {
                person.first_name = value.to_string();
            }
        }
        "GIVN" => person.first_name = value.to_string(),
        "SURN" => person.last_name = value.to_string(),
        "SEX" => person.sex = Sex::from_gedcom(value),
        "OCCU" => person.occupation = value.to_string(),
        "DATE" => match *section {
            IndiSection::Birth => person.birth_date = value.to_string(),
            IndiSection::Death => person.death_date = value.to_string(),
            // No enclosing block: first date goes to birth, later ones to
            // death. Historical behavior, kept for compatibility.
            IndiSection::General => {
                if person.birth_date.is_empty() {
                    person.birth_date = value.to_string();
                } else {
                    person.death_date = value.to_string();
                }
            }
        },
        "PLAC" => match *section {
            IndiSection::Birth => person.birth_place = value.to_string(),
            IndiSection::Death => person.death_place = value.to_string(),
            IndiSection::General => {
                if person.birth_place.is_empty() {
                    person.birth_place = value.to_string();
                } else {
                    person.death_place = value.to_string();
                }
            }
        },
        "NOTE" => {
            if person.notes.is_empty() {
                person.notes = value.to_string();
            } else {
                person.notes.push('\n');
                person.notes.push_str(value);
            }
        }
        "SOUR" => person.sources.push(value.to_string()),
        // Unknown tags are ignored, not rejected.
        _ => {}
    }
}

fn family_line(family: &mut Family, section: &mut FamSection, level: u32, tag: &str, value: &str) {
    if level <= 1 && !matches!(tag, "DATE" | "PLAC") {
        *section = match tag {
            "MARR" => FamSection::Marriage,
            "DIV" => FamSection::Divorce,
            _ => FamSection::General,
        };
    }

    match tag {
        "HUSB" => family.husband = reference(value),
        "WIFE" => family.wife = reference(value),
        "CHIL" => {
            if let Some(id) = reference(value) {
                family.children.push(id);
            }
        }
        "DATE" => match *section {
            FamSection::Marriage => family.marriage_date = value.to_string(),
            FamSection::Divorce => family.divorce_date = value.to_string(),
            FamSection::General => {}
        },
        "PLAC" => {
            if *section == FamSection::Marriage {
                family.marriage_place = value.to_string();
            }
        }
        _ => {}
    }
}

/// Extract the `@id@` reference from a tag value, if present.
fn reference(value: &str) -> Option<String> {
    let token = value.split_whitespace().next()?;
    let id = token.trim_matches('@');
    if id.is_empty() { None } else { Some(id.to_string()) }
}

/// Split off the first whitespace-delimited token.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

/// Cheap pre-scan: does this text contain a header marker or at least one
/// top-level individual record?
fn looks_like_gedcom(text: &str) -> bool {
    for raw in text.lines() {
        let (level, rest) = split_token(raw.trim());
        if level != "0" {
            continue;
        }
        let (tag, value) = split_token(rest);
        if tag == "HEAD" {
            return true;
        }
        if tag.starts_with('@') && value.split_whitespace().next() == Some("INDI") {
            return true;
        }
    }
    false
}
