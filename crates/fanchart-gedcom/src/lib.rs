#![forbid(unsafe_code)]

//! GEDCOM import/export for fanchart.
//!
//! The interchange format is line oriented: `<level> <tag-or-id> [args...]`.
//! Level-0 lines open top-level records (`INDI`, `FAM`) identified by a
//! bracketed `@id@` token; deeper levels attach data to the open record.
//!
//! - [`decode`] - parse text into [`Person`](fanchart_core::Person) records,
//!   resolving family groupings into parent/spouse/sibling links
//! - [`encode`] - write records back out, inferring one family per unique
//!   parent pair
//!
//! Parsing is permissive: unknown tags are ignored and malformed lines are
//! skipped, each reported as a [`DecodeWarning`] rather than a failure. Only
//! input that does not look like GEDCOM at all ([`DecodeError::InvalidFormat`])
//! or that yields zero people ([`DecodeError::EmptyResult`]) fails the call.
//!
//! # Example
//! ```
//! let outcome = fanchart_gedcom::decode(
//!     "0 HEAD\n0 @I1@ INDI\n1 NAME John /Doe/\n1 BIRT\n2 DATE 1900\n0 TRLR\n",
//! )
//! .unwrap();
//! assert_eq!(outcome.people.len(), 1);
//! assert_eq!(outcome.people[0].first_name, "John");
//! assert_eq!(outcome.people[0].birth_date, "1900");
//! ```

pub mod decode;
pub mod encode;

pub use decode::{DecodeError, DecodeOutcome, DecodeWarning, DecodeWarningCode, decode};
pub use encode::encode;
