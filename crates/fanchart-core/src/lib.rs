#![forbid(unsafe_code)]

//! Core data model for fanchart.
//!
//! This crate provides the shared types the codec and the chart pipeline
//! operate on:
//! - [`Person`] - one genealogical record with names, events, and links
//! - [`Sex`] - recorded sex (`M`/`F`/`X` or unknown)
//! - [`Spouse`] - one marriage entry on a person
//! - [`Rgb`] - typed 8-bit-per-channel color, constructed once at the
//!   data-entry boundary (no runtime color-string sniffing)
//! - [`ProjectState`] - the persisted `{ people, colors }` shape
//! - [`ChartSettings`] - per-pass chart configuration
//!
//! # Example
//! ```
//! use fanchart_core::{Person, Rgb};
//!
//! let mut person = Person::new("I1");
//! person.first_name = "John".into();
//! person.last_name = "Doe".into();
//! assert_eq!(person.display_name(), "John Doe");
//!
//! let fill = Rgb::from_hex("#002200").unwrap();
//! assert_eq!(fill.to_hex(), "#002200");
//! ```

pub mod color;
pub mod person;
pub mod project;

pub use color::Rgb;
pub use person::{Person, Sex, Spouse};
pub use project::{ChartSettings, ProjectState};
