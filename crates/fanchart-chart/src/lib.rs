#![forbid(unsafe_code)]

//! Radial ancestor chart layout for fanchart.
//!
//! The pipeline is a chain of pure functions:
//! - [`AncestorTree`] - fixed-depth binary index of ancestor slots
//! - [`RingGeometry`] - radius bands and angular slots per generation
//! - [`ColorGradient`] - generation gradient plus per-person overrides
//! - [`textlayout`] - chord-fitting word wrap and stacked line radii
//! - [`build_segments`] - one layout pass producing [`ChartSegment`] values
//!
//! Every pass allocates its output fresh; nothing here is mutated
//! incrementally, so a consumer never observes a partially rebuilt chart.
//!
//! # Example
//! ```
//! use fanchart_chart::{RingGeometry, build_segments};
//! use fanchart_core::{ChartSettings, Person};
//! use rustc_hash::FxHashMap;
//!
//! let mut people = FxHashMap::default();
//! people.insert("I1".to_string(), Person::new("I1"));
//!
//! let segments = build_segments(
//!     &people,
//!     "I1",
//!     &ChartSettings { max_generations: 2, ..ChartSettings::default() },
//!     &FxHashMap::default(),
//!     &RingGeometry::default(),
//! );
//! // Center disc plus two generation-1 slots.
//! assert_eq!(segments.len(), 3);
//! ```

pub mod ancestry;
pub mod gradient;
pub mod rings;
pub mod segment;
pub mod textlayout;

pub use ancestry::AncestorTree;
pub use gradient::{ChildIndex, ColorGradient};
pub use rings::RingGeometry;
pub use segment::{ChartSegment, build_segments};
pub use textlayout::{TextLine, layout_label, wrap_to_chord};
