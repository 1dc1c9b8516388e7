//! Division records and their closed set of administrative kinds.
//!
//! A `Division` is one entry of the national dataset. Records are created
//! once by the dataset loader and never mutated afterwards.

pub mod kind;
pub mod record;

pub use kind::{DivisionType, ALL_DIVISION_TYPES, DIVISION_TYPE_COUNT};
pub use record::{Coord, Division, DivisionKey};
