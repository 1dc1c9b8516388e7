//! Selection state and name suggestions.
//!
//! The controller is the only mutable state in the crate. Suggestions are
//! a read-only query over the dataset.

pub mod controller;
pub mod suggest;

pub use controller::{SelectionController, SelectionError};
pub use suggest::{suggest, SUGGESTION_LIMIT};
