//! Sigungu library.
//!
//! Exposes the division dataset, Korean-unit formatting, proximity
//! ranking, and the selection state machine for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod dataset;
pub mod division;
pub mod format;
pub mod logging;
pub mod protocol;
pub mod rank;
pub mod selection;
pub mod session;
pub mod view;

pub use dataset::{load_dataset, parse_dataset, Dataset, DatasetError};
pub use division::{Coord, Division, DivisionKey, DivisionType};
pub use selection::{SelectionController, SelectionError};
