//! Display formatting for division records.
//!
//! Pure, total functions: population figures in colloquial Korean units,
//! area labels, and bare domains for links.

pub mod domain;
pub mod korean;

pub use domain::human_friendly_domain;
pub use korean::{
    approximate_population, format_area, format_korean_number, round_to_first_digit,
};
