//! Line protocol for the interactive session.
//!
//! One command per line on stdin; responses are plain lines on stdout,
//! each response block ending in a fixed acknowledgement word.

pub mod parser;

pub use parser::{parse_command, Command};
