//! Logger setup for the binary.
//!
//! Log lines go to stderr so stdout carries only protocol responses.

use env_logger::{Builder, Env};

/// Installs the stderr logger at `info`, or at the level `RUST_LOG` names.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
