//! Library components for the `qsync` demo CLI.

pub mod logging;
pub mod schema;
