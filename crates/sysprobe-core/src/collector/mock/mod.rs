//! Mock filesystem and fixtures for running accessors without `/proc`.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
pub use scenarios::LIMITS_TYPICAL;
