//! CLI subcommand implementations.

pub mod clean;
pub mod fingerprint;
pub mod normalize;
pub mod types;
