// getarg — dash-style command-line option map with typed lookups

pub mod config;
pub mod options;
pub mod cli;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use options::coerce::{value_as_bool, value_as_int};
pub use options::{OptionMap, Token};
