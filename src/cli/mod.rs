//! Command-line interface for the `getarg` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, the `DISPLAY_LEVEL` atomic, and the `displayout!` / `displaylevel!` macros (also used by the library). |
//! | [`init`]      | Startup defaults read from the environment (`GETARG_DISPLAY_LEVEL`). |
//! | [`args`]      | `Cli` (clap derive) and `Query`: which typed lookups to run and on which arguments. |
//! | [`report`]    | `--dump` rendering of a parsed `OptionMap`. |
//!
//! Typical call sequence: `init_display_level` → `Cli::parse` → `Cli::queries` →
//! `OptionMap::parse` → `Query::resolve` / `dump_lines`.

pub mod constants;
pub mod init;
pub mod args;
pub mod report;
