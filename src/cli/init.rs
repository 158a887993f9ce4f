//! Startup defaults for the `getarg` binary.
//!
//! The initial display level comes from the `GETARG_DISPLAY_LEVEL`
//! environment variable; `-v` / `-q` on the command line adjust it afterwards
//! (see [`crate::cli::args::Cli::display_level`]).

use crate::cli::constants::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_ENV, DISPLAY_LEVEL_MAX};
use crate::displaylevel;

/// Read the initial display level from `GETARG_DISPLAY_LEVEL`.
///
/// Falls back to [`DISPLAY_LEVEL_DEFAULT`] when the variable is unset or not
/// an unsigned integer.
pub fn init_display_level() -> u32 {
    init_display_level_from(std::env::var(DISPLAY_LEVEL_ENV).ok().as_deref())
}

/// Testable core of [`init_display_level`].
///
/// Pass `Some(s)` with the raw variable, or `None` for an unset variable.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    let Some(env) = env_val else {
        return DISPLAY_LEVEL_DEFAULT;
    };
    match env.trim().parse::<u32>() {
        Ok(level) => level.min(DISPLAY_LEVEL_MAX),
        Err(_) => {
            displaylevel!(
                2,
                "Ignore environment variable setting {}={}: not a valid unsigned value \n",
                DISPLAY_LEVEL_ENV,
                env
            );
            DISPLAY_LEVEL_DEFAULT
        }
    }
}
