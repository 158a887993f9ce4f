// cli/constants.rs — Program identity and display infrastructure.
//
// The display level is a crate-level atomic read by the `displaylevel!`
// macro.  Library code logs through it too, so a host program controls
// parser diagnostics by calling `set_display_level`.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "getarg";

/// Environment variable holding the initial display level of the binary.
pub const DISPLAY_LEVEL_ENV: &str = "GETARG_DISPLAY_LEVEL";

// ── Display levels ────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = ignored-token notes; 4 = per-token trace
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
pub const DISPLAY_LEVEL_MAX: u32 = 4;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, clamped to [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
