//! Value coercion for typed option lookups.
//!
//! Option values are stored as raw strings; these helpers turn them into
//! `bool` and `i64` without ever failing.  Malformed input maps to a fixed
//! fallback instead of an error.

use crate::config::FALSE_VALUE;

/// Interprets an option value as a boolean.
///
/// Only the exact string `"0"` is false.  An empty value (`-flag` or
/// `-flag=`), `"1"`, and any other literal are true.
#[inline]
pub fn value_as_bool(value: &str) -> bool {
    value != FALSE_VALUE
}

/// Parses the leading base-10 integer prefix of `value`.
///
/// Leading ASCII whitespace is skipped, then one optional `+` or `-` sign,
/// then decimal digits up to the first non-digit byte.  The rest of the
/// string is ignored, so `"12abc"` yields `12`.
///
/// Returns `0` when no digit follows the optional sign (`""`, `"NaN"`,
/// `"-"`, `"0x10"` reads as `0` because parsing stops at `x`).  Values
/// outside the `i64` range saturate at `i64::MAX` / `i64::MIN`.
pub fn value_as_int(value: &str) -> i64 {
    let bytes = value.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
    let mut i = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    // Accumulate towards the sign so i64::MIN is reachable without overflow.
    let mut result: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = (bytes[i] - b'0') as i64;
        result = if negative {
            match result.checked_mul(10).and_then(|r| r.checked_sub(digit)) {
                Some(r) => r,
                None => return i64::MIN,
            }
        } else {
            match result.checked_mul(10).and_then(|r| r.checked_add(digit)) {
                Some(r) => r,
                None => return i64::MAX,
            }
        };
        i += 1;
    }

    result
}
