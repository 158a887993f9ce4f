//! Text rendering of a parsed [`OptionMap`] for `getarg --dump`.
//!
//! | Line      | Meaning                              |
//! |-----------|--------------------------------------|
//! | `-x=v`    | `-x` explicitly set to `v`           |
//! | `!-x`     | `-nox` / `-nox=1`, no explicit `-x`  |
//! | `~-x`     | `-nox=0`, no explicit `-x`           |

use crate::options::OptionMap;

pub const NEGATED_MARK: char = '!';
pub const UNNEGATED_MARK: char = '~';

/// Explicit options first, then negations, each in name order.
pub fn dump_lines(map: &OptionMap) -> Vec<String> {
    let mut lines: Vec<String> = map
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    lines.extend(map.negations().map(|(name, negated)| {
        let mark = if negated { NEGATED_MARK } else { UNNEGATED_MARK };
        format!("{}{}", mark, name)
    }));
    lines
}
