//! Tokenizer / normalizer for raw argument strings.
//!
//! [`classify`] looks at one argument in isolation and decides what it
//! contributes to an [`OptionMap`](crate::options::OptionMap):
//!
//! | Raw token            | Result                                    |
//! |----------------------|-------------------------------------------|
//! | `file.txt`           | [`Token::Positional`]                     |
//! | `-`, `--`, `-=x`     | [`Token::Bare`]                           |
//! | `-name`, `--name`    | `Setting { name: "-name", value: "" }`    |
//! | `-name=v`, `--name=v`| `Setting { name: "-name", value: "v" }`   |
//! | `-noname[=v]`        | `Negation { target: "-name", .. }`        |
//! | `-no`, `-no=v`       | `Setting { name: "-no", .. }`             |
//!
//! `--` is only a spelling variant of `-`; it never ends option processing.

use crate::config::{NEGATION_PREFIX, OPTION_PREFIX, VALUE_SEPARATOR};
use crate::options::coerce::value_as_bool;

/// Classification of a single raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Does not start with `-`; not an option.
    Positional,
    /// Starts with `-` but names nothing (`-`, `--`, `-=value`).
    Bare,
    /// A direct option assignment.  `name` keeps its single leading dash;
    /// `value` is empty when the token had no `=`.
    Setting { name: &'a str, value: &'a str },
    /// A `-noX` directive for `target` (`-X`).  `negated` is false only for
    /// an explicit `=0`.
    Negation { target: String, negated: bool },
}

/// Normalizes `--name` to `-name`.  Only one dash is removed, so `---x`
/// becomes `--x`.  Returns `None` for tokens that are not options.
pub fn normalize(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix(OPTION_PREFIX)?;
    if rest.starts_with(OPTION_PREFIX) {
        Some(rest)
    } else {
        Some(raw)
    }
}

/// Splits a normalized token on its first `=`.
///
/// A token without `=` yields an empty value, which is indistinguishable
/// from an explicit `-name=`.
pub fn split_value(normalized: &str) -> (&str, &str) {
    normalized
        .split_once(VALUE_SEPARATOR)
        .unwrap_or((normalized, ""))
}

/// Classifies one raw argument.
pub fn classify(raw: &str) -> Token<'_> {
    let Some(normalized) = normalize(raw) else {
        return Token::Positional;
    };
    let (name, value) = split_value(normalized);

    let Some(bare_name) = name.strip_prefix(OPTION_PREFIX) else {
        return Token::Bare;
    };
    if bare_name.is_empty() {
        return Token::Bare;
    }

    match bare_name.strip_prefix(NEGATION_PREFIX) {
        Some(suffix) if !suffix.is_empty() => Token::Negation {
            target: format!("{OPTION_PREFIX}{suffix}"),
            negated: value_as_bool(value),
        },
        _ => Token::Setting { name, value },
    }
}
