// config.rs — Compile-time constants shared by the tokenizer and accessors.
//
// Option syntax is fixed at build time; nothing here is read from the
// environment or from a file.

// Leading character that marks a token as an option.
// Tokens starting with anything else are positional and ignored.
pub const OPTION_PREFIX: char = '-';

// Separator between option name and value (`-name=value`).
// Only the first occurrence splits; later ones belong to the value.
pub const VALUE_SEPARATOR: char = '=';

// Prefix (after the leading dash) that turns `-noX` into a negation of `-X`.
pub const NEGATION_PREFIX: &str = "no";

// The one value that coerces to `false`.
// Everything else, including the empty string, reads as `true`.
pub const FALSE_VALUE: &str = "0";

// Value stored by `soft_set_bool(.., true)`; `false` stores FALSE_VALUE.
pub const TRUE_LITERAL: &str = "1";
