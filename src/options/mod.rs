//! Option parsing and lookup.
//!
//! | Submodule  | Responsibility |
//! |------------|----------------|
//! | [`token`]  | Classifies one raw argument: positional, option assignment, or `-noX` negation. |
//! | [`coerce`] | Infallible string → `bool` / `i64` coercion used by the typed accessors. |
//! | [`map`]    | [`OptionMap`]: the single-pass parse and the `get_string` / `get_bool` / `get_int` accessors. |

pub mod token;
pub mod coerce;
pub mod map;

pub use map::{Iter, OptionMap};
pub use token::{classify, Token};
