//! The parsed option store and its typed accessors.
//!
//! An [`OptionMap`] is built by a single left-to-right pass over the
//! argument vector ([`OptionMap::parse`]) and is read-only afterwards,
//! apart from the `soft_set*` hooks that external collaborators may call
//! before the map is shared.  There is no process-wide option state; callers
//! pass the map by reference (or wrap it in an `Arc`) to whatever needs it.
//!
//! Two tables back the map:
//!
//! - `values`: explicitly set options, `-name` → last value seen.
//! - `negations`: `-noX` directives, keyed by `-X`, holding whether the
//!   last directive negated it.  Entries whose name also appears in `values`
//!   are dropped at the end of the parse, so the two key sets are disjoint.

use std::collections::btree_map::{self, BTreeMap};
use std::ffi::OsString;

use crate::config::{FALSE_VALUE, TRUE_LITERAL};
use crate::displaylevel;
use crate::options::coerce::{value_as_bool, value_as_int};
use crate::options::token::{classify, Token};

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    values: BTreeMap<String, String>,
    negations: BTreeMap<String, bool>,
}

impl OptionMap {
    /// Returns an empty map: every lookup falls through to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `args` (program name already removed).
    ///
    /// Never fails.  Positional arguments and bare dashes are skipped; a
    /// repeated option keeps its last value; an explicit `-X` anywhere in
    /// the input cancels every `-noX` directive.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::default();

        for arg in args {
            let raw = arg.as_ref();
            match classify(raw) {
                Token::Positional => {
                    displaylevel!(3, "getarg: ignoring positional argument '{}'\n", raw);
                }
                Token::Bare => {
                    displaylevel!(3, "getarg: ignoring unnamed option '{}'\n", raw);
                }
                Token::Setting { name, value } => {
                    displaylevel!(4, "getarg: {} = '{}'\n", name, value);
                    map.values.insert(name.to_owned(), value.to_owned());
                }
                Token::Negation { target, negated } => {
                    displaylevel!(4, "getarg: {} negated = {}\n", target, negated);
                    map.negations.insert(target, negated);
                }
            }
        }

        let Self { values, negations } = &mut map;
        negations.retain(|name, _| !values.contains_key(name));

        map
    }

    /// Parses the current process arguments, skipping argv[0].
    ///
    /// Delegates to [`parse_os`](Self::parse_os).
    pub fn from_env() -> Self {
        Self::parse_os(std::env::args_os().skip(1))
    }

    /// Testable core of [`from_env`](Self::from_env): parses OS strings
    /// (program name already removed).
    ///
    /// Arguments that are not valid UTF-8 are converted lossily, each
    /// invalid sequence becoming U+FFFD.
    pub fn parse_os<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::parse(
            args.into_iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Raw value of an explicitly set option.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether `name` holds a value: it appeared as a direct token (not
    /// only as `-noX`) or was stored by a successful `soft_set`.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Surviving negation state for `name`.
    ///
    /// `Some(true)` after `-noX` / `-noX=1`, `Some(false)` after `-noX=0`,
    /// `None` when there was no directive or `name` was set explicitly.
    pub fn negation(&self, name: &str) -> Option<bool> {
        self.negations.get(name).copied()
    }

    /// String lookup.  An explicitly set option returns its value verbatim,
    /// including the empty string for `-name` and `-name=`.
    pub fn get_string<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.value(name).unwrap_or(default)
    }

    /// Boolean lookup.
    ///
    /// Resolution order: explicit value (only `"0"` is false), then a
    /// `-noX` directive, then `default`.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        if let Some(value) = self.value(name) {
            return value_as_bool(value);
        }
        match self.negation(name) {
            Some(negated) => !negated,
            None => default,
        }
    }

    /// Integer lookup.
    ///
    /// An explicitly set option is parsed by [`value_as_int`], so `-n` and
    /// `-n=abc` both read as `0` rather than `default`.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.value(name) {
            Some(value) => value_as_int(value),
            None => default,
        }
    }

    /// Stores `value` under `name` unless the user already expressed a
    /// value for it, either directly or through a `-noX` directive.
    ///
    /// Returns `true` when the value was stored.
    pub fn soft_set(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.is_set(&name) || self.negations.contains_key(&name) {
            displaylevel!(4, "getarg: soft set of {} skipped\n", name);
            return false;
        }
        self.values.insert(name, value.into());
        true
    }

    /// [`soft_set`](Self::soft_set) for booleans; stores `"1"` or `"0"`.
    pub fn soft_set_bool(&mut self, name: impl Into<String>, value: bool) -> bool {
        self.soft_set(name, if value { TRUE_LITERAL } else { FALSE_VALUE })
    }

    /// Explicit options in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.values.iter() }
    }

    /// Surviving negation directives in name order.
    pub fn negations(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.negations.iter().map(|(name, negated)| (name.as_str(), *negated))
    }

    /// Number of names carrying state: explicit options plus surviving
    /// negation directives.  The two sets never share a name.
    pub fn len(&self) -> usize {
        self.values.len() + self.negations.len()
    }

    /// Same as `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.negations.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for OptionMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::parse(iter)
    }
}

/// Iterator over explicit `(name, value)` pairs, see [`OptionMap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
