//! Command-line definition for the `getarg` inspection binary.
//!
//! Everything after `--` is handed to [`OptionMap::parse`] untouched; the
//! options before it select which lookups to print:
//!
//! ```text
//! getarg -b -listen:1 -i -port:8333 -s -datadir -- -nolisten --port=18333
//! ```
//!
//! Each query is `NAME` or `NAME:DEFAULT`.  Names must carry their leading
//! dash, exactly as they would be passed to the accessors.

use anyhow::{anyhow, bail, Context};
use clap::{ArgAction, Parser};

use crate::cli::constants::DISPLAY_LEVEL_MAX;
use crate::options::OptionMap;

/// Parsed command line of the `getarg` binary.
#[derive(Parser, Debug)]
#[command(
    name = "getarg",
    version,
    about = "Parse dash-style options and print typed lookups",
    long_about = None
)]
pub struct Cli {
    /// Raise the display level (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print every explicit option and surviving negation
    #[arg(long)]
    pub dump: bool,

    /// Boolean lookup; DEFAULT is 0, 1, true or false
    ///
    /// Splits on the first `:`, so NAME cannot contain `:`
    #[arg(short = 'b', long = "bool", value_name = "NAME[:DEFAULT]", allow_hyphen_values = true)]
    pub bool_queries: Vec<String>,

    /// String lookup
    ///
    /// Splits on the first `:`, so NAME cannot contain `:`
    #[arg(short = 's', long = "string", value_name = "NAME[:DEFAULT]", allow_hyphen_values = true)]
    pub string_queries: Vec<String>,

    /// Integer lookup; DEFAULT is a signed decimal
    ///
    /// Splits on the first `:`, so NAME cannot contain `:`
    #[arg(short = 'i', long = "int", value_name = "NAME[:DEFAULT]", allow_hyphen_values = true)]
    pub int_queries: Vec<String>,

    /// Arguments to parse, given after `--`
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Display level after applying `-q` / `-v` on top of `base`.
    pub fn display_level(&self, base: u32) -> u32 {
        if self.quiet {
            1
        } else {
            base.saturating_add(self.verbose as u32).min(DISPLAY_LEVEL_MAX)
        }
    }

    /// Validates every query, in bool, string, int order.
    pub fn queries(&self) -> anyhow::Result<Vec<Query>> {
        let mut queries = Vec::with_capacity(
            self.bool_queries.len() + self.string_queries.len() + self.int_queries.len(),
        );
        for spec in &self.bool_queries {
            queries.push(Query::parse_bool(spec)?);
        }
        for spec in &self.string_queries {
            queries.push(Query::parse_string(spec)?);
        }
        for spec in &self.int_queries {
            queries.push(Query::parse_int(spec)?);
        }
        Ok(queries)
    }
}

/// One typed lookup requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Bool { name: String, default: bool },
    String { name: String, default: String },
    Int { name: String, default: i64 },
}

impl Query {
    pub fn parse_bool(spec: &str) -> anyhow::Result<Self> {
        let (name, default) = split_spec(spec)?;
        let default = match default {
            None | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => bail!("bad usage: --bool {}: invalid default '{}'", name, other),
        };
        Ok(Query::Bool { name: name.to_owned(), default })
    }

    pub fn parse_string(spec: &str) -> anyhow::Result<Self> {
        let (name, default) = split_spec(spec)?;
        Ok(Query::String {
            name: name.to_owned(),
            default: default.unwrap_or_default().to_owned(),
        })
    }

    pub fn parse_int(spec: &str) -> anyhow::Result<Self> {
        let (name, default) = split_spec(spec)?;
        let default = match default {
            None => 0,
            Some(text) => text
                .parse::<i64>()
                .with_context(|| format!("bad usage: --int {}: invalid default '{}'", name, text))?,
        };
        Ok(Query::Int { name: name.to_owned(), default })
    }

    pub fn name(&self) -> &str {
        match self {
            Query::Bool { name, .. } | Query::String { name, .. } | Query::Int { name, .. } => name,
        }
    }

    /// Runs the lookup and formats it as `NAME=VALUE`.
    /// Booleans print as `1` / `0`.
    pub fn resolve(&self, map: &OptionMap) -> String {
        match self {
            Query::Bool { name, default } => {
                format!("{}={}", name, u8::from(map.get_bool(name, *default)))
            }
            Query::String { name, default } => {
                format!("{}={}", name, map.get_string(name, default))
            }
            Query::Int { name, default } => {
                format!("{}={}", name, map.get_int(name, *default))
            }
        }
    }
}

/// Splits `NAME[:DEFAULT]`, requiring a dash-prefixed name.
fn split_spec(spec: &str) -> anyhow::Result<(&str, Option<&str>)> {
    let (name, default) = match spec.split_once(':') {
        Some((name, default)) => (name, Some(default)),
        None => (spec, None),
    };
    if name.len() < 2 || !name.starts_with('-') {
        return Err(anyhow!("bad usage: query name must look like -name, got '{}'", name));
    }
    Ok((name, default))
}
