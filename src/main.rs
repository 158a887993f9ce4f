//! Binary entry point for the `getarg` command-line tool.
//!
//! Parses the arguments given after `--` with [`OptionMap::parse`] and
//! prints the requested typed lookups, one `NAME=VALUE` line each.
//!
//! # Control flow
//!
//! 1. [`init_display_level`] reads `GETARG_DISPLAY_LEVEL`.
//! 2. clap parses the tool's own flags into a [`Cli`]; `-v` / `-q` adjust
//!    the display level.
//! 3. [`run`] validates the queries, builds the map, and prints results.
//!
//! Exit code 0 on success, 1 on a bad query, 2 on a clap usage error.

use clap::Parser;

use getarg::cli::args::Cli;
use getarg::cli::constants::{display_level, set_display_level, PROGRAM_NAME};
use getarg::cli::init::init_display_level;
use getarg::cli::report::dump_lines;
use getarg::OptionMap;

/// Execute the lookups selected on the command line.
fn run(cli: &Cli) -> anyhow::Result<()> {
    // Reject bad queries before doing any work.
    let queries = cli.queries()?;

    let map = OptionMap::parse(&cli.args);
    getarg::displaylevel!(
        3,
        "{}: {} option name(s) from {} argument(s)\n",
        PROGRAM_NAME,
        map.len(),
        cli.args.len()
    );

    if cli.dump {
        for line in dump_lines(&map) {
            getarg::displayout!("{}\n", line);
        }
    }
    for query in &queries {
        getarg::displaylevel!(4, "{}: resolving {}\n", PROGRAM_NAME, query.name());
        getarg::displayout!("{}\n", query.resolve(&map));
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    set_display_level(init_display_level());

    let cli = Cli::parse();
    set_display_level(cli.display_level(display_level()));

    if let Err(e) = run(&cli) {
        getarg::displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
        std::process::exit(1);
    }
}
