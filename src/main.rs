//! jpg2raw CLI entrypoint.
//!
//! Parses arguments, runs the two-stage batch conversion and exits with a
//! non-zero status on the first error. For programmatic use, prefer the
//! library API (`jpg2raw::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_from(cli::args::rewrite_legacy_flags(std::env::args_os()));
    cli::run(args)
}
