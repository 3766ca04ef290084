//! teller - Convert numbers to words with a table of digit rewrite rules
//!
//! Reads a rule table (or a built-in one) and prints one conversion per line.

use clap::Parser;
use colored::Colorize;
use std::process;

use libteller::cli::logging::init_logging;
use libteller::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
