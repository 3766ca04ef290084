//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::rewrite::BuiltinTable;

/// Command line of the `teller` binary
#[derive(Parser, Debug)]
#[command(name = "teller")]
#[command(about = "Convert numbers to words with a table of digit rewrite rules")]
#[command(version)]
pub struct Cli {
    /// Rule table file (defaults to rules.txt)
    pub rules: Option<PathBuf>,

    /// Use a built-in rule table instead of a file
    #[arg(short, long, global = true)]
    pub builtin: Option<BuiltinTable>,

    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands; `range` runs when none is given
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Convert every integer in [start, end)
    Range {
        /// First value (inclusive)
        #[arg(short, long)]
        start: Option<u64>,

        /// Last value (exclusive)
        #[arg(short, long)]
        end: Option<u64>,
    },

    /// Convert the given numeric strings
    Say {
        /// Numeric strings, converted digit by digit
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// List compiled rules in priority order
    Rules,
}

impl Cli {
    /// The command to run; a bare invocation converts the configured range.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Range {
            start: None,
            end: None,
        })
    }
}
