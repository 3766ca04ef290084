//! CLI interface for teller
//!
//! Provides the `teller` command line: range conversion, explicit numbers
//! and rule table inspection.

pub mod args;
pub mod commands;
pub mod config;
pub mod logging;

pub use args::{Cli, Commands};
pub use config::TellerConfig;
