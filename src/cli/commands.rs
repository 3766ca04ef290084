//! CLI command implementations

use anyhow::{anyhow, Result};
use colored::Colorize;
use std::io::{self, BufWriter, Write};

use crate::table::{RuleSet, TableError};

use super::args::{Cli, Commands};
use super::config::TellerConfig;

/// Execute the parsed command line, writing results to stdout
pub fn execute(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute the parsed command line against any writer
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let command = cli.command();
    let (start, end) = match &command {
        Commands::Range { start, end } => (*start, *end),
        _ => (None, None),
    };

    let config = TellerConfig::load_from(cli.config.as_deref())?
        .merge_with_cli(cli.rules.clone(), cli.builtin, start, end);
    config.validate()?;

    let rules = load_rules(&config)?;

    match command {
        Commands::Range { .. } => cmd_range(&rules, config.start, config.end, out),
        Commands::Say { numbers } => cmd_say(&rules, &numbers, out),
        Commands::Rules => cmd_rules(&rules, out),
    }
}

/// Load the configured rule table, built-in or from disk
pub fn load_rules(config: &TellerConfig) -> Result<RuleSet> {
    if let Some(table) = config.builtin {
        return Ok(RuleSet::builtin(table));
    }

    let path = &config.rules_path;
    RuleSet::load(path).map_err(|e| match e {
        TableError::Io(err) => anyhow!(err)
            .context(format!("Failed to read rule table: {}", path.display())),
        empty @ TableError::Empty(_) => anyhow!(empty),
    })
}

/// Range command
fn cmd_range<W: Write>(rules: &RuleSet, start: u64, end: u64, out: &mut W) -> Result<()> {
    tracing::info!(start, end, rules = rules.len(), "converting range");
    for n in start..end {
        writeln!(out, "{}", rules.tell(&n.to_string()))?;
    }
    Ok(())
}

/// Say command
fn cmd_say<W: Write>(rules: &RuleSet, numbers: &[String], out: &mut W) -> Result<()> {
    for number in numbers {
        writeln!(out, "{}", rules.tell(number))?;
    }
    Ok(())
}

/// Rules command
fn cmd_rules<W: Write>(rules: &RuleSet, out: &mut W) -> Result<()> {
    writeln!(out, "{} ({})", "Rules".bold().underline(), rules.len())?;

    for (index, rule) in rules.iter().enumerate() {
        let mut flags = Vec::new();
        if rule.hash_count() > 0 {
            flags.push(format!("#{}", rule.hash_count()));
        }
        if rule.is_terminal() {
            flags.push("terminal".to_string());
        }
        if rule.is_start() {
            flags.push("start".to_string());
        }

        writeln!(
            out,
            "{:>4}  {} {} {}",
            index + 1,
            format!("{:<10}", format!("{:?}", rule.pattern())).cyan(),
            format!("{:<12}", format!("{:?}", rule.replacement())).green(),
            flags.join(" ").yellow()
        )?;
    }
    Ok(())
}
