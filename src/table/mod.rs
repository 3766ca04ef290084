//! Rule table loading.
//!
//! A rule table is newline-delimited UTF-8 text with one rule per line:
//!
//! ```text
//! // comments and blank lines have no pattern and are skipped
//! 12. twelve
//! 2?. twenty
//! #??. hundred
//! ```
//!
//! Line order is match priority. Lines without a pattern prefix are
//! dropped silently; [`RuleSet::load`] only fails when nothing usable is
//! left, so callers that need strict validation should check
//! [`RuleSet::len`] against their expectations.
//!
//! # Example
//!
//! ```rust,ignore
//! use libteller::table::RuleSet;
//!
//! let rules = RuleSet::load("rules.txt")?;
//! println!("{}", rules.tell("42"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::rewrite::{tell, BuiltinTable, Rule, Telling};

/// Errors that can occur while loading a rule table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error while reading the table
    #[error("I/O error reading rule table")]
    Io(#[from] std::io::Error),
    /// The table contained no line with a pattern
    #[error("No rules read from {0}")]
    Empty(String),
}

/// A specialized `Result` type for rule table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// An ordered set of rules; earlier rules take priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Wrap already compiled rules, keeping their order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compile table text. Never fails; the result may be empty.
    pub fn parse(text: &str) -> Self {
        let mut rules = Vec::new();
        for (index, line) in text.lines().enumerate() {
            push_line(&mut rules, index, line);
        }
        Self { rules }
    }

    /// Read and compile a table from any reader. The result may be empty.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let buf_reader = BufReader::new(reader);
        let mut rules = Vec::new();

        for (index, line) in buf_reader.lines().enumerate() {
            push_line(&mut rules, index, &line?);
        }

        Ok(Self { rules })
    }

    /// Load a table file, failing if it yields no rules.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let rules = Self::from_reader(File::open(path)?)?;
        if rules.is_empty() {
            return Err(TableError::Empty(path.display().to_string()));
        }

        debug!(rules = rules.len(), path = %path.display(), "loaded rule table");
        Ok(rules)
    }

    /// Compile a table shipped with the crate.
    pub fn builtin(table: BuiltinTable) -> Self {
        let rules = Self::parse(table.text());
        debug!(rules = rules.len(), table = %table, "loaded built-in rule table");
        rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate over the rules in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Convert one numeric string with this rule set.
    pub fn tell(&self, number: &str) -> Telling {
        tell(&self.rules, number)
    }
}

impl AsRef<[Rule]> for RuleSet {
    fn as_ref(&self) -> &[Rule] {
        &self.rules
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Blank lines and `//` comments.
fn is_annotation(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with("//")
}

fn push_line(rules: &mut Vec<Rule>, index: usize, line: &str) {
    if is_annotation(line) {
        return;
    }
    match Rule::compile(line) {
        Some(rule) => rules.push(rule),
        None => debug!(line = index + 1, "skipping rule table line without pattern"),
    }
}
