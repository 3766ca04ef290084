//! Built-in rule tables.
//!
//! Built-in tables are ordinary rule-table text compiled with
//! [`Rule::compile`], exactly like tables loaded from disk.

use super::types::Rule;

/// English cardinal numbers from 0 to 9999.
pub const ENGLISH_TABLE: &str = include_str!("../../rules/english.txt");

/// A rule table shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BuiltinTable {
    /// English cardinals, see [`ENGLISH_TABLE`].
    #[default]
    English,
}

impl BuiltinTable {
    /// Get a human-readable name for this table
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinTable::English => "english",
        }
    }

    /// Raw table text
    pub fn text(&self) -> &'static str {
        match self {
            BuiltinTable::English => ENGLISH_TABLE,
        }
    }

    /// Compile the table into rules, in priority order
    pub fn rules(&self) -> Vec<Rule> {
        compile_table(self.text())
    }
}

impl std::fmt::Display for BuiltinTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BuiltinTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(BuiltinTable::English),
            _ => Err(format!("Unknown built-in table: {}. Valid options: english", s)),
        }
    }
}

/// Compile every line of `text`, dropping lines without a pattern.
pub fn compile_table(text: &str) -> Vec<Rule> {
    text.lines().filter_map(Rule::compile).collect()
}

/// The English cardinal rules.
pub fn english_rules() -> Vec<Rule> {
    BuiltinTable::English.rules()
}

#[cfg(test)]
mod tests {
    use super::super::application::tell;
    use super::*;

    fn say(n: u32) -> String {
        let rules = english_rules();
        let telling = tell(&rules, &n.to_string());
        assert_eq!(telling.residue, "", "{n} left digits unconsumed");
        telling.phrase
    }

    #[test]
    fn test_english_rule_count() {
        // zero, ten teens, ten units, nine tens, three magnitudes, nine group digits
        assert_eq!(english_rules().len(), 42);
    }

    #[test]
    fn test_comments_are_dropped() {
        assert!(english_rules()
            .iter()
            .all(|rule| !rule.replacement().starts_with('/')));
    }

    #[test]
    fn test_english_small_numbers() {
        assert_eq!(say(0), "zero");
        assert_eq!(say(1), "one");
        assert_eq!(say(9), "nine");
        assert_eq!(say(10), "ten");
        assert_eq!(say(13), "thirteen");
        assert_eq!(say(19), "nineteen");
        assert_eq!(say(20), "twenty");
        assert_eq!(say(40), "forty");
        assert_eq!(say(42), "forty two");
        assert_eq!(say(99), "ninety nine");
    }

    #[test]
    fn test_english_hundreds() {
        assert_eq!(say(100), "one hundred");
        assert_eq!(say(105), "one hundred five");
        assert_eq!(say(110), "one hundred ten");
        assert_eq!(say(113), "one hundred thirteen");
        assert_eq!(say(250), "two hundred fifty");
        assert_eq!(say(999), "nine hundred ninety nine");
    }

    #[test]
    fn test_english_thousands() {
        assert_eq!(say(1000), "one thousand");
        assert_eq!(say(1005), "one thousand five");
        assert_eq!(say(1010), "one thousand ten");
        assert_eq!(say(1100), "one thousand one hundred");
        assert_eq!(say(2024), "two thousand twenty four");
        assert_eq!(say(9999), "nine thousand nine hundred ninety nine");
    }

    #[test]
    fn test_english_covers_full_range() {
        let rules = english_rules();
        for n in 0..10_000u32 {
            let telling = tell(&rules, &n.to_string());
            assert_eq!(telling.residue, "", "{n} left digits unconsumed");
            assert!(!telling.phrase.is_empty(), "{n} produced no words");
            assert!(!telling.phrase.contains("  "), "{n}: {:?}", telling.phrase);
        }
    }

    #[test]
    fn test_english_beyond_range_leaves_residue() {
        let telling = tell(&english_rules(), "12345");
        assert_eq!(telling.residue, "1");
        assert_eq!(telling.phrase, "two thousand three hundred forty five");
    }

    #[test]
    fn test_builtin_table_from_str() {
        assert_eq!("english".parse::<BuiltinTable>(), Ok(BuiltinTable::English));
        assert_eq!("EN".parse::<BuiltinTable>(), Ok(BuiltinTable::English));
        assert!("klingon".parse::<BuiltinTable>().is_err());
        assert_eq!(BuiltinTable::English.to_string(), "english");
    }
}
