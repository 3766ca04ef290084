//! # libteller
//!
//! Data-driven conversion of numeric strings into words.
//!
//! Instead of hand-written number-to-words logic, an ordered table of
//! pattern/replacement rules drives the conversion. Rules are matched from
//! the right end of the number, consumed digits are marked with a `?`
//! placeholder, and multi-digit magnitude words ("hundred", "thousand")
//! recursively convert the digit group to their left.
//!
//! ## Example
//!
//! ```rust
//! use libteller::prelude::*;
//!
//! let rules = RuleSet::parse("2. two\n4?. forty\n");
//! let telling = rules.tell("42");
//!
//! assert_eq!(telling.phrase, "forty two");
//! assert_eq!(telling.to_string(), "42 --> forty two");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod rewrite;
pub mod table;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::rewrite::{
        apply_rules, concat, english_rules, match_rule, tell, BuiltinTable, DigitBuffer, Rule,
        Telling, View,
    };
    pub use crate::table::{RuleSet, TableError};
}
