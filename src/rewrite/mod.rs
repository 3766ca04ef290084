//! Anchored digit rewrite rules.
//!
//! A rule table turns a numeric string into words without any arithmetic:
//! digits are opaque symbols matched from the right end of the number,
//! consumed by overwriting them with a `?` placeholder, and replaced by the
//! rule's text.
//!
//! # Pattern symbols
//!
//! | Symbol  | Meaning                                                         |
//! |---------|-----------------------------------------------------------------|
//! | `0`–`9` | literal digit                                                   |
//! | `?`     | an already consumed position                                    |
//! | `#`     | stop here; convert the unconsumed digit group to the left       |
//! | `.`     | terminal anchor: only at the right edge of the number           |
//! | `$`     | start anchor: must reach the left edge of the current view      |
//! | ` `     | spacer, ignored                                                 |
//!
//! # Usage
//!
//! ```rust
//! use libteller::rewrite::{english_rules, tell};
//!
//! let rules = english_rules();
//! assert_eq!(tell(&rules, "1905").phrase, "one thousand nine hundred five");
//! ```
//!
//! # Components
//!
//! - [`types`]: pattern alphabet and the [`Rule`] compiler
//! - [`buffer`]: the shared [`DigitBuffer`] and [`View`] ranges over it
//! - [`matching`]: [`match_rule`], the right-to-left anchored matcher
//! - [`application`]: [`apply_rules`], the fixed-point rewrite engine
//! - [`rules`]: built-in tables

pub mod application;
pub mod buffer;
pub mod matching;
pub mod rules;
pub mod types;

mod properties;

pub use application::{apply_rules, concat, tell, Telling};
pub use buffer::{DigitBuffer, View};
pub use matching::match_rule;
pub use rules::{compile_table, english_rules, BuiltinTable, ENGLISH_TABLE};
pub use types::{is_pattern_char, Rule, PLACEHOLDER};
