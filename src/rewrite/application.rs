//! The rewrite engine: fixed-point rule application over a digit buffer.
//!
//! # Algorithm
//!
//! ```text
//! apply_rules(rules, view):
//!   phrase = ""
//!   while view is non-empty and the buffer changed during the last pass:
//!     for each rule r in table order:
//!       if r matches view with span m:
//!         mark m consumed
//!         phrase = r.replacement ⊕ phrase
//!         if r has h > 0 '#' symbols:
//!           phrase = apply_rules(rules, [max(0, m.begin - h), m.begin)) ⊕ phrase
//!         next pass
//!   return phrase
//! ```
//!
//! Matching proceeds from the least significant digits leftwards, so each
//! new fragment is prepended. Fragments produced by a `#` sub-view are
//! prepended after the rule's own replacement, which puts the magnitude
//! group ("two") ahead of its magnitude word ("hundred").
//!
//! # Termination
//!
//! A pass continues the loop only if the buffer revision moved, and the
//! revision only moves when a digit is overwritten by the placeholder. A
//! finite buffer therefore bounds the number of passes.

use tracing::trace;

use super::buffer::{DigitBuffer, View};
use super::matching::match_rule;
use super::types::{Rule, PLACEHOLDER};

/// Join two phrase fragments.
///
/// Empty fragments join without a separator; otherwise a single space is
/// inserted unless either touching character is already whitespace.
///
/// # Examples
///
/// ```rust
/// use libteller::rewrite::concat;
///
/// assert_eq!(concat("twenty", "one"), "twenty one");
/// assert_eq!(concat("", "one"), "one");
/// assert_eq!(concat("twenty ", "one"), "twenty one");
/// ```
pub fn concat(left: &str, right: &str) -> String {
    if left.is_empty() {
        return right.to_string();
    }
    if right.is_empty() {
        return left.to_string();
    }

    let touching_space =
        left.ends_with(char::is_whitespace) || right.starts_with(char::is_whitespace);
    let mut joined = String::with_capacity(left.len() + right.len() + 1);
    joined.push_str(left);
    if !touching_space {
        joined.push(' ');
    }
    joined.push_str(right);
    joined
}

/// Rewrite a view into a phrase, consuming matched positions of `buffer`.
///
/// Rules are tried in slice order and the first match of each pass wins.
/// The buffer is shared with every recursive call, so positions consumed
/// while converting a `#` group are visible to the caller afterwards.
///
/// An empty view returns an empty phrase without trying any rule.
pub fn apply_rules(rules: &[Rule], buffer: &mut DigitBuffer, view: View) -> String {
    let mut phrase = String::new();
    let mut last_revision = None;

    while !view.is_empty() && last_revision != Some(buffer.revision()) {
        last_revision = Some(buffer.revision());

        for (index, rule) in rules.iter().enumerate() {
            let Some(matched) = match_rule(rule, buffer, view) else {
                continue;
            };

            matched.fill(buffer, PLACEHOLDER);
            trace!(rule = index, %view, %matched, buffer = %buffer.text(), "rule applied");
            phrase = concat(rule.replacement(), &phrase);

            let hashes = rule.hash_count();
            if hashes > 0 {
                let group = View::new(matched.begin().saturating_sub(hashes), matched.begin());
                trace!(rule = index, %group, "converting magnitude group");
                let prefix = apply_rules(rules, buffer, group);
                phrase = concat(&prefix, &phrase);
            }
            break;
        }
    }

    phrase
}

/// Outcome of converting one numeric string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telling {
    /// The numeric string as given.
    pub input: String,
    /// Digits no rule consumed, in their original order.
    pub residue: String,
    /// The assembled phrase.
    pub phrase: String,
}

impl std::fmt::Display for Telling {
    /// `"<input> --> <residue> <phrase>"`, without the separating space when
    /// every digit was consumed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.residue.is_empty() { "" } else { " " };
        write!(f, "{} --> {}{}{}", self.input, self.residue, sep, self.phrase)
    }
}

/// Convert one numeric string with a rule set.
///
/// # Examples
///
/// ```rust
/// use libteller::rewrite::{tell, Rule};
///
/// let rules: Vec<Rule> = ["2. two", "4?. forty"]
///     .iter()
///     .filter_map(|line| Rule::compile(line))
///     .collect();
///
/// let telling = tell(&rules, "42");
/// assert_eq!(telling.phrase, "forty two");
/// assert_eq!(telling.residue, "");
/// assert_eq!(telling.to_string(), "42 --> forty two");
/// ```
pub fn tell(rules: &[Rule], number: &str) -> Telling {
    let mut buffer = DigitBuffer::new(number);
    let view = buffer.full_view();
    let phrase = apply_rules(rules, &mut buffer, view);

    Telling {
        input: number.to_string(),
        residue: buffer.residue(),
        phrase,
    }
}
