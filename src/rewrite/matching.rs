//! Anchored right-to-left matching of a single rule against a view.
//!
//! # Algorithm
//!
//! ```text
//! reject if terminal rule and view not right-aligned
//! reject if start rule and view not left-aligned
//! pos = view.end
//! for symbol in pattern, last to first:
//!   skip ' ', '.', '$'
//!   fail if pos == view.begin
//!   '#': fail on placeholder, stop on digit
//!   otherwise: fail unless buffer[pos - 1] == symbol; pos -= 1
//! start rule: fail unless pos == view.begin
//! matched = [pos, view.end)
//! ```
//!
//! A `#` stops the comparison early: only the literal symbols to its right
//! are consumed, and the not-yet-consumed digits it stands for are left to
//! the rewrite engine's recursive sub-match.

use super::buffer::{DigitBuffer, View};
use super::types::{is_structural, Rule, HASH, PLACEHOLDER};

/// Test one rule against a view.
///
/// Returns the consumed span `[pos, view.end())` on success, or `None`
/// when the rule does not apply. A successful match is never empty: a
/// walk that consumes nothing is reported as no match.
///
/// # Examples
///
/// ```rust
/// use libteller::rewrite::{match_rule, DigitBuffer, Rule, View};
///
/// let rule = Rule::compile("#00. hundred").unwrap();
/// let buffer = DigitBuffer::new("300");
///
/// let matched = match_rule(&rule, &buffer, buffer.full_view()).unwrap();
/// assert_eq!(matched, View::new(1, 3));
/// ```
pub fn match_rule(rule: &Rule, buffer: &DigitBuffer, view: View) -> Option<View> {
    if (rule.is_terminal() && !view.right_aligned(buffer))
        || (rule.is_start() && !view.left_aligned())
    {
        return None;
    }

    let digits = buffer.as_bytes();
    let mut pos = view.end();

    for &symbol in rule.pattern_bytes().iter().rev() {
        if is_structural(symbol) {
            continue;
        }
        if pos == view.begin() {
            return None;
        }

        let current = digits[pos - 1];
        if symbol == HASH {
            if current == PLACEHOLDER {
                return None;
            }
            break;
        }
        if current != symbol {
            return None;
        }
        pos -= 1;
    }

    if rule.is_start() && pos != view.begin() {
        return None;
    }

    let matched = view.with_begin(pos);
    (!matched.is_empty()).then_some(matched)
}
