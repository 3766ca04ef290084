//! Rule representation and the rule compiler.
//!
//! A rule table line is split into a *pattern* and a *replacement* at the
//! first character that is not a pattern symbol:
//!
//! ```text
//! #??. hundred
//! ^^^^^------- pattern   "#??. "
//!      ^^^^^^^ replacement "hundred"
//! ```
//!
//! Everything from the split point to the end of the line belongs to the
//! replacement, including characters that would otherwise be pattern
//! symbols (`"1 one 2"` has pattern `"1 "` and replacement `"one 2"`).

use smallvec::SmallVec;

/// Placeholder written over consumed buffer positions.
pub const PLACEHOLDER: u8 = b'?';

/// "One or more not-yet-consumed digits to the left" marker.
pub const HASH: u8 = b'#';

/// Terminal anchor: the rule only matches at the right edge of the buffer.
pub const TERMINAL_ANCHOR: u8 = b'.';

/// Start anchor: the rule only matches when it reaches the left edge of the view.
pub const START_ANCHOR: u8 = b'$';

/// Structural spacer, never compared against the buffer.
pub const SPACER: u8 = b' ';

/// Check if a character belongs to the pattern alphabet `0-9 ? # $ . ␠`.
#[inline]
pub fn is_pattern_char(c: char) -> bool {
    matches!(c, '0'..='9' | '?' | '#' | '$' | '.' | ' ')
}

/// Check if a pattern symbol is an anchor or spacer rather than a matchable symbol.
#[inline]
pub fn is_structural(symbol: u8) -> bool {
    symbol.is_ascii_whitespace() || symbol == TERMINAL_ANCHOR || symbol == START_ANCHOR
}

/// A single rewrite rule compiled from one line of a rule table.
///
/// Rules are immutable once compiled. The pattern only ever holds ASCII
/// pattern symbols, so it is stored as bytes; most patterns are a handful
/// of symbols long and stay inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pattern: SmallVec<[u8; 8]>,
    replacement: String,
}

impl Rule {
    /// Compile one table line into a rule.
    ///
    /// Returns `None` when the pattern portion is empty (blank lines, or
    /// lines starting with a non-pattern character); such lines never
    /// become part of a rule set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libteller::rewrite::Rule;
    ///
    /// let rule = Rule::compile("#??. hundred").unwrap();
    /// assert_eq!(rule.pattern(), "#??. ");
    /// assert_eq!(rule.replacement(), "hundred");
    /// assert_eq!(rule.hash_count(), 1);
    /// assert!(rule.is_terminal());
    ///
    /// assert!(Rule::compile("comment").is_none());
    /// ```
    pub fn compile(line: &str) -> Option<Rule> {
        let split = line
            .char_indices()
            .find(|&(_, c)| !is_pattern_char(c))
            .map_or(line.len(), |(i, _)| i);

        if split == 0 {
            return None;
        }

        Some(Rule {
            pattern: SmallVec::from_slice(line[..split].as_bytes()),
            replacement: line[split..].to_string(),
        })
    }

    /// The pattern symbols as text.
    pub fn pattern(&self) -> &str {
        // Pattern bytes are a prefix of a `&str` ending on an ASCII boundary.
        std::str::from_utf8(&self.pattern).unwrap_or_default()
    }

    /// The pattern symbols as bytes.
    #[inline]
    pub fn pattern_bytes(&self) -> &[u8] {
        &self.pattern
    }

    /// The text this rule contributes to the phrase.
    #[inline]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Number of `#` symbols, i.e. the width of the recursive sub-view.
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.pattern.iter().filter(|&&b| b == HASH).count()
    }

    /// Terminal-anchored rules (pattern contains `.`) only match right-aligned views.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.pattern.contains(&TERMINAL_ANCHOR)
    }

    /// Start-anchored rules (pattern contains `$`) only match left-aligned views.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.pattern.contains(&START_ANCHOR)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pattern(), self.replacement)
    }
}
