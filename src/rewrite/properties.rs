//! Property-based tests for the rule matcher and the rewrite engine.
//!
//! Properties covered:
//!
//! 1. **Determinism**: the same rules and input always give the same output
//! 2. **Termination**: conversion returns for arbitrary tables and inputs
//! 3. **Idempotent emptiness**: empty views produce empty phrases untouched
//! 4. **Consumption monotonicity**: a match with a digit literal consumes
//! 5. **Anchor correctness**: `.` and `$` rules respect view alignment

#[cfg(test)]
mod tests {
    use super::super::application::{apply_rules, tell};
    use super::super::buffer::{DigitBuffer, View};
    use super::super::matching::match_rule;
    use super::super::types::{Rule, HASH, PLACEHOLDER};
    use proptest::prelude::*;

    // ========================================================================
    // Proptest Generators
    // ========================================================================

    /// Generate a rule whose pattern is drawn from the full pattern alphabet
    fn arb_rule() -> impl Strategy<Value = Rule> {
        ("[0-9?#$. ]{1,6}", "[a-z]{0,6}").prop_filter_map("non-empty pattern", |(p, r)| {
            Rule::compile(&format!("{p}{r}"))
        })
    }

    fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
        prop::collection::vec(arb_rule(), 0..12)
    }

    /// Numeric strings, occasionally with placeholders already present
    fn arb_number() -> impl Strategy<Value = String> {
        "[0-9?]{0,10}"
    }

    /// A buffer and a view inside it
    fn arb_buffer_view() -> impl Strategy<Value = (String, View)> {
        arb_number().prop_flat_map(|number| {
            let len = number.len();
            (Just(number), 0..=len, 0..=len).prop_map(|(number, a, b)| {
                (number, View::new(a.min(b), a.max(b)))
            })
        })
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    proptest! {
        #[test]
        fn prop_conversion_is_deterministic(rules in arb_rules(), number in arb_number()) {
            let first = tell(&rules, &number);
            let second = tell(&rules, &number);
            prop_assert_eq!(first, second);
        }
    }

    // ========================================================================
    // Termination
    // ========================================================================

    proptest! {
        #[test]
        fn prop_conversion_terminates(rules in arb_rules(), number in "[0-9]{0,12}") {
            let telling = tell(&rules, &number);
            prop_assert!(telling.residue.len() <= number.len());
            prop_assert!(telling.residue.bytes().all(|b| b.is_ascii_digit()));
        }

        #[test]
        fn prop_revisions_bounded_by_length(rules in arb_rules(), number in "[0-9]{0,12}") {
            let mut buffer = DigitBuffer::new(&number);
            let view = buffer.full_view();
            apply_rules(&rules, &mut buffer, view);
            // Each revision turns at least one digit into a placeholder.
            prop_assert!(buffer.unconsumed() + buffer.revision() as usize <= number.len());
        }
    }

    // ========================================================================
    // Idempotent emptiness
    // ========================================================================

    proptest! {
        #[test]
        fn prop_empty_view_is_untouched(rules in arb_rules(), number in arb_number(), at in 0usize..=10) {
            let mut buffer = DigitBuffer::new(&number);
            let at = at.min(buffer.len());
            let phrase = apply_rules(&rules, &mut buffer, View::empty_at(at));
            prop_assert_eq!(phrase, "");
            prop_assert_eq!(buffer.revision(), 0);
            prop_assert_eq!(buffer.text(), number.as_str());
        }
    }

    // ========================================================================
    // Consumption monotonicity
    // ========================================================================

    proptest! {
        #[test]
        fn prop_digit_match_consumes(rule in arb_rule(), (number, view) in arb_buffer_view()) {
            // Symbols left of the last '#' are never compared.
            let pattern = rule.pattern_bytes();
            let compared = match pattern.iter().rposition(|&b| b == HASH) {
                Some(i) => &pattern[i + 1..],
                None => pattern,
            };
            prop_assume!(compared.iter().any(u8::is_ascii_digit));

            let mut buffer = DigitBuffer::new(&number);
            if let Some(matched) = match_rule(&rule, &buffer, view) {
                let before = view.unconsumed(&buffer);
                matched.fill(&mut buffer, PLACEHOLDER);
                prop_assert!(view.unconsumed(&buffer) < before);
            }
        }

        #[test]
        fn prop_match_stays_inside_view(rule in arb_rule(), (number, view) in arb_buffer_view()) {
            let buffer = DigitBuffer::new(&number);
            if let Some(matched) = match_rule(&rule, &buffer, view) {
                prop_assert!(!matched.is_empty());
                prop_assert!(matched.begin() >= view.begin());
                prop_assert_eq!(matched.end(), view.end());
            }
        }
    }

    // ========================================================================
    // Anchor correctness
    // ========================================================================

    proptest! {
        #[test]
        fn prop_terminal_rules_need_right_alignment(rule in arb_rule(), (number, view) in arb_buffer_view()) {
            let buffer = DigitBuffer::new(&number);
            if rule.is_terminal() && !view.right_aligned(&buffer) {
                prop_assert_eq!(match_rule(&rule, &buffer, view), None);
            }
        }

        #[test]
        fn prop_start_rules_need_left_alignment(rule in arb_rule(), (number, view) in arb_buffer_view()) {
            let buffer = DigitBuffer::new(&number);
            if !rule.is_start() {
                return Ok(());
            }
            if let Some(matched) = match_rule(&rule, &buffer, view) {
                prop_assert!(view.left_aligned());
                prop_assert_eq!(matched.begin(), view.begin());
            }
        }
    }
}
