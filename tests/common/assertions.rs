//! Domain-specific assertion macros for kex harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* result invariant was violated.

/// Assert that a search outcome carries exactly the given lines, in order.
///
/// ```rust
/// assert_lines!(outcome, ["Boss コンパクトエフェクターを購入しました"]);
/// ```
#[macro_export]
macro_rules! assert_lines {
    ($outcome:expr, [$($line:expr),* $(,)?]) => {{
        let outcome: &kex_core::SearchOutcome = &$outcome;
        let expected: Vec<&str> = vec![$($line),*];
        match outcome {
            kex_core::SearchOutcome::Matches(lines) => {
                let actual: Vec<&str> = lines.iter().map(String::as_str).collect();
                pretty_assertions::assert_eq!(actual, expected);
            }
            other => panic!(
                "assert_lines! failed: expected matches {:?}\n  got: {:?}",
                expected, other
            ),
        }
    }};
}

/// Assert that a result slice is strictly ascending (sorted, no duplicates).
pub fn assert_sorted_distinct(lines: &[String]) {
    for pair in lines.windows(2) {
        assert!(
            pair[0] < pair[1],
            "results not strictly ascending: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}
