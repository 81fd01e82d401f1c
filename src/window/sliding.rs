//! The amortized two-pointer counting scan.
//!
//! This is the production implementation of the counting contract. It visits
//! each input position at most twice (once per pointer), so the scan is O(n)
//! time and O(1) space regardless of the tolerance budget.

use crate::engagement::Engagement;
use crate::window::{validate, Result};

/// Counts the contiguous substrings of `video` containing at most
/// `tolerance` non-engaged characters.
///
/// Substrings are counted by position, not by content: `"aa"` has three
/// substrings (`"a"`, `"a"`, `"aa"`), two of which are equal as strings.
/// The result is bounded by `n * (n + 1) / 2` for an input of length `n`.
///
/// # Algorithm
///
/// The scan maintains a candidate window `[left, right)` and a running tally
/// of the non-engaged characters inside it, seeded from the single-character
/// window `[0, 1)`. Each round of the main loop runs three phases in a fixed
/// order:
///
/// 1. **Expand**: while the tally is within budget, credit `right - left`
///    substrings (those ending at `right` and starting in `[left, right]`)
///    and advance `right`, tallying the character it consumes.
/// 2. **Contract**: while over budget, advance `left` past engaged
///    characters; removing them cannot bring the tally back down.
/// 3. **Slide**: advance `left` once more and decrement the tally
///    unconditionally. This retires the non-engaged character that broke
///    the budget, or the leftmost character when the expand phase ran off
///    the end of the input.
///
/// After the loop a trailing fix-up credits `right - left` once more if the
/// final window is still within budget. The phase ordering is exact:
/// expanding fully before contracting, then the single unconditional slide.
/// The slide may drive the tally one below zero on the way out of the loop,
/// which is why it is kept signed internally.
///
/// # Errors
///
/// - [`CountError::EmptyInput`](crate::window::CountError::EmptyInput) if
///   `video` is empty.
/// - [`CountError::UnsupportedCharacter`](crate::window::CountError::UnsupportedCharacter)
///   if `video` contains anything outside `'a'..='z'`.
///
/// # Examples
///
/// The original motivating scenario: no letter is engaged and up to two
/// non-engaged characters are tolerated, so every substring of `"str"`
/// qualifies except the full three-letter string:
///
/// ```rust
/// use finestra::engagement::Engagement;
/// use finestra::window;
///
/// assert_eq!(window::count("str", &Engagement::none(), 2).unwrap(), 5);
/// ```
///
/// With `'a'` engaged, `"abab"` has eight substrings holding at most one
/// `'b'`:
///
/// ```rust
/// use finestra::engagement::Engagement;
/// use finestra::window;
///
/// let engagement = Engagement::none().engage('a');
/// assert_eq!(window::count("abab", &engagement, 1).unwrap(), 8);
/// ```
pub fn count(video: &str, engagement: &Engagement, tolerance: usize) -> Result<u64> {
    let bytes = validate(video)?;
    let n = bytes.len();
    let budget = i64::try_from(tolerance).unwrap_or(i64::MAX);

    // Seed the tally as if the single-character window [0, 1) already exists.
    let mut tally = i64::from(!engagement.engaged_byte(bytes[0]));
    let mut left = 0;
    let mut right = 1;
    let mut total: u64 = 0;

    while left < n && right < n {
        // Expand: credit the substrings ending at `right` while within budget.
        while right < n && tally <= budget {
            total += (right - left) as u64;
            if !engagement.engaged_byte(bytes[right]) {
                tally += 1;
            }
            right += 1;
        }

        // Contract: engaged characters at the left edge cannot repair the budget.
        while left < n && tally > budget && engagement.engaged_byte(bytes[left]) {
            left += 1;
        }

        // Slide: retire one more character, tally included.
        left += 1;
        tally -= 1;
    }

    if tally <= budget {
        total += (right - left) as u64;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{count_naive, CountError};
    use proptest::prelude::*;

    /// Total number of substrings of an input of length `n`.
    fn all_substrings(n: u64) -> u64 {
        n * (n + 1) / 2
    }

    fn engagement_from_mask(mask: u32) -> Engagement {
        ('a'..='z')
            .enumerate()
            .fold(Engagement::none(), |table, (idx, ch)| {
                if mask & (1 << idx) != 0 {
                    table.engage(ch)
                } else {
                    table
                }
            })
    }

    #[test]
    fn test_original_scenario() {
        // Nothing engaged, tolerance 2: only the full "str" exceeds budget.
        assert_eq!(count("str", &Engagement::none(), 2).unwrap(), 5);
    }

    #[test]
    fn test_all_engaged_counts_every_substring() {
        assert_eq!(count("aaaa", &Engagement::all(), 2).unwrap(), 10);
        assert_eq!(count("aaaa", &Engagement::all(), 0).unwrap(), 10);
        assert_eq!(
            count("abcdefghij", &Engagement::all(), 0).unwrap(),
            all_substrings(10)
        );
    }

    #[test]
    fn test_none_engaged_zero_tolerance() {
        assert_eq!(count("abc", &Engagement::none(), 0).unwrap(), 0);
    }

    #[test]
    fn test_none_engaged_tolerance_at_least_length() {
        assert_eq!(count("abc", &Engagement::none(), 3).unwrap(), all_substrings(3));
        assert_eq!(count("abc", &Engagement::none(), 10).unwrap(), all_substrings(3));
    }

    #[test]
    fn test_abab_one_b_tolerated() {
        // All 10 substrings of "abab", minus "abab" and "bab" (two 'b's each).
        let engagement = Engagement::none().engage('a');
        assert_eq!(count("abab", &engagement, 1).unwrap(), 8);
    }

    #[test]
    fn test_single_character() {
        assert_eq!(count("q", &Engagement::all(), 0).unwrap(), 1);
        assert_eq!(count("q", &Engagement::none(), 0).unwrap(), 0);
        assert_eq!(count("q", &Engagement::none(), 1).unwrap(), 1);
    }

    #[test]
    fn test_non_engaged_suffix() {
        // The budget breaks mid-string rather than at the end.
        let engagement = Engagement::none().engage('a');
        // "aabbb": substrings with at most one 'b'.
        assert_eq!(count("aabbb", &engagement, 1).unwrap(), count_naive("aabbb", &engagement, 1).unwrap());
    }

    #[test]
    fn test_monotone_in_tolerance() {
        let engagement = Engagement::none().engage_all("ac");
        let input = "abcacbba";
        let mut previous = 0;
        for tolerance in 0..=input.len() {
            let current = count(input, &engagement, tolerance).unwrap();
            assert!(current >= previous, "tolerance {tolerance} decreased the count");
            previous = current;
        }
        assert_eq!(previous, all_substrings(input.len() as u64));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            count("", &Engagement::all(), 0).unwrap_err(),
            CountError::EmptyInput
        );
    }

    #[test]
    fn test_unsupported_character() {
        assert_eq!(
            count("abCd", &Engagement::all(), 1).unwrap_err(),
            CountError::UnsupportedCharacter { ch: 'C', index: 2 }
        );
    }

    #[test]
    fn test_unsupported_character_multibyte() {
        // 'ï' starts at byte index 2 and is reported as a whole character.
        assert_eq!(
            count("naïve", &Engagement::all(), 1).unwrap_err(),
            CountError::UnsupportedCharacter { ch: 'ï', index: 2 }
        );
    }

    proptest! {
        #[test]
        fn prop_matches_naive_oracle(
            input in "[a-z]{1,12}",
            mask in 0u32..(1 << 26),
            tolerance in 0usize..=12,
        ) {
            let engagement = engagement_from_mask(mask);
            prop_assert_eq!(
                count(&input, &engagement, tolerance).unwrap(),
                count_naive(&input, &engagement, tolerance).unwrap()
            );
        }

        #[test]
        fn prop_monotone_in_tolerance(
            input in "[a-z]{1,12}",
            mask in 0u32..(1 << 26),
            tolerance in 0usize..12,
        ) {
            let engagement = engagement_from_mask(mask);
            let lower = count(&input, &engagement, tolerance).unwrap();
            let higher = count(&input, &engagement, tolerance + 1).unwrap();
            prop_assert!(lower <= higher);
        }

        #[test]
        fn prop_bounded_by_total_substrings(
            input in "[a-z]{1,12}",
            mask in 0u32..(1 << 26),
            tolerance in 0usize..=12,
        ) {
            let engagement = engagement_from_mask(mask);
            let counted = count(&input, &engagement, tolerance).unwrap();
            prop_assert!(counted <= all_substrings(input.len() as u64));
        }
    }
}
