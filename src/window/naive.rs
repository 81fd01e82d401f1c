//! Brute-force reference oracle.
//!
//! A direct O(n²) enumeration of the counting contract. It exists to pin
//! down the two-pointer scan: the differential tests compare the two on
//! randomized inputs, and the bench suite measures the gap between them.

use crate::engagement::Engagement;
use crate::window::{validate, Result};

/// Counts qualifying substrings by enumerating every start position.
///
/// Same contract and error behavior as [`count`](crate::window::count), but
/// O(n²): for each start index the end index is extended while the running
/// tally of non-engaged characters stays within `tolerance`. Once the tally
/// breaks the budget no longer substring from the same start can qualify, so
/// the inner walk stops there.
///
/// # Examples
///
/// ```rust
/// use finestra::engagement::Engagement;
/// use finestra::window;
///
/// let engagement = Engagement::none().engage('a');
/// assert_eq!(window::count_naive("abab", &engagement, 1).unwrap(), 8);
/// ```
pub fn count_naive(video: &str, engagement: &Engagement, tolerance: usize) -> Result<u64> {
    let bytes = validate(video)?;
    let n = bytes.len();
    let mut total: u64 = 0;

    for start in 0..n {
        let mut tally = 0;
        for &byte in &bytes[start..] {
            if !engagement.engaged_byte(byte) {
                tally += 1;
            }
            if tally > tolerance {
                break;
            }
            total += 1;
        }
    }

    Ok(total)
}
