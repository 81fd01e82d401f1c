//! Substring counting over a sliding window.
//!
//! This module provides two implementations of the same contract:
//!
//! - [`count`] - the O(n) amortized two-pointer scan
//! - [`count_naive`] - a direct O(n²) enumeration, kept as the correctness
//!   oracle for differential tests and as the benchmark baseline
//!
//! Both count the contiguous substrings of an input whose number of
//! non-engaged characters stays within a tolerance budget, and both enforce
//! the same preconditions through the unified [`CountError`] type.
//!
//! # Unified Error Handling
//!
//! Every failure path in this module is an invalid precondition: an empty
//! input, or a character the engagement table cannot represent. Both
//! implementations validate up front and fail fast rather than produce a
//! wrong count.
//!
//! # Example
//!
//! ```rust
//! use finestra::engagement::Engagement;
//! use finestra::window;
//!
//! let engagement = Engagement::none().engage_all("ab");
//!
//! // Every letter of "abba" is engaged, so all 10 substrings qualify.
//! assert_eq!(window::count("abba", &engagement, 0).unwrap(), 10);
//!
//! // The oracle agrees by construction.
//! assert_eq!(window::count_naive("abba", &engagement, 0).unwrap(), 10);
//! ```

mod error;
mod naive;
mod sliding;

pub use error::{CountError, Result};
pub use naive::count_naive;
pub use sliding::count;

/// Checks the shared preconditions and hands back the input as raw bytes.
///
/// Returns [`CountError::EmptyInput`] for an empty string and
/// [`CountError::UnsupportedCharacter`] for the first character outside
/// `'a'..='z'`. Validating once up front lets both scans run on unchecked
/// O(1) table lookups.
pub(crate) fn validate(video: &str) -> Result<&[u8]> {
    if video.is_empty() {
        return Err(CountError::EmptyInput);
    }
    if let Some((index, ch)) = video
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_lowercase())
    {
        return Err(CountError::UnsupportedCharacter { ch, index });
    }
    Ok(video.as_bytes())
}
