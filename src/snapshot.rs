//! Snapshot types for serializing scan outcomes.
//!
//! This module provides serializable snapshot types that capture the result
//! of a counting scan together with the inputs that produced it.
//!
//! # Feature Flag
//!
//! This module requires the `serde` feature:
//!
//! ```toml
//! [dependencies]
//! finestra = { version = "0.2", features = ["serde"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use finestra::engagement::Engagement;
//! use finestra::snapshot::ScanSnapshot;
//!
//! let engagement = Engagement::none().engage('a');
//! let snapshot = ScanSnapshot::capture("abab", &engagement, 1).unwrap();
//!
//! assert_eq!(snapshot.qualifying, 8);
//! assert_eq!(snapshot.engaged, "a");
//! ```

use serde::{Deserialize, Serialize};

use crate::engagement::Engagement;
use crate::window;

/// A snapshot of a single scan outcome.
///
/// This struct is serializable and can be used for:
/// - Storing scan results to files
/// - Sending results over HTTP APIs
/// - Comparing runs across engagement configurations
///
/// # Examples
///
/// ```rust
/// use finestra::snapshot::ScanSnapshot;
///
/// let snapshot = ScanSnapshot::new("abab", "a", 1, 8);
///
/// let json = serde_json::to_string(&snapshot).unwrap();
/// assert_eq!(
///     json,
///     r#"{"input":"abab","engaged":"a","tolerance":1,"qualifying":8}"#
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanSnapshot {
    /// The scanned input string.
    pub input: String,
    /// The engaged letters, in alphabetical order.
    pub engaged: String,
    /// The tolerance budget the scan ran with.
    pub tolerance: u64,
    /// Number of qualifying substrings.
    pub qualifying: u64,
}

impl ScanSnapshot {
    /// Creates a snapshot from its fields.
    pub fn new(
        input: impl Into<String>,
        engaged: impl Into<String>,
        tolerance: u64,
        qualifying: u64,
    ) -> Self {
        Self {
            input: input.into(),
            engaged: engaged.into(),
            tolerance,
            qualifying,
        }
    }

    /// Runs [`window::count`] and records the outcome.
    ///
    /// # Errors
    ///
    /// Propagates the scan's precondition errors unchanged.
    pub fn capture(
        video: &str,
        engagement: &Engagement,
        tolerance: usize,
    ) -> window::Result<Self> {
        let qualifying = window::count(video, engagement, tolerance)?;
        Ok(Self {
            input: video.to_string(),
            engaged: engagement.engaged_letters().collect(),
            tolerance: tolerance as u64,
            qualifying,
        })
    }

    /// Serializes the snapshot to JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// A collection of scan snapshots, typically representing one batch of
/// inputs scanned under the same engagement configuration.
///
/// # Examples
///
/// ```rust
/// use finestra::snapshot::{ScanReport, ScanSnapshot};
///
/// let report = ScanReport::new(vec![
///     ScanSnapshot::new("abab", "a", 1, 8),
///     ScanSnapshot::new("str", "", 2, 5),
/// ]);
///
/// assert_eq!(report.get("str").unwrap().qualifying, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    /// Optional timestamp in milliseconds since Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// The scan snapshots.
    pub scans: Vec<ScanSnapshot>,
}

impl ScanReport {
    /// Creates a new report with the given snapshots.
    pub fn new(scans: Vec<ScanSnapshot>) -> Self {
        Self {
            timestamp_ms: None,
            scans,
        }
    }

    /// Creates a new report with snapshots and a timestamp.
    pub fn with_timestamp(scans: Vec<ScanSnapshot>, timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms: Some(timestamp_ms),
            scans,
        }
    }

    /// Finds a snapshot by its input string.
    pub fn get(&self, input: &str) -> Option<&ScanSnapshot> {
        self.scans.iter().find(|s| s.input == input)
    }

    /// Scans every input with the same engagement table and tolerance.
    ///
    /// # Errors
    ///
    /// Fails on the first input that violates the scan preconditions; no
    /// partial report is produced.
    pub fn capture_all<'a>(
        inputs: impl IntoIterator<Item = &'a str>,
        engagement: &Engagement,
        tolerance: usize,
    ) -> window::Result<Self> {
        let scans = inputs
            .into_iter()
            .map(|input| ScanSnapshot::capture(input, engagement, tolerance))
            .collect::<window::Result<Vec<_>>>()?;
        Ok(Self::new(scans))
    }

    /// Serializes the report to JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
