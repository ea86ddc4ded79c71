//! Preformatted timestamp value used by the report and log generators.
//!
//! The generators are pure functions of their inputs; the clock reading is
//! taken once by the caller and threaded through as a [`Timestamp`], so two
//! renders with the same value are byte-identical. Tests construct frozen
//! values with [`Timestamp::new`].

use chrono::Local;
use std::fmt;

/// Format used throughout generated reports and logs.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An opaque, preformatted local timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    /// Wrap an already-formatted timestamp, typically a frozen test value.
    ///
    /// # Examples
    ///
    /// ```
    /// use coursepack_common::Timestamp;
    ///
    /// let ts = Timestamp::new("2025-02-01 09:30:00");
    /// assert_eq!(ts.as_str(), "2025-02-01 09:30:00");
    /// ```
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read the local clock and format it as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Return the timestamp as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
