//! Competence: the year-month a gazette edition is filed under.
//!
//! [`Competence`] is the pipeline's target selector ("which month are we
//! collecting?") and the string key publications are filtered by in the
//! API (`YYYY-MM`).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A gazette competence: a calendar month identified by year and month.
///
/// Renders as `YYYY-MM` (zero-padded month), the format the publication
/// store indexes on. Construction through [`Competence::new`] or parsing
/// guarantees the month is in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Competence {
    year: i32,
    month: u32,
}

impl Competence {
    /// Creates a competence from a year and a 1-based month.
    ///
    /// Returns `None` when `month` is outside `1..=12`.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Resolves the target competence for a run: exactly one calendar
    /// month before `today`, rolling over the year boundary (a January
    /// date resolves to December of the previous year).
    #[must_use]
    pub fn previous_month(today: NaiveDate) -> Self {
        let (year, month) = match today.month() {
            1 => (today.year() - 1, 12),
            m => (today.year(), m - 1),
        };
        Self { year, month }
    }

    /// The four-digit year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Zero-padded two-digit month string, as the gazette filter form
    /// expects it (`"06"`).
    #[must_use]
    pub fn month_str(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Four-digit year string (`"2025"`).
    #[must_use]
    pub fn year_str(&self) -> String {
        format!("{:04}", self.year)
    }

    /// Whether `date` falls inside this competence: both month and year
    /// must match.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Competence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error parsing a `YYYY-MM` competence string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid competence (expected YYYY-MM): {0}")]
pub struct ParseCompetenceError(
    /// The rejected input.
    pub String,
);

impl FromStr for Competence {
    type Err = ParseCompetenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseCompetenceError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(bad)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(bad());
        }
        let year: i32 = year.parse().map_err(|_| bad())?;
        let month: u32 = month.parse().map_err(|_| bad())?;
        Self::new(year, month).ok_or_else(bad)
    }
}

impl TryFrom<String> for Competence {
    type Error = ParseCompetenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Competence> for String {
    fn from(c: Competence) -> Self {
        c.to_string()
    }
}
