//! Timeline periods.
//!
//! The timeline view groups dated items into year, month, or day buckets.
//! Selecting a bucket feeds its inclusive date range into the `date`
//! dimension, so a day bucket becomes a degenerate `BETWEEN` range.
//!
//! Bucket keys are `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, NaiveDate};

use crate::selection::DateRange;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bucket size of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Year,
    Month,
    Day,
}

impl FromStr for Granularity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "year" => Ok(Granularity::Year),
            "month" => Ok(Granularity::Month),
            "day" => Ok(Granularity::Day),
            other => bail!(
                "Unknown timeline granularity: '{}'. Must be year, month, or day.",
                other
            ),
        }
    }
}

/// One bucket of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineBucket {
    Year(i32),
    Month { year: i32, month: u32 },
    Day(NaiveDate),
}

impl TimelineBucket {
    /// Parse a bucket key.
    pub fn parse(key: &str) -> Result<Self> {
        let parts: Vec<&str> = key.split('-').collect();
        match parts.as_slice() {
            [y] => {
                let year = parse_year(y)
                    .with_context(|| format!("Invalid timeline bucket: '{}'", key))?;
                Ok(TimelineBucket::Year(year))
            }
            [y, m] => {
                let year = parse_year(y)
                    .with_context(|| format!("Invalid timeline bucket: '{}'", key))?;
                let month = parse_month(m)
                    .ok_or_else(|| anyhow!("Invalid timeline bucket: '{}' (bad month)", key))?;
                Ok(TimelineBucket::Month { year, month })
            }
            [y, m, d] => {
                let year = parse_year(y)
                    .with_context(|| format!("Invalid timeline bucket: '{}'", key))?;
                let month = parse_month(m)
                    .ok_or_else(|| anyhow!("Invalid timeline bucket: '{}' (bad month)", key))?;
                let day = two_digits(d)
                    .and_then(|d| NaiveDate::from_ymd_opt(year, month, d))
                    .ok_or_else(|| anyhow!("Invalid timeline bucket: '{}' (bad day)", key))?;
                Ok(TimelineBucket::Day(day))
            }
            _ => bail!(
                "Invalid timeline bucket: '{}'. Use YYYY, YYYY-MM, or YYYY-MM-DD.",
                key
            ),
        }
    }

    /// The bucket a date falls in at the given granularity.
    pub fn containing(granularity: Granularity, date: NaiveDate) -> Self {
        match granularity {
            Granularity::Year => TimelineBucket::Year(date.year()),
            Granularity::Month => TimelineBucket::Month {
                year: date.year(),
                month: date.month(),
            },
            Granularity::Day => TimelineBucket::Day(date),
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            TimelineBucket::Year(_) => Granularity::Year,
            TimelineBucket::Month { .. } => Granularity::Month,
            TimelineBucket::Day(_) => Granularity::Day,
        }
    }

    /// First and last day of the bucket, both inclusive.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            TimelineBucket::Year(year) => Some((
                NaiveDate::from_ymd_opt(year, 1, 1)?,
                NaiveDate::from_ymd_opt(year, 12, 31)?,
            )),
            TimelineBucket::Month { year, month } => {
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)?
                };
                Some((first, next.pred_opt()?))
            }
            TimelineBucket::Day(day) => Some((day, day)),
        }
    }

    /// The inclusive date range to feed into the `date` dimension.
    pub fn date_range(&self) -> Result<DateRange> {
        let (start, end) = self
            .bounds()
            .ok_or_else(|| anyhow!("Timeline bucket {} is outside the supported calendar", self))?;
        Ok(DateRange::new(
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        ))
    }
}

impl fmt::Display for TimelineBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineBucket::Year(year) => write!(f, "{:04}", year),
            TimelineBucket::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            TimelineBucket::Day(day) => write!(f, "{}", day.format(DATE_FORMAT)),
        }
    }
}

/// Bucket key for a `YYYY-MM-DD` date at the given granularity.
pub fn bucket_key(granularity: Granularity, date: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .with_context(|| format!("Invalid date: '{}'", date))?;
    Ok(TimelineBucket::containing(granularity, date).to_string())
}

fn parse_year(s: &str) -> Result<i32> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        bail!("year must be four digits");
    }
    Ok(s.parse()?)
}

fn parse_month(s: &str) -> Option<u32> {
    two_digits(s).filter(|n| (1..=12).contains(n))
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
