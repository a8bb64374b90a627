//! Timeline bucket resolution for the CLI (`mcx timeline`).
//!
//! Either resolves an explicit bucket key, or finds the bucket containing a
//! date (today by default) at a given granularity, and prints the inclusive
//! date range the timeline view would filter by.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use media_companion_core::timeline::{Granularity, TimelineBucket};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BucketResponse {
    pub bucket: String,
    pub start: String,
    pub end: String,
}

pub fn resolve_bucket(
    bucket: Option<&str>,
    granularity: &str,
    date: Option<&str>,
) -> Result<TimelineBucket> {
    if let Some(key) = bucket {
        return TimelineBucket::parse(key);
    }
    let granularity: Granularity = granularity.parse()?;
    let date = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .with_context(|| format!("Invalid --date '{}', expected YYYY-MM-DD", d))?,
        None => Local::now().date_naive(),
    };
    Ok(TimelineBucket::containing(granularity, date))
}

pub fn describe(bucket: &TimelineBucket) -> Result<BucketResponse> {
    let range = bucket.date_range()?;
    Ok(BucketResponse {
        bucket: bucket.to_string(),
        start: range.start.unwrap_or_default(),
        end: range.end.unwrap_or_default(),
    })
}

pub fn run_timeline(
    bucket: Option<&str>,
    granularity: &str,
    date: Option<&str>,
    json: bool,
) -> Result<()> {
    let resolved = resolve_bucket(bucket, granularity, date)?;
    let resp = describe(&resolved)?;
    if json {
        println!("{}", serde_json::to_string(&resp)?);
    } else {
        println!("bucket: {}", resp.bucket);
        println!("start:  {}", resp.start);
        println!("end:    {}", resp.end);
    }
    Ok(())
}
