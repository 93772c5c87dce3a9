use chrono::{DateTime, FixedOffset, Utc};
use zyntro_domain::time_left;

use crate::cli::TimeLeftArgs;
use crate::output;

/// Parses RFC 3339 keeping its offset; a bare date is midnight UTC.
fn parse_datetime(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| ())
                .and_then(|d| d.and_hms_opt(0, 0, 0).ok_or(()))
                .map(|dt| dt.and_utc().fixed_offset())
        })
        .map_err(|_| {
            format!(
                "Invalid date '{}'. Supported formats: YYYY-MM-DD or RFC 3339 (e.g., 2026-01-15T10:30:00Z)",
                s
            )
        })
}

pub fn handle(args: TimeLeftArgs) -> anyhow::Result<()> {
    let target = parse_datetime(&args.date).map_err(anyhow::Error::msg)?;
    let now = match args.now.as_deref() {
        Some(now) => parse_datetime(now).map_err(anyhow::Error::msg)?,
        None => Utc::now().fixed_offset(),
    };
    output::output_success(time_left(&target, &now))
}
