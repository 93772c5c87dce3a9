use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Time remaining until a target date. Both fields are negative for past targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: i64,
    pub months: i32,
}

/// Whole days (floored) and calendar months from `now` until `target`.
///
/// Months are counted in the target's calendar and ignore the day of month,
/// so Jan 15 to Feb 1 and Jan 15 to Feb 28 are both one month.
pub fn time_left<Tz, NowTz>(target: &DateTime<Tz>, now: &DateTime<NowTz>) -> TimeLeft
where
    Tz: TimeZone,
    NowTz: TimeZone,
{
    let millis = target
        .clone()
        .signed_duration_since(now.clone())
        .num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);

    let now_local = now.with_timezone(&target.timezone());
    let months = (target.year() - now_local.year()) * 12
        + (target.month() as i32 - now_local.month() as i32);

    TimeLeft { days, months }
}

pub fn time_left_from_now<Tz: TimeZone>(target: &DateTime<Tz>) -> TimeLeft {
    time_left(target, &Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_one_month_ahead() {
        let now = utc("2026-01-15T12:00:00Z");
        let target = utc("2026-02-15T12:00:00Z");
        assert_eq!(time_left(&target, &now), TimeLeft { days: 31, months: 1 });
    }

    #[test]
    fn test_months_ignore_day_of_month() {
        let now = utc("2026-01-15T12:00:00Z");
        let early = utc("2026-02-01T12:00:00Z");
        let late = utc("2026-02-28T12:00:00Z");
        assert_eq!(time_left(&early, &now).months, 1);
        assert_eq!(time_left(&late, &now).months, 1);
    }

    #[test]
    fn test_across_year_boundary() {
        let now = utc("2025-12-20T00:00:00Z");
        let target = utc("2026-01-05T00:00:00Z");
        assert_eq!(time_left(&target, &now), TimeLeft { days: 16, months: 1 });
    }

    #[test]
    fn test_partial_day_is_floored() {
        let now = utc("2026-03-01T10:00:00Z");
        let target = utc("2026-03-02T09:00:00Z");
        assert_eq!(time_left(&target, &now).days, 0);
    }

    #[test]
    fn test_past_target_is_negative() {
        let now = utc("2026-03-10T00:00:00Z");
        let target = utc("2026-03-01T00:00:00Z");
        assert_eq!(time_left(&target, &now), TimeLeft { days: -9, months: 0 });

        let an_hour_ago = utc("2026-03-09T23:00:00Z");
        assert_eq!(time_left(&an_hour_ago, &now).days, -1);

        let last_year = utc("2025-11-10T00:00:00Z");
        assert_eq!(time_left(&last_year, &now).months, -4);
    }

    #[test]
    fn test_months_use_target_calendar() {
        let plus_ten = FixedOffset::east_opt(10 * 3600).unwrap();
        // 2026-02-01 06:00 in +10:00
        let now = utc("2026-01-31T20:00:00Z");
        let target = plus_ten.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap();
        assert_eq!(time_left(&target, &now).months, 0);
    }
}
