//! Day-count freshness clock.
//!
//! Cache timestamps are whole days elapsed since 2000-01-01. A cached entry
//! is reusable while `today - fetched_day < EXPIRY_DAYS`. This is a
//! freshness window, not a calendar-day check: entries written close to a
//! day boundary may be reused or refetched on either side of it. The day
//! granularity keeps the serialized form a plain integer and avoids any
//! timezone handling.

use chrono::{Datelike, NaiveDate};

/// Number of days a cached entry stays fresh.
pub const EXPIRY_DAYS: i64 = 1;

/// Days from the common era to 2000-01-01, the day-count epoch.
const EPOCH_DAYS_FROM_CE: i64 = 730_120;

/// Day count for a specific date.
#[must_use]
pub fn daycount_on(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Day count for the current local date.
#[must_use]
pub fn today() -> i64 {
    daycount_on(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_day_zero() {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(daycount_on(epoch), 0);
    }

    #[test]
    fn test_known_dates() {
        let next_day = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap();
        assert_eq!(daycount_on(next_day), 1);

        // 2000 was a leap year.
        let one_year = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert_eq!(daycount_on(one_year), 366);
    }

    #[test]
    fn test_today_is_positive() {
        assert!(today() > 0);
    }
}
