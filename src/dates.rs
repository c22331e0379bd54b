//! Calendar-month arithmetic shared by the calculators

use chrono::{Datelike, NaiveDate};

/// Count of calendar months from `from` to `to`, counting both endpoints'
/// months. June 15 to December 31 is 7 (June through December). Returns 0
/// when `to` is before `from`.
pub fn months_until_inclusive(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }
    let span = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    (span + 1) as u32
}

/// Count of complete calendar months elapsed between `from` and `to`.
/// June 15 to August 14 is 1; June 15 to August 15 is 2. Returns 0 when
/// `to` is before `from`.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut span = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        span -= 1;
    }
    span.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_until_inclusive() {
        assert_eq!(months_until_inclusive(date(2025, 6, 15), date(2025, 12, 31)), 7);
        assert_eq!(months_until_inclusive(date(2025, 6, 15), date(2025, 6, 20)), 1);
        assert_eq!(months_until_inclusive(date(2025, 11, 1), date(2026, 2, 1)), 4);
        assert_eq!(months_until_inclusive(date(2025, 6, 15), date(2025, 6, 1)), 0);
    }

    #[test]
    fn test_whole_months_between() {
        assert_eq!(whole_months_between(date(2025, 6, 15), date(2025, 8, 14)), 1);
        assert_eq!(whole_months_between(date(2025, 6, 15), date(2025, 8, 15)), 2);
        assert_eq!(whole_months_between(date(2025, 6, 15), date(2026, 6, 15)), 12);
        assert_eq!(whole_months_between(date(2025, 6, 15), date(2025, 6, 15)), 0);
        assert_eq!(whole_months_between(date(2025, 6, 15), date(2025, 1, 1)), 0);
    }
}
