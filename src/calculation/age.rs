//! Age derivation and birthdate windows.
//!
//! Every age in the crate is computed by [`age_in_years`]. The generator uses
//! [`birthdate_window`] to find the calendar dates whose age falls in an
//! [`AgeRange`], so generated data and reported statistics can never disagree
//! by a year.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{RosterError, RosterResult};

/// Returns the age in whole years of someone born on `birthdate`, evaluated on `on`.
///
/// The year difference is reduced by one while the anniversary of the birth
/// `(month, day)` has not yet been reached in the evaluation year. Someone born
/// on 29 February therefore ages on 1 March in common years.
///
/// # Example
///
/// ```
/// use roster_stats::calculation::age_in_years;
/// use chrono::NaiveDate;
///
/// let birthdate = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
///
/// assert_eq!(age_in_years(birthdate, NaiveDate::from_ymd_opt(2026, 6, 14).unwrap()), 35);
/// assert_eq!(age_in_years(birthdate, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()), 36);
/// ```
pub fn age_in_years(birthdate: NaiveDate, on: NaiveDate) -> i32 {
    let years = on.year() - birthdate.year();
    if (on.month(), on.day()) < (birthdate.month(), birthdate.day()) {
        years - 1
    } else {
        years
    }
}

/// An inclusive range of ages in whole years.
///
/// # Example
///
/// ```
/// use roster_stats::calculation::AgeRange;
///
/// let range = AgeRange::new(18, 65).unwrap();
/// assert!(range.contains(18));
/// assert!(range.contains(65));
/// assert!(!range.contains(66));
///
/// assert!(AgeRange::new(40, 30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    min: u32,
    max: u32,
}

impl AgeRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(min: u32, max: u32) -> RosterResult<Self> {
        if min > max {
            return Err(RosterError::invalid(
                "age.min",
                format!("minimum age {} exceeds maximum age {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    /// The youngest admissible age.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// The oldest admissible age.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns true if `age` lies in the range.
    pub fn contains(&self, age: i32) -> bool {
        i64::from(age) >= i64::from(self.min) && i64::from(age) <= i64::from(self.max)
    }
}

/// Returns the earliest and latest birthdates whose age on `today` lies in `ages`.
///
/// Both bounds are inclusive and every date between them qualifies:
/// - the latest is `today` shifted back `min` years, a birthday falling on `today`
/// - the earliest is the day after `today` shifted back `max + 1` years
///
/// Year shifts that land on 29 February in a common year clamp to 28 February,
/// which keeps both bounds on the correct side of the anniversary.
///
/// # Errors
///
/// Returns `InvalidArgument` when the shifted dates fall outside the
/// representable calendar.
///
/// # Example
///
/// ```
/// use roster_stats::calculation::{AgeRange, birthdate_window};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let (earliest, latest) = birthdate_window(today, AgeRange::new(30, 30).unwrap()).unwrap();
///
/// assert_eq!(earliest, NaiveDate::from_ymd_opt(1995, 10, 18).unwrap());
/// assert_eq!(latest, NaiveDate::from_ymd_opt(1996, 10, 17).unwrap());
/// ```
pub fn birthdate_window(today: NaiveDate, ages: AgeRange) -> RosterResult<(NaiveDate, NaiveDate)> {
    let latest = years_before(today, ages.min)?;
    let earliest = years_before(today, ages.max.saturating_add(1))?
        .checked_add_days(Days::new(1))
        .ok_or_else(|| out_of_calendar(ages.max))?;

    Ok((earliest, latest))
}

fn years_before(date: NaiveDate, years: u32) -> RosterResult<NaiveDate> {
    years
        .checked_mul(12)
        .and_then(|months| date.checked_sub_months(Months::new(months)))
        .ok_or_else(|| out_of_calendar(years))
}

fn out_of_calendar(years: u32) -> RosterError {
    RosterError::invalid(
        "age.max",
        format!("{} years before today is outside the supported calendar", years),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_birthday_month() {
        assert_eq!(age_in_years(date(2000, 8, 10), date(2026, 3, 1)), 25);
    }

    #[test]
    fn test_age_same_month_before_day() {
        assert_eq!(age_in_years(date(2000, 8, 10), date(2026, 8, 9)), 25);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_in_years(date(2000, 8, 10), date(2026, 8, 10)), 26);
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(age_in_years(date(2000, 8, 10), date(2026, 12, 31)), 26);
    }

    #[test]
    fn test_age_leap_day_birthday_in_common_year() {
        let birthdate = date(2004, 2, 29);
        assert_eq!(age_in_years(birthdate, date(2025, 2, 28)), 20);
        assert_eq!(age_in_years(birthdate, date(2025, 3, 1)), 21);
    }

    #[test]
    fn test_age_born_today_is_zero() {
        assert_eq!(age_in_years(date(2026, 10, 17), date(2026, 10, 17)), 0);
    }

    #[test]
    fn test_age_range_rejects_inverted_bounds() {
        match AgeRange::new(50, 20) {
            Err(RosterError::InvalidArgument { field, .. }) => assert_eq!(field, "age.min"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_age_range_allows_single_age() {
        let range = AgeRange::new(42, 42).unwrap();
        assert!(range.contains(42));
        assert!(!range.contains(41));
        assert!(!range.contains(43));
    }

    #[test]
    fn test_age_range_excludes_negative_ages() {
        let range = AgeRange::new(0, 10).unwrap();
        assert!(!range.contains(-1));
    }

    #[test]
    fn test_window_bounds_hit_range_edges() {
        let today = date(2026, 10, 17);
        let ages = AgeRange::new(20, 60).unwrap();

        let (earliest, latest) = birthdate_window(today, ages).unwrap();

        assert_eq!(age_in_years(latest, today), 20);
        assert_eq!(age_in_years(latest + Days::new(1), today), 19);
        assert_eq!(age_in_years(earliest, today), 60);
        assert_eq!(age_in_years(earliest - Days::new(1), today), 61);
    }

    #[test]
    fn test_window_on_leap_day() {
        let today = date(2028, 2, 29);
        let ages = AgeRange::new(1, 1).unwrap();

        let (earliest, latest) = birthdate_window(today, ages).unwrap();

        assert_eq!(latest, date(2027, 2, 28));
        assert_eq!(earliest, date(2026, 3, 1));
        assert_eq!(age_in_years(latest, today), 1);
        assert_eq!(age_in_years(earliest, today), 1);
        assert_eq!(age_in_years(date(2026, 2, 28), today), 2);
    }

    #[test]
    fn test_window_for_zero_age_ends_today() {
        let today = date(2026, 10, 17);
        let (earliest, latest) = birthdate_window(today, AgeRange::new(0, 0).unwrap()).unwrap();

        assert_eq!(latest, today);
        assert_eq!(earliest, date(2025, 10, 18));
    }

    #[test]
    fn test_window_beyond_calendar_is_rejected() {
        let today = date(2026, 10, 17);
        let result = birthdate_window(today, AgeRange::new(0, u32::MAX).unwrap());

        match result {
            Err(RosterError::InvalidArgument { field, .. }) => assert_eq!(field, "age.max"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
