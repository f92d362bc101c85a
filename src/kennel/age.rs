//! Calendar-aware age computation.
//!
//! Ages are counted in whole calendar months, the way people count birthdays:
//! a month is complete once the day-of-month of the birth date is reached.
//! Day counts are never averaged.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: u32,
    pub months: u32,
}

impl Age {
    /// Whole years and leftover whole months from `birth` to `today`.
    /// A birth date in the future yields a zero age.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Self {
        let mut total_months = (today.year() - birth.year()) as i64 * 12
            + (today.month() as i64 - birth.month() as i64);
        if today.day() < birth.day() {
            total_months -= 1;
        }

        let total_months = total_months.max(0) as u32;
        Self {
            years: total_months / 12,
            months: total_months % 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age(birth: &str, today: &str) -> (u32, u32) {
        let a = Age::between(birth.parse().unwrap(), today.parse().unwrap());
        (a.years, a.months)
    }

    #[test]
    fn exact_birthday_counts_full_year() {
        assert_eq!(age("2020-01-01", "2026-01-01"), (6, 0));
    }

    #[test]
    fn day_before_birthday_is_still_previous_month() {
        assert_eq!(age("2020-03-15", "2026-03-14"), (5, 11));
        assert_eq!(age("2020-03-15", "2026-03-15"), (6, 0));
    }

    #[test]
    fn short_month_end_does_not_round_up() {
        assert_eq!(age("2024-01-31", "2024-02-29"), (0, 0));
        assert_eq!(age("2024-01-31", "2024-03-31"), (0, 2));
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(age("2026-10-16", "2026-10-16"), (0, 0));
    }

    #[test]
    fn future_birth_date_is_zero() {
        assert_eq!(age("2030-05-01", "2026-10-16"), (0, 0));
    }
}
