//! Utility date equations for the proleptic Gregorian calendar.
//!
//! Day counts ("era days") are measured from the era origin, 0000-01-01,
//! which is era day 0. The conversions use a computational calendar that
//! starts on March 1st so the leap day is the last day of its year.

use crate::Sign;
#[cfg(test)]
use crate::UNIX_EPOCH_DAYS;

/// Days in a 400 year Gregorian cycle.
const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
/// Era days between 0000-01-01 and 0000-03-01 (year 0 is a leap year).
const MARCH_FIRST_OFFSET: i64 = 60;
/// 0000-01-01 was a Saturday: era day 0 has weekday 6.
const ERA_ORIGIN_WEEKDAY_SHIFT: i64 = 5;

// ==== Begin Date Equations ====

/// Returns whether `year` is a Gregorian leap year.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Mathematically determine the days in a year.
#[inline]
pub(crate) fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the length of `month` in `year`.
///
/// `month` must already be balanced into `1..=12`.
pub(crate) fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + u8::from(is_leap_year(year)),
        _ => unreachable!("iso_days_in_month panicking is an implementation error."),
    }
}

/// Balances a year and a month that may be outside of `1..=12`.
///
/// Month 0 is December of the prior year and month 13 is January of the
/// next year.
#[inline]
pub(crate) fn balance_year_month(year: i64, month: i64) -> (i64, u8) {
    let y = year + (month - 1).div_euclid(12);
    let m = (month - 1).rem_euclid(12) + 1;
    (y, m as u8)
}

/// Returns the era day of the given year, month and day.
///
/// Out of range months and days roll over into neighbouring months, e.g.
/// February 30th is March 2nd (or 1st in a leap year).
pub(crate) fn gregorian_to_era_days(year: i64, month: i64, day: i64) -> i64 {
    let (year, month) = balance_year_month(year, month);
    let month = i64::from(month);
    // Shift to the computational calendar where the year begins in March.
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let month_of_year = (month + 9) % 12;
    let day_of_year = (153 * month_of_year + 2) / 5;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_A_400Y_CYCLE + day_of_era + MARCH_FIRST_OFFSET + day - 1
}

/// Returns the Gregorian `(year, month, day)` of an era day.
pub(crate) fn era_days_to_gregorian(days: i64) -> (i64, u8, u8) {
    let days = days - MARCH_FIRST_OFFSET;
    let era = days.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let day_of_era = days.rem_euclid(DAYS_IN_A_400Y_CYCLE);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_of_year = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_of_year + 2) / 5 + 1;
    let month = if month_of_year < 10 {
        month_of_year + 3
    } else {
        month_of_year - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    // NOTE: month is within 1..=12 and day within 1..=31 by construction.
    (year, month as u8, day as u8)
}

/// Returns the ISO weekday (1 = Monday, 7 = Sunday) of an era day.
#[inline]
pub(crate) fn era_days_to_weekday(days: i64) -> u8 {
    ((days + ERA_ORIGIN_WEEKDAY_SHIFT).rem_euclid(7) + 1) as u8
}

/// Returns the era day of January 1st of `year`.
#[inline]
pub(crate) fn era_days_for_year(year: i64) -> i64 {
    gregorian_to_era_days(year, 1, 1)
}

/// Returns the ISO week-numbering `(year, week)` of an era day.
///
/// Week 1 is the week holding the year's first Thursday, so the Thursday
/// of a date's week always decides which ISO year the date belongs to.
pub(crate) fn era_days_to_iso_week(days: i64) -> (i64, u8) {
    let weekday = i64::from(era_days_to_weekday(days));
    let thursday = days - weekday + 4;
    let (iso_year, _, _) = era_days_to_gregorian(thursday);
    let week = (thursday - era_days_for_year(iso_year)) / 7 + 1;
    (iso_year, week as u8)
}

/// Returns the sign of `value`.
#[inline]
pub(crate) fn sign_of(value: i128) -> Sign {
    Sign::from(value.cmp(&0))
}

// ==== End Date Equations ====
