//! This module implements `CalendarDate` and any directly related algorithms.

use core::cmp::Ordering;

use crate::{
    components::{Timestamp, Weekday},
    convert,
    host::HostClock,
    options::Unit,
    utils, ChronalError, ChronalResult, ChronalUnwrap, MAX_YEAR, SECONDS_PER_DAY,
};

/// The calendar system of a `CalendarDate`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Calendar {
    /// The proleptic Gregorian calendar.
    #[default]
    Gregorian,
}

impl Calendar {
    /// Returns the identifier of this calendar.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
        }
    }
}

/// A date in the proleptic Gregorian calendar.
///
/// Construction with [`CalendarDate::new`] does not validate; a date such as
/// February 30th can be built and inspected with [`CalendarDate::is_valid`].
/// Day counts treat an out of range day or month as rolling over into the
/// following months, and every date produced by a shift is valid.
///
/// ```rust
/// use chronal::{options::Unit, CalendarDate};
///
/// let date = CalendarDate::new(2021, 1, 3);
/// assert!(date.is_valid());
/// assert_eq!(date.day_of_year(), 3);
/// assert_eq!(date.weekday(), 7);
/// assert_eq!(date.iso_week(), (2020, 53));
///
/// let later = CalendarDate::new(2021, 3, 1);
/// assert_eq!(date.diff(&later, Unit::Day).unwrap(), 57);
/// assert_eq!(date.diff(&later, Unit::Month).unwrap(), 2);
/// ```
///
/// `Ord` follows the day count, like [`CalendarDate::compare`]. Two
/// different fields that name the same day, such as 2021-02-29 and
/// 2021-03-01, are unequal, so they are ordered by their fields.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
    calendar: Calendar,
}

/// A value a `CalendarDate` can be compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareTarget {
    /// Another date.
    Date(CalendarDate),
    /// 1970-01-01.
    Epoch,
    /// The era origin, 0000-01-01.
    Zero,
    /// Before every date.
    DistantPast,
    /// After every date.
    DistantFuture,
}

impl From<CalendarDate> for CompareTarget {
    fn from(value: CalendarDate) -> Self {
        Self::Date(value)
    }
}

impl From<&CalendarDate> for CompareTarget {
    fn from(value: &CalendarDate) -> Self {
        Self::Date(*value)
    }
}

/// A set of `CalendarDate` fields to overwrite.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl PartialDate {
    /// Creates an empty `PartialDate`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            year: None,
            month: None,
            day: None,
        }
    }

    #[must_use]
    pub const fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub const fn with_month(mut self, month: Option<u8>) -> Self {
        self.month = month;
        self
    }

    #[must_use]
    pub const fn with_day(mut self, day: Option<u8>) -> Self {
        self.day = day;
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

// ==== Private API ====

impl CalendarDate {
    /// Returns this date rebuilt from its day count, which rolls an out of
    /// range month or day over into a valid date.
    pub(crate) fn balance(&self) -> ChronalResult<Self> {
        Self::from_day_count(self.to_day_count())
    }

    /// Creates a date from a balanced year, month and day, checking the
    /// supported year range.
    pub(crate) fn from_balanced(year: i64, month: u8, day: u8) -> ChronalResult<Self> {
        crate::chronal_assert!(
            (1..=12).contains(&month) && day >= 1,
            "unbalanced month or day: {year}-{month}-{day}"
        );
        if !(0..=i64::from(MAX_YEAR)).contains(&year) {
            return Err(ChronalError::range().with_message(alloc::format!(
                "year {year} is outside of the supported range 0..={MAX_YEAR}"
            )));
        }
        let year = i32::try_from(year).ok().chronal_unwrap()?;
        Ok(Self::new(year, month, day))
    }
}

// ==== Public API ====

impl CalendarDate {
    /// Creates a new `CalendarDate` without validating it.
    #[inline]
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            calendar: Calendar::Gregorian,
        }
    }

    /// Creates a new `CalendarDate`, failing with `InvalidDate` when it
    /// does not exist.
    pub fn try_new(year: i32, month: u8, day: u8) -> ChronalResult<Self> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// The era origin, 0000-01-01.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 1, 1)
    }

    /// The Unix epoch, 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn epoch() -> Self {
        Self::new(1970, 1, 1)
    }

    /// Returns the current date according to `clock`.
    pub fn today(clock: &impl HostClock) -> ChronalResult<Self> {
        Self::from_timestamp(&Timestamp::now(clock)?)
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Returns whether `year` is a leap year.
    #[inline]
    #[must_use]
    pub fn is_leap_year(year: i32) -> bool {
        utils::is_leap_year(year)
    }

    /// Returns the number of days in this date's year.
    #[inline]
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        utils::days_in_year(self.year)
    }

    /// Returns the number of days in `month` of `year`.
    ///
    /// ```rust
    /// use chronal::CalendarDate;
    ///
    /// assert_eq!(CalendarDate::days_in_month(2020, 2).unwrap(), 29);
    /// assert_eq!(CalendarDate::days_in_month(1900, 2).unwrap(), 28);
    /// assert!(CalendarDate::days_in_month(2020, 13).is_err());
    /// ```
    pub fn days_in_month(year: i32, month: u8) -> ChronalResult<u8> {
        if !(1..=12).contains(&month) {
            return Err(ChronalError::invalid_argument()
                .with_message(alloc::format!("{month} is not a valid month")));
        }
        Ok(utils::iso_days_in_month(year, month))
    }

    /// Returns whether this date exists within the supported year range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0..=MAX_YEAR).contains(&self.year)
            && (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= utils::iso_days_in_month(self.year, self.month)
    }

    /// Fails with `InvalidDate` unless this date is valid.
    pub fn validate(&self) -> ChronalResult<()> {
        if !self.is_valid() {
            return Err(ChronalError::invalid_date()
                .with_message(alloc::format!("{self} is not a valid date")));
        }
        Ok(())
    }

    /// Returns the number of days since the era origin.
    #[must_use]
    pub fn to_day_count(&self) -> i64 {
        utils::gregorian_to_era_days(
            self.year.into(),
            self.month.into(),
            self.day.into(),
        )
    }

    /// Creates a date from a number of days since the era origin.
    pub fn from_day_count(days: i64) -> ChronalResult<Self> {
        let (year, month, day) = utils::era_days_to_gregorian(days);
        Self::from_balanced(year, month, day)
    }

    /// Returns the seconds from the era origin to midnight of this date.
    #[must_use]
    pub fn to_absolute_seconds(&self) -> i64 {
        self.to_day_count() * SECONDS_PER_DAY
    }

    /// Creates the date holding the second `seconds` after the era origin.
    pub fn from_absolute_seconds(seconds: i64) -> ChronalResult<Self> {
        Self::from_day_count(seconds.div_euclid(SECONDS_PER_DAY))
    }

    /// Returns midnight of this date as a `Timestamp` from the era origin.
    pub fn to_timestamp(&self) -> ChronalResult<Timestamp> {
        Timestamp::from_whole(self.to_day_count().into(), Unit::Day)
    }

    /// Creates the date holding `timestamp`.
    pub fn from_timestamp(timestamp: &Timestamp) -> ChronalResult<Self> {
        let days = i64::try_from(timestamp.to_whole(Unit::Day)?)
            .map_err(|_| ChronalError::range().with_message("day count exceeds the valid range."))?;
        Self::from_day_count(days)
    }

    /// Returns the ordinal day of this date within its year, 1 for
    /// January 1st.
    ///
    /// An out of range day or month rolls over first, so the result is
    /// always within `1..=366`.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        let days = self.to_day_count();
        let (year, _, _) = utils::era_days_to_gregorian(days);
        // NOTE: a balanced date is at most 365 days past January 1st.
        (days - utils::era_days_for_year(year) + 1) as u16
    }

    /// Returns the ISO weekday, 1 for Monday through 7 for Sunday.
    #[must_use]
    pub fn weekday(&self) -> u8 {
        utils::era_days_to_weekday(self.to_day_count())
    }

    /// Returns the weekday of this date.
    #[must_use]
    pub fn weekday_enum(&self) -> Weekday {
        Weekday::from_iso_weekday(self.weekday())
    }

    /// Returns the ISO week-numbering year and week of this date.
    ///
    /// The first days of January can belong to the last week of the prior
    /// year and the last days of December to week 1 of the next.
    #[must_use]
    pub fn iso_week(&self) -> (i32, u8) {
        let (year, week) = utils::era_days_to_iso_week(self.to_day_count());
        // NOTE: the ISO year is at most one off the calendar year.
        (year as i32, week)
    }

    /// Returns the ISO `(year, week, weekday)` of this date.
    #[must_use]
    pub fn iso_triplet(&self) -> (i32, u8, u8) {
        let (year, week) = self.iso_week();
        (year, week, self.weekday())
    }

    /// Compares this date against `other` by day count.
    ///
    /// ```rust
    /// use chronal::{CalendarDate, CompareTarget};
    /// use core::cmp::Ordering;
    ///
    /// let date = CalendarDate::new(1969, 12, 31);
    /// assert_eq!(date.compare(CompareTarget::Epoch), Ordering::Less);
    /// assert_eq!(date.compare(CompareTarget::DistantPast), Ordering::Greater);
    /// assert_eq!(date.compare(date) as i8, 0);
    /// ```
    pub fn compare(&self, other: impl Into<CompareTarget>) -> Ordering {
        let other = match other.into() {
            CompareTarget::Date(date) => date,
            CompareTarget::Epoch => Self::epoch(),
            CompareTarget::Zero => Self::zero(),
            CompareTarget::DistantPast => return Ordering::Greater,
            CompareTarget::DistantFuture => return Ordering::Less,
        };
        self.to_day_count().cmp(&other.to_day_count())
    }

    /// Returns `other - self` in whole `unit`s.
    ///
    /// Units below a day are measured between the midnights of both dates.
    /// Weeks truncate toward zero. Months and years only look at the month
    /// and year fields.
    pub fn diff(&self, other: &Self, unit: Unit) -> ChronalResult<i64> {
        let result = match unit {
            Unit::Microsecond | Unit::Millisecond | Unit::Second | Unit::Minute | Unit::Hour => {
                let seconds = other.to_absolute_seconds() - self.to_absolute_seconds();
                convert::convert_exact(seconds.into(), Unit::Second, unit)?
            }
            Unit::Day => (other.to_day_count() - self.to_day_count()).into(),
            Unit::Week => ((other.to_day_count() - self.to_day_count()) / 7).into(),
            Unit::Month => {
                (i128::from(other.year) - i128::from(self.year)) * 12
                    + (i128::from(other.month) - i128::from(self.month))
            }
            Unit::Year => i128::from(other.year) - i128::from(self.year),
        };
        i64::try_from(result)
            .map_err(|_| ChronalError::range().with_message("difference exceeds the valid range."))
    }

    /// Returns this date with the fields of `partial` overwritten.
    ///
    /// The result is not validated.
    #[must_use]
    pub fn with(&self, partial: PartialDate) -> Self {
        Self::new(
            partial.year.unwrap_or(self.year),
            partial.month.unwrap_or(self.month),
            partial.day.unwrap_or(self.day),
        )
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_day_count()
            .cmp(&other.to_day_count())
            .then_with(|| (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day)))
            .then_with(|| self.calendar.cmp(&other.calendar))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, host::FixedClock, UNIX_EPOCH_DAYS};
    use alloc::string::ToString;

    #[test]
    fn validation() {
        assert!(CalendarDate::new(2020, 2, 29).is_valid());
        assert!(!CalendarDate::new(2021, 2, 29).is_valid());
        assert!(!CalendarDate::new(2021, 4, 31).is_valid());
        assert!(!CalendarDate::new(2021, 0, 1).is_valid());
        assert!(!CalendarDate::new(2021, 13, 1).is_valid());
        assert!(!CalendarDate::new(2021, 1, 0).is_valid());
        assert!(!CalendarDate::new(-1, 1, 1).is_valid());
        assert!(CalendarDate::new(MAX_YEAR, 12, 31).is_valid());
        assert!(!CalendarDate::new(MAX_YEAR + 1, 1, 1).is_valid());

        let err = CalendarDate::try_new(2021, 2, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(
            err.to_string(),
            "InvalidDate: 2021-02-30 is not a valid date"
        );
    }

    #[test]
    fn sentinels() {
        assert_eq!(CalendarDate::zero().to_day_count(), 0);
        assert_eq!(CalendarDate::epoch().to_day_count(), UNIX_EPOCH_DAYS);
        assert_eq!(CalendarDate::epoch().weekday_enum(), Weekday::Thursday);
        assert_eq!(CalendarDate::zero().weekday_enum(), Weekday::Saturday);
    }

    #[test]
    fn today_uses_the_clock() {
        let clock = FixedClock::from_epoch_seconds(1_609_459_200);
        assert_eq!(
            CalendarDate::today(&clock).unwrap(),
            CalendarDate::new(2021, 1, 1)
        );
        let clock = FixedClock::from_epoch_seconds(-1);
        assert_eq!(
            CalendarDate::today(&clock).unwrap(),
            CalendarDate::new(1969, 12, 31)
        );
        assert_eq!(CalendarDate::today(&()).unwrap(), CalendarDate::epoch());
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(CalendarDate::new(2021, 1, 1).day_of_year(), 1);
        assert_eq!(CalendarDate::new(2021, 12, 31).day_of_year(), 365);
        assert_eq!(CalendarDate::new(2020, 12, 31).day_of_year(), 366);
        assert_eq!(CalendarDate::new(2020, 6, 1).days_in_year(), 366);
        assert_eq!(CalendarDate::new(2100, 6, 1).days_in_year(), 365);
        assert_eq!(CalendarDate::new(2020, 3, 1).day_of_year(), 61);
        // Out of range fields roll over before counting.
        assert_eq!(CalendarDate::new(2021, 0, 0).day_of_year(), 335);
        assert_eq!(CalendarDate::new(2021, 2, 30).day_of_year(), 61);
        assert_eq!(CalendarDate::new(2021, 13, 1).day_of_year(), 1);
    }

    #[test]
    fn ordering_follows_day_count() {
        let overflowed = CalendarDate::new(2021, 2, 29);
        let rolled = CalendarDate::new(2021, 3, 1);
        assert_eq!(overflowed.compare(rolled), Ordering::Equal);
        assert_ne!(overflowed, rolled);
        assert!(CalendarDate::new(2021, 2, 30) > rolled);
        assert!(CalendarDate::new(2021, 1, 32) < CalendarDate::new(2021, 2, 2));
        assert!(CalendarDate::new(2021, 1, 32) > CalendarDate::new(2021, 1, 31));
        assert!(CalendarDate::new(2020, 12, 31) < CalendarDate::new(2021, 1, 1));
    }

    #[test]
    fn iso_weeks() {
        assert_eq!(CalendarDate::epoch().iso_week(), (1970, 1));
        assert_eq!(CalendarDate::epoch().weekday(), 4);
        assert_eq!(CalendarDate::new(2021, 1, 4).iso_triplet(), (2021, 1, 1));
        assert_eq!(CalendarDate::new(2024, 12, 30).iso_triplet(), (2025, 1, 1));
        assert_eq!(CalendarDate::new(2009, 12, 31).iso_triplet(), (2009, 53, 4));
        assert_eq!(CalendarDate::new(2010, 1, 3).iso_triplet(), (2009, 53, 7));
    }

    #[test]
    fn comparisons() {
        let a = CalendarDate::new(2021, 5, 1);
        let b = CalendarDate::new(2021, 5, 2);
        assert_eq!(a.compare(b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(a) as i8, 0);
        assert_eq!(a.compare(CompareTarget::Epoch), Ordering::Greater);
        assert_eq!(a.compare(CompareTarget::Zero), Ordering::Greater);
        assert_eq!(CalendarDate::zero().compare(CompareTarget::Zero), Ordering::Equal);
        assert_eq!(
            CalendarDate::zero().compare(CompareTarget::DistantPast),
            Ordering::Greater
        );
        assert_eq!(
            CalendarDate::new(MAX_YEAR, 12, 31).compare(CompareTarget::DistantFuture),
            Ordering::Less
        );
        // Invalid dates compare through their rolled over day count.
        assert_eq!(
            CalendarDate::new(2021, 2, 29).compare(CalendarDate::new(2021, 3, 1)),
            Ordering::Equal
        );
    }

    #[test]
    fn differences() {
        let a = CalendarDate::new(2020, 1, 31);
        let b = CalendarDate::new(2021, 3, 1);
        assert_eq!(a.diff(&b, Unit::Day).unwrap(), 395);
        assert_eq!(b.diff(&a, Unit::Day).unwrap(), -395);
        assert_eq!(a.diff(&b, Unit::Week).unwrap(), 56);
        assert_eq!(b.diff(&a, Unit::Week).unwrap(), -56);
        assert_eq!(a.diff(&b, Unit::Month).unwrap(), 14);
        assert_eq!(a.diff(&b, Unit::Year).unwrap(), 1);
        assert_eq!(a.diff(&b, Unit::Hour).unwrap(), 395 * 24);
        assert_eq!(a.diff(&b, Unit::Second).unwrap(), 395 * 86_400);
        assert_eq!(
            a.diff(&b, Unit::Microsecond).unwrap(),
            395 * 86_400 * 1_000_000
        );
        assert_eq!(
            CalendarDate::zero()
                .diff(&CalendarDate::new(MAX_YEAR, 1, 1), Unit::Microsecond)
                .unwrap_err()
                .kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn compare_agrees_with_diff() {
        let dates = [
            CalendarDate::new(1969, 12, 31),
            CalendarDate::new(2000, 2, 29),
            CalendarDate::new(2000, 3, 1),
            CalendarDate::zero(),
        ];
        for a in dates {
            for b in dates {
                let diff = a.diff(&b, Unit::Day).unwrap();
                assert_eq!(a.compare(b), 0.cmp(&diff), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn day_count_conversions() {
        let date = CalendarDate::new(2000, 1, 1);
        assert_eq!(date.to_day_count(), 730_485);
        assert_eq!(CalendarDate::from_day_count(730_485).unwrap(), date);
        assert_eq!(date.to_absolute_seconds(), 730_485 * 86_400);
        assert_eq!(
            CalendarDate::from_absolute_seconds(730_485 * 86_400 - 1).unwrap(),
            CalendarDate::new(1999, 12, 31)
        );
        let ts = date.to_timestamp().unwrap();
        assert_eq!(CalendarDate::from_timestamp(&ts).unwrap(), date);
        assert_eq!(
            CalendarDate::from_day_count(-1).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn overwriting_fields() {
        let date = CalendarDate::new(2021, 1, 31);
        let partial = PartialDate::new().with_month(Some(2));
        let set = date.with(partial);
        assert_eq!(set, CalendarDate::new(2021, 2, 31));
        assert!(!set.is_valid());
        assert_eq!(date.with(PartialDate::new()), date);
        assert!(PartialDate::new().is_empty());
        assert_eq!(
            date.with(PartialDate::new().with_year(Some(1999)).with_day(Some(1))),
            CalendarDate::new(1999, 1, 1)
        );
    }

    #[test]
    fn display() {
        assert_eq!(CalendarDate::new(2021, 3, 5).to_string(), "2021-03-05");
        assert_eq!(CalendarDate::zero().to_string(), "0000-01-01");
        assert_eq!(CalendarDate::new(12_345, 6, 7).to_string(), "+012345-06-07");
        assert_eq!(CalendarDate::new(-1, 6, 7).to_string(), "-000001-06-07");
    }
}
