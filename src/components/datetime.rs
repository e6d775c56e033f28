//! This module implements `DateTime`, a `CalendarDate` with a wall-clock
//! `Time`.

use num_traits::Euclid;

use crate::{
    components::{CalendarDate, Timestamp},
    host::HostClock,
    ChronalError, ChronalResult, MICROSECONDS_PER_DAY, MICROSECONDS_PER_SECOND, SECONDS_PER_DAY,
};

/// A wall-clock time of day with microsecond precision.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

impl Time {
    /// Creates a new `Time` without validating it.
    #[inline]
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, microsecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Creates a new `Time`, failing with `InvalidArgument` when a field is
    /// out of range.
    pub fn try_new(hour: u8, minute: u8, second: u8, microsecond: u32) -> ChronalResult<Self> {
        let time = Self::new(hour, minute, second, microsecond);
        if !time.is_valid() {
            return Err(ChronalError::invalid_argument()
                .with_message(alloc::format!("{time} is not a valid time")));
        }
        Ok(time)
    }

    /// Midnight, 00:00:00.
    #[inline]
    #[must_use]
    pub const fn midnight() -> Self {
        Self::new(0, 0, 0, 0)
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.microsecond
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.hour < 24
            && self.minute < 60
            && self.second < 60
            && i64::from(self.microsecond) < MICROSECONDS_PER_SECOND
    }

    /// Returns the microseconds since midnight. Out of range fields are
    /// folded in linearly.
    #[must_use]
    pub fn to_microseconds(&self) -> i64 {
        let seconds =
            (i64::from(self.hour) * 60 + i64::from(self.minute)) * 60 + i64::from(self.second);
        seconds * MICROSECONDS_PER_SECOND + i64::from(self.microsecond)
    }

    /// Creates a `Time` from microseconds since midnight in
    /// `0..MICROSECONDS_PER_DAY`.
    pub(crate) fn from_microseconds(micros: i64) -> Self {
        let (seconds, microsecond) = micros.div_rem_euclid(&MICROSECONDS_PER_SECOND);
        let (minutes, second) = seconds.div_rem_euclid(&60);
        let (hour, minute) = minutes.div_rem_euclid(&60);
        Self::new(hour as u8, minute as u8, second as u8, microsecond as u32)
    }
}

/// A `CalendarDate` combined with a wall-clock `Time`, without a time zone.
///
/// ```rust
/// use chronal::DateTime;
///
/// let local = DateTime::from_components(2021, 1, 1, 1, 30, 0).unwrap();
/// // Local time is one hour ahead of UTC.
/// let utc = local.to_utc(3_600).unwrap();
/// assert_eq!(utc.components(), (2021, 1, 1, 0, 30, 0));
/// assert_eq!(utc.from_utc(-7_200).unwrap().to_string(), "2020-12-31T22:30:00");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: CalendarDate,
    time: Time,
}

// ==== Private API ====

impl DateTime {
    /// Returns the microseconds between the era origin and this `DateTime`.
    pub(crate) fn to_absolute_microseconds(&self) -> i128 {
        i128::from(self.date.to_day_count()) * i128::from(MICROSECONDS_PER_DAY)
            + i128::from(self.time.to_microseconds())
    }

    /// Creates a `DateTime` from microseconds since the era origin.
    pub(crate) fn from_absolute_microseconds(micros: i128) -> ChronalResult<Self> {
        let (days, time) = micros.div_rem_euclid(&i128::from(MICROSECONDS_PER_DAY));
        let days = i64::try_from(days)
            .map_err(|_| ChronalError::range().with_message("day count exceeds the valid range."))?;
        Ok(Self::new(
            CalendarDate::from_day_count(days)?,
            Time::from_microseconds(time as i64),
        ))
    }
}

// ==== Public API ====

impl DateTime {
    /// Creates a new `DateTime` without validating it.
    #[inline]
    #[must_use]
    pub const fn new(date: CalendarDate, time: Time) -> Self {
        Self { date, time }
    }

    /// Creates a validated `DateTime` from its formatting components.
    pub fn from_components(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> ChronalResult<Self> {
        Ok(Self::new(
            CalendarDate::try_new(year, month, day)?,
            Time::try_new(hour, minute, second, 0)?,
        ))
    }

    /// Returns `(year, month, day, hour, minute, second)`.
    #[must_use]
    pub const fn components(&self) -> (i32, u8, u8, u8, u8, u8) {
        (
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.time.hour,
            self.time.minute,
            self.time.second,
        )
    }

    /// Returns the current `DateTime` in UTC according to `clock`.
    pub fn now(clock: &impl HostClock) -> ChronalResult<Self> {
        Self::from_timestamp(&Timestamp::now(clock)?)
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> Time {
        self.time
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.date.is_valid() && self.time.is_valid()
    }

    /// Returns the whole seconds since the era origin; microseconds are
    /// dropped.
    #[must_use]
    pub fn to_absolute_seconds(&self) -> i64 {
        self.date.to_absolute_seconds() + self.time.to_microseconds() / MICROSECONDS_PER_SECOND
    }

    /// Creates a `DateTime` from whole seconds since the era origin.
    pub fn from_absolute_seconds(seconds: i64) -> ChronalResult<Self> {
        let (days, time) = seconds.div_rem_euclid(&SECONDS_PER_DAY);
        Ok(Self::new(
            CalendarDate::from_day_count(days)?,
            Time::from_microseconds(time * MICROSECONDS_PER_SECOND),
        ))
    }

    /// Returns this `DateTime` as a `Timestamp` from the era origin.
    pub fn to_timestamp(&self) -> ChronalResult<Timestamp> {
        Timestamp::from_microseconds(self.to_absolute_microseconds())
    }

    pub fn from_timestamp(timestamp: &Timestamp) -> ChronalResult<Self> {
        Self::from_absolute_microseconds(timestamp.as_microseconds())
    }

    /// Converts this local `DateTime` into UTC, where `offset_seconds` is
    /// the local offset east of UTC.
    pub fn to_utc(&self, offset_seconds: i64) -> ChronalResult<Self> {
        self.with_offset(-i128::from(offset_seconds))
    }

    /// Converts this UTC `DateTime` into the local time at
    /// `offset_seconds` east of UTC.
    pub fn from_utc(&self, offset_seconds: i64) -> ChronalResult<Self> {
        self.with_offset(i128::from(offset_seconds))
    }

    fn with_offset(&self, offset_seconds: i128) -> ChronalResult<Self> {
        Self::from_absolute_microseconds(
            self.to_absolute_microseconds() + offset_seconds * i128::from(MICROSECONDS_PER_SECOND),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, host::FixedClock};
    use alloc::string::ToString;

    #[test]
    fn time_validation() {
        assert!(Time::try_new(23, 59, 59, 999_999).is_ok());
        assert_eq!(
            Time::try_new(24, 0, 0, 0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(Time::try_new(0, 60, 0, 0).is_err());
        assert!(Time::try_new(0, 0, 0, 1_000_000).is_err());
        assert_eq!(Time::new(1, 2, 3, 4).to_microseconds(), 3_723_000_004);
        assert_eq!(Time::from_microseconds(3_723_000_004), Time::new(1, 2, 3, 4));
    }

    #[test]
    fn absolute_seconds_round_trip() {
        let dt = DateTime::from_components(1969, 12, 31, 23, 59, 59).unwrap();
        let seconds = dt.to_absolute_seconds();
        assert_eq!(seconds, crate::UNIX_EPOCH_SECONDS - 1);
        assert_eq!(DateTime::from_absolute_seconds(seconds).unwrap(), dt);
        assert_eq!(
            DateTime::from_absolute_seconds(0).unwrap().components(),
            (0, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            DateTime::from_absolute_seconds(-1).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn timestamp_round_trip() {
        let dt = DateTime::new(CalendarDate::new(2000, 2, 29), Time::new(12, 0, 0, 250));
        let ts = dt.to_timestamp().unwrap();
        assert_eq!(DateTime::from_timestamp(&ts).unwrap(), dt);
        assert_eq!(
            DateTime::from_timestamp(&Timestamp::epoch()).unwrap().to_string(),
            "1970-01-01T00:00:00"
        );
    }

    #[test]
    fn utc_offsets() {
        let local = DateTime::from_components(2021, 3, 1, 0, 15, 0).unwrap();
        let utc = local.to_utc(5 * 3_600).unwrap();
        assert_eq!(utc.components(), (2021, 2, 28, 19, 15, 0));
        assert_eq!(utc.from_utc(5 * 3_600).unwrap(), local);
        assert_eq!(local.to_utc(0).unwrap(), local);
    }

    #[test]
    fn now_uses_the_clock() {
        let clock = FixedClock::from_epoch_microseconds(1_500_000);
        let now = DateTime::now(&clock).unwrap();
        assert_eq!(now.date(), CalendarDate::epoch());
        assert_eq!(now.time(), Time::new(0, 0, 1, 500_000));
        assert_eq!(now.to_string(), "1970-01-01T00:00:01.5");
    }
}
