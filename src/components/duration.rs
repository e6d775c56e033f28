//! This module implements `Duration`, the human readable view of a `Timestamp`.

use num_traits::Euclid;

use crate::{
    components::Timestamp, options::Unit, utils, ChronalResult, Sign, MICROSECONDS_PER_SECOND,
};

const MICROSECONDS_PER_MILLISECOND: i128 = 1_000;
const MILLISECONDS_PER_SECOND: i128 = 1_000;
const SECONDS_PER_MINUTE: i128 = 60;
const MINUTES_PER_HOUR: i128 = 60;

/// A `Timestamp` decomposed into hours, minutes, seconds, milliseconds and
/// microseconds.
///
/// A `Duration` created from a `Timestamp` is always balanced: every nonzero
/// field carries the sign of the interval and every field but `hours` is
/// within the range of its parent unit.
///
/// ```rust
/// use chronal::{options::Unit, Duration, Timestamp};
///
/// let ts = Timestamp::from_unit(-5_400.25, Unit::Second).unwrap();
/// let duration = Duration::from(ts);
/// assert_eq!(duration.hours(), -1);
/// assert_eq!(duration.minutes(), -30);
/// assert_eq!(duration.milliseconds(), -250);
/// assert_eq!(duration.to_timestamp().unwrap(), ts);
/// assert_eq!(duration.to_string(), "-PT1H30M0.25S");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    microseconds: i64,
}

// ==== Private API ====

impl Duration {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
    ) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        }
    }

    /// Returns the total microseconds of every field combined.
    fn total_microseconds(&self) -> i128 {
        let minutes = i128::from(self.hours) * MINUTES_PER_HOUR + i128::from(self.minutes);
        let seconds = minutes * SECONDS_PER_MINUTE + i128::from(self.seconds);
        let milliseconds = seconds * MILLISECONDS_PER_SECOND + i128::from(self.milliseconds);
        milliseconds * MICROSECONDS_PER_MILLISECOND + i128::from(self.microseconds)
    }

    /// Decomposes the magnitude of `timestamp` and applies its sign to each
    /// field.
    fn from_timestamp(timestamp: Timestamp) -> Self {
        let total = timestamp.as_microseconds();
        let sign = i128::from(utils::sign_of(total).as_sign_multiplier());
        let (milliseconds, microseconds) = total.abs().div_rem_euclid(&MICROSECONDS_PER_MILLISECOND);
        let (seconds, milliseconds) = milliseconds.div_rem_euclid(&MILLISECONDS_PER_SECOND);
        let (minutes, seconds) = seconds.div_rem_euclid(&SECONDS_PER_MINUTE);
        let (hours, minutes) = minutes.div_rem_euclid(&MINUTES_PER_HOUR);
        // NOTE: `Timestamp` magnitudes are bounded by 10^24 microseconds, so
        // the hour count fits in an i64.
        Self::new_unchecked(
            (sign * hours) as i64,
            (sign * minutes) as i64,
            (sign * seconds) as i64,
            (sign * milliseconds) as i64,
            (sign * microseconds) as i64,
        )
    }
}

// ==== Public API ====

impl Duration {
    /// Creates a new `Duration` from its fields.
    ///
    /// The fields are taken as given and may carry mixed signs or exceed
    /// their parent unit. Use [`Duration::balance`] to normalize them.
    #[must_use]
    pub const fn new(
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
    ) -> Self {
        Self::new_unchecked(hours, minutes, seconds, milliseconds, microseconds)
    }

    #[inline]
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    #[inline]
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i64 {
        self.microseconds
    }

    /// Returns the sign of the interval this `Duration` represents.
    #[must_use]
    pub fn sign(&self) -> Sign {
        utils::sign_of(self.total_microseconds())
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.total_microseconds() == 0
    }

    /// Rewrites this `Duration` so every field carries the aggregate sign
    /// and fits within its parent unit.
    ///
    /// ```rust
    /// use chronal::Duration;
    ///
    /// let mixed = Duration::new(1, -30, 0, 0, 0);
    /// assert_eq!(mixed.balance().unwrap(), Duration::new(0, 30, 0, 0, 0));
    /// ```
    pub fn balance(&self) -> ChronalResult<Self> {
        Ok(Self::from_timestamp(self.to_timestamp()?))
    }

    /// Converts this `Duration` into a `Timestamp`.
    pub fn to_timestamp(&self) -> ChronalResult<Timestamp> {
        Timestamp::from_microseconds(self.total_microseconds())
    }

    /// Returns the total length of this `Duration` in `unit`.
    pub fn total(&self, unit: Unit) -> ChronalResult<f64> {
        self.to_timestamp()?.to_unit(unit)
    }

    /// Returns the sign along with the magnitude split into
    /// `(hours, minutes, seconds, microseconds)`.
    pub(crate) fn magnitude_parts(&self) -> (Sign, u128, u8, u8, u32) {
        let total = self.total_microseconds();
        let (seconds, fraction) = total
            .unsigned_abs()
            .div_rem_euclid(&(MICROSECONDS_PER_SECOND as u128));
        let (minutes, seconds) = seconds.div_rem_euclid(&60);
        let (hours, minutes) = minutes.div_rem_euclid(&60);
        (
            utils::sign_of(total),
            hours,
            minutes as u8,
            seconds as u8,
            fraction as u32,
        )
    }
}

impl From<Timestamp> for Duration {
    fn from(value: Timestamp) -> Self {
        Self::from_timestamp(value)
    }
}
