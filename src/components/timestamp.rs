//! This module implements `Timestamp` and any directly related algorithms.

use num_traits::Euclid;

use crate::{
    convert,
    host::HostClock,
    options::Unit,
    utils, ChronalError, ChronalResult, Sign, CARRY_BASE, MAX_TIMESTAMP_MICROSECONDS,
    UNIX_EPOCH_SECONDS,
};


/// A signed interval of time with microsecond precision.
///
/// A `Timestamp` is stored in the carry representation: three tiers of 10^6
/// whose magnitude is `megaseconds * 10^12 + seconds * 10^6 + microseconds`
/// microseconds. The `seconds` and `microseconds` tiers are always within
/// `[0, 10^6)`; the sign is carried by the `megaseconds` tier, so one
/// microsecond before the origin is `(-1, 999_999, 999_999)`.
///
/// When used as a point in time, a `Timestamp` is the interval since the era
/// origin, 0000-01-01T00:00:00.
///
/// ```rust
/// use chronal::{options::Unit, Timestamp};
///
/// let one_and_a_half = Timestamp::from_unit(1.5, Unit::Second).unwrap();
/// let negative = one_and_a_half.invert();
/// assert_eq!(negative.as_tuple(), (-1, 999_998, 500_000));
/// assert_eq!(negative.to_unit(Unit::Millisecond).unwrap(), -1500.0);
/// assert_eq!(one_and_a_half.add(&negative).unwrap(), Timestamp::zero());
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    megaseconds: i64,
    seconds: u32,
    microseconds: u32,
}

// ==== Private API ====

impl Timestamp {
    /// Creates a `Timestamp` from already normalized tiers.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(megaseconds: i64, seconds: u32, microseconds: u32) -> Self {
        Self {
            megaseconds,
            seconds,
            microseconds,
        }
    }

    /// Carries raw tiers and checks the resulting magnitude.
    fn balance(coarse: i128, mid: i128, fine: i128) -> ChronalResult<Self> {
        let (megaseconds, seconds, microseconds) = convert::carry(coarse, mid, fine)?;
        let result = Self::new_unchecked(megaseconds, seconds, microseconds);
        result.check_validity()?;
        Ok(result)
    }

    pub(crate) fn check_validity(&self) -> ChronalResult<()> {
        if self.as_microseconds().abs() > MAX_TIMESTAMP_MICROSECONDS {
            return Err(
                ChronalError::range().with_message("Timestamp exceeds the valid time range.")
            );
        }
        Ok(())
    }
}

// ==== Public API ====

impl Timestamp {
    /// Creates a new `Timestamp` from raw tiers, which may be out of range
    /// or carry mixed signs.
    ///
    /// ```rust
    /// use chronal::Timestamp;
    ///
    /// let ts = Timestamp::new(0, 0, 1_500_000).unwrap();
    /// assert_eq!(ts.as_tuple(), (0, 1, 500_000));
    /// let ts = Timestamp::new(1, -1, 0).unwrap();
    /// assert_eq!(ts.as_tuple(), (0, 999_999, 0));
    /// ```
    pub fn new(coarse: i64, mid: i64, fine: i64) -> ChronalResult<Self> {
        Self::balance(coarse.into(), mid.into(), fine.into())
    }

    /// The canonical zero `Timestamp`: the era origin itself.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new_unchecked(0, 0, 0)
    }

    /// The Unix epoch, 1970-01-01T00:00:00, measured from the era origin.
    #[inline]
    #[must_use]
    pub const fn epoch() -> Self {
        let megaseconds = UNIX_EPOCH_SECONDS / CARRY_BASE;
        let seconds = UNIX_EPOCH_SECONDS % CARRY_BASE;
        Self::new_unchecked(megaseconds, seconds as u32, 0)
    }

    /// Reads the current time from `clock`, measured from the era origin.
    pub fn now(clock: &impl HostClock) -> ChronalResult<Self> {
        let unix = clock.get_host_epoch_microseconds()?;
        Self::from_microseconds(unix)?.add(&Self::epoch())
    }

    /// Creates a `Timestamp` from a total count of microseconds.
    pub fn from_microseconds(micros: i128) -> ChronalResult<Self> {
        if micros.abs() > MAX_TIMESTAMP_MICROSECONDS {
            return Err(
                ChronalError::range().with_message("Timestamp exceeds the valid time range.")
            );
        }
        Self::balance(0, 0, micros)
    }

    /// Creates a `Timestamp` from a scalar in `unit`. Fractional
    /// microseconds are floored.
    pub fn from_unit(value: f64, unit: Unit) -> ChronalResult<Self> {
        let (megaseconds, seconds, microseconds) = convert::to_carry(value, unit)?;
        let result = Self::new_unchecked(megaseconds, seconds, microseconds);
        result.check_validity()?;
        Ok(result)
    }

    /// Creates a `Timestamp` from a whole number of `unit`s without going
    /// through floating point.
    pub fn from_whole(value: i128, unit: Unit) -> ChronalResult<Self> {
        Self::from_microseconds(convert::convert_exact(value, unit, Unit::Microsecond)?)
    }

    /// Converts this `Timestamp` into a scalar in `unit`.
    ///
    /// The result is exact for microseconds and fractional for coarser units
    /// when the interval is not a whole multiple of them.
    pub fn to_unit(&self, unit: Unit) -> ChronalResult<f64> {
        convert::from_carry(
            self.megaseconds,
            self.seconds.into(),
            self.microseconds.into(),
            unit,
        )
    }

    /// Converts this `Timestamp` into whole `unit`s, flooring any remainder.
    pub fn to_whole(&self, unit: Unit) -> ChronalResult<i128> {
        convert::convert_exact(self.as_microseconds(), Unit::Microsecond, unit)
    }

    /// Returns the coarse tier, in units of 10^6 seconds.
    #[inline]
    #[must_use]
    pub const fn megaseconds(&self) -> i64 {
        self.megaseconds
    }

    /// Returns the mid tier: seconds within the current megasecond.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Returns the fine tier: microseconds within the current second.
    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> u32 {
        self.microseconds
    }

    /// Returns the `(coarse, mid, fine)` tiers.
    #[inline]
    #[must_use]
    pub const fn as_tuple(&self) -> (i64, u32, u32) {
        (self.megaseconds, self.seconds, self.microseconds)
    }

    /// Returns the total microseconds represented by this `Timestamp`.
    #[inline]
    #[must_use]
    pub fn as_microseconds(&self) -> i128 {
        convert::fold_carry(
            self.megaseconds,
            self.seconds.into(),
            self.microseconds.into(),
        )
    }

    /// Returns the sign of this `Timestamp`.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        utils::sign_of(self.as_microseconds())
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Adds `other` to this `Timestamp` tier by tier, then carries.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> ChronalResult<Self> {
        Self::balance(
            i128::from(self.megaseconds) + i128::from(other.megaseconds),
            i128::from(self.seconds) + i128::from(other.seconds),
            i128::from(self.microseconds) + i128::from(other.microseconds),
        )
    }

    /// Subtracts `other` from this `Timestamp` tier by tier, then borrows.
    pub fn subtract(&self, other: &Self) -> ChronalResult<Self> {
        Self::balance(
            i128::from(self.megaseconds) - i128::from(other.megaseconds),
            i128::from(self.seconds) - i128::from(other.seconds),
            i128::from(self.microseconds) - i128::from(other.microseconds),
        )
    }

    /// Multiplies every tier by `factor`, then carries.
    ///
    /// A `factor` of zero returns the canonical zero `Timestamp`.
    pub fn scale(&self, factor: i64) -> ChronalResult<Self> {
        if factor == 0 {
            return Ok(Self::zero());
        }
        let factor = i128::from(factor);
        Self::balance(
            i128::from(self.megaseconds) * factor,
            i128::from(self.seconds) * factor,
            i128::from(self.microseconds) * factor,
        )
    }

    /// Negates this `Timestamp`.
    ///
    /// All three tiers are negated and carried again so the `seconds` and
    /// `microseconds` tiers stay non-negative. The magnitude is unchanged,
    /// which keeps the result within range.
    #[must_use]
    pub fn invert(&self) -> Self {
        let base = CARRY_BASE;
        let (borrow, microseconds) = (-i64::from(self.microseconds)).div_rem_euclid(&base);
        let (borrow, seconds) = (borrow - i64::from(self.seconds)).div_rem_euclid(&base);
        Self::new_unchecked(
            borrow - self.megaseconds,
            seconds as u32,
            microseconds as u32,
        )
    }

    /// Returns the absolute value of this `Timestamp`.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.sign() == Sign::Negative {
            self.invert()
        } else {
            *self
        }
    }

    /// Returns `self - other` in `unit`; positive when `self` is later.
    pub fn diff(&self, other: &Self, unit: Unit) -> ChronalResult<f64> {
        self.subtract(other)?.to_unit(unit)
    }

    /// Returns the time from this `Timestamp` until the `clock`'s current
    /// reading in `unit`; positive when this `Timestamp` is in the past.
    pub fn elapsed(&self, unit: Unit, clock: &impl HostClock) -> ChronalResult<f64> {
        Self::now(clock)?.diff(self, unit)
    }

    /// Runs `action` once and returns how long it took along with its result.
    ///
    /// Timing uses the clock's monotonic reading. The result of `action`
    /// is always passed through untouched; a failed clock read only shows up
    /// in the elapsed half of the pair.
    ///
    /// ```rust
    /// use chronal::{host::FixedClock, Timestamp};
    ///
    /// let (elapsed, value) = Timestamp::measure(&FixedClock::default(), || 6 * 7);
    /// assert_eq!(value, 42);
    /// assert!(elapsed.unwrap().is_zero());
    /// ```
    pub fn measure<R>(
        clock: &impl HostClock,
        action: impl FnOnce() -> R,
    ) -> (ChronalResult<Self>, R) {
        let start = clock.get_host_monotonic_microseconds();
        let result = action();
        let end = clock.get_host_monotonic_microseconds();
        (Self::from_monotonic_readings(start, end), result)
    }

    /// Runs a fallible `action` once, propagating its error.
    ///
    /// An error from `action` takes precedence over a failed clock read.
    pub fn try_measure<T, E>(
        clock: &impl HostClock,
        action: impl FnOnce() -> Result<T, E>,
    ) -> Result<(Self, T), E>
    where
        E: From<ChronalError>,
    {
        let (elapsed, result) = Self::measure(clock, action);
        let value = result?;
        Ok((elapsed?, value))
    }

    fn from_monotonic_readings(
        start: ChronalResult<u128>,
        end: ChronalResult<u128>,
    ) -> ChronalResult<Self> {
        let elapsed = i128::try_from(end?.saturating_sub(start?)).map_err(|_| {
            ChronalError::range().with_message("measured interval exceeds the valid time range.")
        })?;
        Self::from_microseconds(elapsed)
    }
}

// ==== Trait impls ====

// NOTE: the operator traits are not imported so that method calls resolve
// to the inherent `add`.

impl core::ops::Add<Self> for Timestamp {
    type Output = ChronalResult<Self>;

    fn add(self, rhs: Self) -> Self::Output {
        Timestamp::add(&self, &rhs)
    }
}

impl core::ops::Sub<Self> for Timestamp {
    type Output = ChronalResult<Self>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl core::ops::Neg for Timestamp {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.invert()
    }
}
