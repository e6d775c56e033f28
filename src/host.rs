//! Trait definitions for accessing values from the host environment.
//!
//! Every operation that reads the current time (`Timestamp::now`,
//! `CalendarDate::today`, `Timestamp::elapsed`, `Timestamp::measure`) takes a
//! `HostClock` so tests can supply a fixed clock.

use crate::{ChronalResult, Timestamp, MICROSECONDS_PER_SECOND, UNIX_EPOCH_SECONDS};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    /// Returns the wall-clock reading in microseconds since 1970-01-01T00:00:00.
    fn get_host_epoch_microseconds(&self) -> ChronalResult<i128>;

    /// Returns a monotonic reading in microseconds from an arbitrary, fixed
    /// origin. Readings never decrease and are unaffected by wall-clock
    /// adjustments.
    ///
    /// The default falls back to the wall clock.
    fn get_host_monotonic_microseconds(&self) -> ChronalResult<u128> {
        let micros = self.get_host_epoch_microseconds()?;
        Ok(u128::try_from(micros).unwrap_or_default())
    }
}

impl<C: HostClock + ?Sized> HostClock for &C {
    fn get_host_epoch_microseconds(&self) -> ChronalResult<i128> {
        (**self).get_host_epoch_microseconds()
    }

    fn get_host_monotonic_microseconds(&self) -> ChronalResult<u128> {
        (**self).get_host_monotonic_microseconds()
    }
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_microseconds(&self) -> ChronalResult<i128> {
        Ok(0)
    }
}

/// A `HostClock` frozen at a single instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    epoch_microseconds: i128,
    monotonic_microseconds: u128,
}

impl FixedClock {
    /// Creates a clock frozen `epoch_microseconds` after 1970-01-01T00:00:00.
    #[must_use]
    pub const fn from_epoch_microseconds(epoch_microseconds: i128) -> Self {
        Self {
            epoch_microseconds,
            monotonic_microseconds: 0,
        }
    }

    /// Creates a clock frozen `seconds` after 1970-01-01T00:00:00.
    #[must_use]
    pub const fn from_epoch_seconds(seconds: i64) -> Self {
        Self::from_epoch_microseconds(seconds as i128 * MICROSECONDS_PER_SECOND as i128)
    }

    /// Creates a clock frozen at `timestamp`, measured from the era origin.
    #[must_use]
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        let unix = timestamp.as_microseconds()
            - i128::from(UNIX_EPOCH_SECONDS) * i128::from(MICROSECONDS_PER_SECOND);
        Self::from_epoch_microseconds(unix)
    }

    /// Returns this clock with the monotonic reading set to `micros`.
    #[must_use]
    pub const fn with_monotonic_microseconds(mut self, micros: u128) -> Self {
        self.monotonic_microseconds = micros;
        self
    }
}

impl HostClock for FixedClock {
    fn get_host_epoch_microseconds(&self) -> ChronalResult<i128> {
        Ok(self.epoch_microseconds)
    }

    fn get_host_monotonic_microseconds(&self) -> ChronalResult<u128> {
        Ok(self.monotonic_microseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clock_reads_the_unix_epoch() {
        assert_eq!(().get_host_epoch_microseconds().unwrap(), 0);
        assert_eq!(().get_host_monotonic_microseconds().unwrap(), 0);
    }

    #[test]
    fn fixed_clock_readings() {
        let clock = FixedClock::from_epoch_seconds(-1).with_monotonic_microseconds(42);
        assert_eq!(clock.get_host_epoch_microseconds().unwrap(), -1_000_000);
        assert_eq!(clock.get_host_monotonic_microseconds().unwrap(), 42);
        assert_eq!(
            FixedClock::from_timestamp(Timestamp::epoch()),
            FixedClock::from_epoch_seconds(0)
        );
    }
}
