//! The host system clock.

use crate::host::HostClock;
use crate::{ChronalError, ChronalResult};

use web_time::{Instant, SystemTime, UNIX_EPOCH};

/// A `HostClock` backed by the host system.
///
/// Wall-clock readings come from [`SystemTime`]; monotonic readings are
/// measured with [`Instant`] from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a new `SystemClock`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock for SystemClock {
    fn get_host_epoch_microseconds(&self) -> ChronalResult<i128> {
        get_system_microseconds()
    }

    fn get_host_monotonic_microseconds(&self) -> ChronalResult<u128> {
        Ok(self.origin.elapsed().as_micros())
    }
}

/// Returns the system time in microseconds.
pub(crate) fn get_system_microseconds() -> ChronalResult<i128> {
    let micros = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => i128::try_from(since.as_micros()),
        // The host clock is set before 1970.
        Err(before) => i128::try_from(before.duration().as_micros()).map(|micros| -micros),
    };
    micros.map_err(|_| ChronalError::general("Error fetching system time"))
}
