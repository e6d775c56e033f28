//! The `chronal` crate is a calendar-and-duration arithmetic engine.
//!
//! It models signed time intervals at microsecond precision as a three tier
//! carry value ([`Timestamp`]), proleptic Gregorian calendar dates
//! ([`CalendarDate`]), and the compound shift algorithm that moves a date or
//! timestamp by several units at once ([`Shiftable`]).
//!
//! ```rust
//! use chronal::{CalendarDate, ShiftOffset, Shiftable};
//!
//! // Month shifts clamp the day to the length of the target month.
//! let date = CalendarDate::new(2021, 1, 31);
//! let shifted = date.shift(&[ShiftOffset::Months(1)]).unwrap();
//! assert_eq!(shifted, CalendarDate::new(2021, 2, 28));
//!
//! // Seconds, days and years may be combined in one request.
//! let shifted = CalendarDate::new(2020, 2, 29)
//!     .shift(&[ShiftOffset::Years(1), ShiftOffset::Days(1)])
//!     .unwrap();
//! assert_eq!(shifted, CalendarDate::new(2021, 3, 1));
//! ```
//!
//! All values are relative to the era origin, `0000-01-01T00:00:00` in the
//! proleptic Gregorian calendar. Reading the current time always goes
//! through an explicit [`host::HostClock`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod convert;
pub mod error;
pub mod host;
pub mod options;
pub mod primitive;

#[cfg(feature = "sys")]
pub mod sys;

mod components;
mod formatting;

#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::ChronalError;

/// The `chronal` result type
pub type ChronalResult<T> = Result<T, ChronalError>;

pub mod partial {
    //! Partial component records used to overwrite individual fields.
    pub use crate::components::PartialDate;
}

pub use crate::components::shift;

pub use crate::components::{
    Calendar, CalendarDate, CompareTarget, DateTime, Duration, Month, ShiftOffset, ShiftPlan,
    Shiftable, Time, Timestamp, Weekday,
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait ChronalUnwrap {
    type Output;

    /// `chronal` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn chronal_unwrap(self) -> ChronalResult<Self::Output>;
}

impl<T> ChronalUnwrap for Option<T> {
    type Output = T;

    fn chronal_unwrap(self) -> ChronalResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(ChronalError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! chronal_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::ChronalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::ChronalError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl From<Ordering> for Sign {
    fn from(value: Ordering) -> Self {
        Self::from(value as i8)
    }
}

impl Sign {
    /// Coerces the current `Sign` to be either negative or positive.
    pub(crate) fn as_sign_multiplier(&self) -> i8 {
        if matches!(self, Self::Zero) {
            return 1;
        }
        *self as i8
    }
}

// Relevant numeric constants
/// The width of one carry tier: 10^6.
pub const CARRY_BASE: i64 = 1_000_000;
/// Microseconds per second constant: 1e+6
pub const MICROSECONDS_PER_SECOND: i64 = 1_000_000;
/// Seconds per day constant: 86 400
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
/// Microseconds per day constant: 8.64e+10
pub const MICROSECONDS_PER_DAY: i64 = SECONDS_PER_DAY * MICROSECONDS_PER_SECOND;
/// Day count of 1970-01-01 measured from the era origin.
pub const UNIX_EPOCH_DAYS: i64 = 719_528;
/// Second count of 1970-01-01T00:00:00 measured from the era origin.
pub const UNIX_EPOCH_SECONDS: i64 = UNIX_EPOCH_DAYS * SECONDS_PER_DAY;
/// The largest calendar year supported by date arithmetic.
pub const MAX_YEAR: i32 = 999_999;
/// Max `Timestamp` magnitude in microseconds: 1e+24
#[doc(hidden)]
pub(crate) const MAX_TIMESTAMP_MICROSECONDS: i128 = 1_000_000_000_000_000_000_000_000;
