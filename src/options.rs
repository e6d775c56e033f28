//! Native implementation of the `chronal` options.
//!
//! Callers can pick the unit an operation reports in and how a calendar
//! shift treats a day that does not exist in its target month.

use crate::{ChronalError, ChronalResult, MICROSECONDS_PER_DAY};
use core::{fmt, str::FromStr};

/// The units of time understood by conversion, difference and shift
/// operations, in ascending order.
///
/// `Microsecond` through `Week` have a fixed length and can be converted
/// into each other. `Month` and `Year` are calendar units whose length
/// depends on the date they are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// The `Microsecond` unit
    Microsecond = 0,
    /// The `Millisecond` unit
    Millisecond,
    /// The `Second` unit
    Second,
    /// The `Minute` unit
    Minute,
    /// The `Hour` unit
    Hour,
    /// The `Day` unit
    Day,
    /// The `Week` unit
    Week,
    /// The `Month` unit
    Month,
    /// The `Year` unit
    Year,
}

/// Microsecond lengths of the fixed-length units, indexed by `Unit`.
const MICROSECOND_LENGTHS: [i64; 7] = [
    1,
    1_000,
    1_000_000,
    60_000_000,
    3_600_000_000,
    MICROSECONDS_PER_DAY,
    7 * MICROSECONDS_PER_DAY,
];

impl Unit {
    /// All fixed-length units, ascending.
    pub const FIXED: [Unit; 7] = [
        Unit::Microsecond,
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
    ];

    /// Returns the length of this unit in microseconds, or `None` for a
    /// calendar unit.
    #[inline]
    #[must_use]
    pub fn as_microseconds(self) -> Option<i64> {
        MICROSECOND_LENGTHS.get(self as usize).copied()
    }

    /// Returns the length of this unit in microseconds, failing for a
    /// calendar unit.
    pub(crate) fn try_as_microseconds(self) -> ChronalResult<i64> {
        self.as_microseconds().ok_or_else(|| {
            ChronalError::invalid_argument()
                .with_message(alloc::format!("{self} does not have a fixed length"))
        })
    }

    #[inline]
    #[must_use]
    pub fn is_calendar_unit(&self) -> bool {
        matches!(self, Self::Month | Self::Year)
    }
}

/// A parsing error for `Unit`
#[derive(Debug, Clone, Copy)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid Unit")
    }
}

impl From<ParseUnitError> for ChronalError {
    fn from(_: ParseUnitError) -> Self {
        ChronalError::invalid_argument().with_message("provided string was not a valid Unit")
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Self::Year),
            "month" | "months" => Ok(Self::Month),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "microsecond" | "microseconds" => Ok(Self::Microsecond),
            _ => Err(ParseUnitError),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => "years",
            Self::Month => "months",
            Self::Week => "weeks",
            Self::Day => "days",
            Self::Hour => "hours",
            Self::Minute => "minutes",
            Self::Second => "seconds",
            Self::Millisecond => "milliseconds",
            Self::Microsecond => "microseconds",
        }
        .fmt(f)
    }
}

/// `ArithmeticOverflow` decides what a month or year shift does when the
/// original day does not exist in the target month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    /// Clamp the day to the last day of the target month.
    #[default]
    Constrain,
    /// Fail with an `InvalidDate` error.
    Reject,
}

/// A parsing error for `ArithmeticOverflow`
#[derive(Debug, Clone, Copy)]
pub struct ParseArithmeticOverflowError;

impl fmt::Display for ParseArithmeticOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for ArithmeticOverflow {
    type Err = ParseArithmeticOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseArithmeticOverflowError),
        }
    }
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_lengths() {
        assert_eq!(Unit::Second.as_microseconds(), Some(1_000_000));
        assert_eq!(Unit::Week.as_microseconds(), Some(604_800_000_000));
        assert_eq!(Unit::Month.as_microseconds(), None);
        assert!(Unit::Month.is_calendar_unit());
        assert_eq!(Unit::Year.as_microseconds(), None);
        assert!(Unit::Month.try_as_microseconds().is_err());
    }

    #[test]
    fn units_ascend() {
        for pair in Unit::FIXED.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].as_microseconds() < pair[1].as_microseconds());
        }
        assert!(Unit::Week < Unit::Month && Unit::Month < Unit::Year);
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("days".parse::<Unit>().ok(), Some(Unit::Day));
        assert_eq!("microsecond".parse::<Unit>().ok(), Some(Unit::Microsecond));
        assert!("fortnight".parse::<Unit>().is_err());
        assert_eq!(
            "reject".parse::<ArithmeticOverflow>().ok(),
            Some(ArithmeticOverflow::Reject)
        );
    }
}
