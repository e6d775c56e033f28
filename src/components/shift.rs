//! The compound shift engine.
//!
//! A shift applies a list of [`ShiftOffset`]s to a [`CalendarDate`],
//! [`DateTime`] or [`Timestamp`] in a single operation. The offsets are
//! first resolved into a [`ShiftPlan`]:
//!
//! - seconds, minutes, hours and `Timestamp` deltas are summed into a
//!   microsecond delta,
//! - days and weeks are summed into a day delta,
//! - years are summed into a year delta.
//!
//! The plan is then applied in that order, with the day clamped to the
//! length of its month once the year delta is applied. Months cannot be
//! combined with any other offset, since the length of a month depends on
//! where the other offsets land; a month-only shift is applied on its own.

use alloc::vec::Vec;

use num_traits::Euclid;

use crate::{
    components::{CalendarDate, DateTime, Time, Timestamp},
    options::{ArithmeticOverflow, Unit},
    utils, ChronalError, ChronalResult, MICROSECONDS_PER_DAY,
};

#[cfg(test)]
mod tests;

/// A single signed offset of a shift request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftOffset {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
    /// An exact interval, applied as part of the sub-day delta.
    Timestamp(Timestamp),
}

impl ShiftOffset {
    /// Creates a `ShiftOffset` of `value` `unit`s.
    ///
    /// Milliseconds and microseconds become a `Timestamp` offset.
    pub fn new(value: i64, unit: Unit) -> ChronalResult<Self> {
        let offset = match unit {
            Unit::Microsecond | Unit::Millisecond => {
                Self::Timestamp(Timestamp::from_whole(value.into(), unit)?)
            }
            Unit::Second => Self::Seconds(value),
            Unit::Minute => Self::Minutes(value),
            Unit::Hour => Self::Hours(value),
            Unit::Day => Self::Days(value),
            Unit::Week => Self::Weeks(value),
            Unit::Month => Self::Months(value),
            Unit::Year => Self::Years(value),
        };
        Ok(offset)
    }

    /// Returns whether this offset moves nothing.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Seconds(v)
            | Self::Minutes(v)
            | Self::Hours(v)
            | Self::Days(v)
            | Self::Weeks(v)
            | Self::Months(v)
            | Self::Years(v) => *v == 0,
            Self::Timestamp(ts) => ts.is_zero(),
        }
    }

    /// The name of this offset's unit, used in error messages.
    #[must_use]
    pub const fn unit_name(&self) -> &'static str {
        match self {
            Self::Seconds(_) => "seconds",
            Self::Minutes(_) => "minutes",
            Self::Hours(_) => "hours",
            Self::Days(_) => "days",
            Self::Weeks(_) => "weeks",
            Self::Months(_) => "months",
            Self::Years(_) => "years",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Returns this offset's contribution to the microsecond delta.
    fn as_microseconds(&self) -> Option<i128> {
        let (value, unit) = match self {
            Self::Seconds(v) => (v, Unit::Second),
            Self::Minutes(v) => (v, Unit::Minute),
            Self::Hours(v) => (v, Unit::Hour),
            Self::Timestamp(ts) => return Some(ts.as_microseconds()),
            _ => return None,
        };
        unit.as_microseconds()
            .map(|length| i128::from(*value) * i128::from(length))
    }
}

/// The resolved form of a list of `ShiftOffset`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftPlan {
    /// The target is returned unchanged.
    Noop,
    /// A month-only shift.
    Months(i64),
    /// A shift of microseconds, then days, then years.
    Compound {
        microseconds: i128,
        days: i64,
        years: i64,
    },
}

fn overflowed(unit: &str) -> ChronalError {
    ChronalError::range().with_message(alloc::format!("accumulated {unit} overflowed"))
}

impl ShiftPlan {
    /// Resolves `offsets` into a `ShiftPlan`.
    ///
    /// ```rust
    /// use chronal::{shift::ShiftPlan, ShiftOffset};
    ///
    /// let plan = ShiftPlan::resolve(&[
    ///     ShiftOffset::Hours(1),
    ///     ShiftOffset::Seconds(-30),
    ///     ShiftOffset::Weeks(1),
    ///     ShiftOffset::Days(-2),
    /// ])
    /// .unwrap();
    /// assert_eq!(
    ///     plan,
    ///     ShiftPlan::Compound { microseconds: 3_570_000_000, days: 5, years: 0 }
    /// );
    /// assert_eq!(ShiftPlan::resolve(&[]).unwrap(), ShiftPlan::Noop);
    /// ```
    ///
    /// # Errors
    ///   - `AmbiguousShift` if `Months` is combined with any other offset.
    ///   - `Range` if an accumulator overflows.
    pub fn resolve(offsets: &[ShiftOffset]) -> ChronalResult<Self> {
        let has_months = offsets
            .iter()
            .any(|offset| matches!(offset, ShiftOffset::Months(_)));
        if has_months {
            let mut conflicts: Vec<&'static str> = Vec::new();
            for offset in offsets {
                let name = offset.unit_name();
                if !matches!(offset, ShiftOffset::Months(_)) && !conflicts.contains(&name) {
                    conflicts.push(name);
                }
            }
            if !conflicts.is_empty() {
                return Err(ChronalError::ambiguous_shift().with_message(alloc::format!(
                    "months cannot be combined with {} in one shift",
                    conflicts.join(", ")
                )));
            }
        }

        let mut microseconds: i128 = 0;
        let mut days: i64 = 0;
        let mut months: i64 = 0;
        let mut years: i64 = 0;
        for offset in offsets {
            match offset {
                ShiftOffset::Days(v) => {
                    days = days.checked_add(*v).ok_or_else(|| overflowed("days"))?;
                }
                ShiftOffset::Weeks(v) => {
                    days = v
                        .checked_mul(7)
                        .and_then(|v| days.checked_add(v))
                        .ok_or_else(|| overflowed("days"))?;
                }
                ShiftOffset::Months(v) => {
                    months = months.checked_add(*v).ok_or_else(|| overflowed("months"))?;
                }
                ShiftOffset::Years(v) => {
                    years = years.checked_add(*v).ok_or_else(|| overflowed("years"))?;
                }
                _ => {
                    let delta = offset.as_microseconds().unwrap_or_default();
                    microseconds = microseconds
                        .checked_add(delta)
                        .ok_or_else(|| overflowed("microseconds"))?;
                }
            }
        }

        let plan = if months != 0 {
            Self::Months(months)
        } else if microseconds == 0 && days == 0 && years == 0 {
            Self::Noop
        } else {
            Self::Compound {
                microseconds,
                days,
                years,
            }
        };
        #[cfg(feature = "log")]
        log::trace!("resolved {} shift offsets into {plan:?}", offsets.len());
        Ok(plan)
    }
}

/// Resolves `offsets` into a `ShiftPlan`. See [`ShiftPlan::resolve`].
pub fn resolve(offsets: &[ShiftOffset]) -> ChronalResult<ShiftPlan> {
    ShiftPlan::resolve(offsets)
}

/// A value that can be moved by a list of `ShiftOffset`s.
pub trait Shiftable: Sized {
    /// Shifts this value, resolving a day that does not exist in its
    /// target month with `overflow`.
    fn shift_with_overflow(
        &self,
        offsets: &[ShiftOffset],
        overflow: ArithmeticOverflow,
    ) -> ChronalResult<Self>;

    /// Shifts this value, clamping a day that does not exist in its target
    /// month to the last day of that month.
    fn shift(&self, offsets: &[ShiftOffset]) -> ChronalResult<Self> {
        self.shift_with_overflow(offsets, ArithmeticOverflow::Constrain)
    }
}

/// Applies a month delta through month interpolation and then constrains or
/// rejects the day.
fn shift_months(
    date: CalendarDate,
    months: i64,
    overflow: ArithmeticOverflow,
) -> ChronalResult<CalendarDate> {
    let month = i64::from(date.month())
        .checked_add(months)
        .ok_or_else(|| overflowed("months"))?;
    let (year, month) = utils::balance_year_month(date.year().into(), month);
    constrain_day(year, month, date.day(), overflow)
}

/// Builds the date of `year`, `month` and `day`, where `day` may exceed the
/// length of the month.
fn constrain_day(
    year: i64,
    month: u8,
    day: u8,
    overflow: ArithmeticOverflow,
) -> ChronalResult<CalendarDate> {
    let first = CalendarDate::from_balanced(year, month, 1)?;
    let days_in_month = utils::iso_days_in_month(first.year(), month);
    if day > days_in_month {
        match overflow {
            ArithmeticOverflow::Reject => {
                return Err(ChronalError::invalid_date().with_message(alloc::format!(
                    "day {day} does not exist in {year}-{month:02}"
                )));
            }
            ArithmeticOverflow::Constrain => {
                #[cfg(feature = "log")]
                log::debug!("clamping day {day} to {days_in_month} in {year}-{month:02}");
            }
        }
    }
    CalendarDate::from_balanced(year, month, day.min(days_in_month))
}

/// Shifts the point `time` microseconds into era day `days` by a compound
/// plan, returning the new date and time of day.
///
/// `time` may lie outside of the day; it is carried into the day count.
fn shift_compound(
    days: i64,
    time: i64,
    plan: (i128, i64, i64),
    overflow: ArithmeticOverflow,
) -> ChronalResult<(CalendarDate, i64)> {
    let (microseconds, day_delta, years) = plan;
    let day_length = i128::from(MICROSECONDS_PER_DAY);
    let total = i128::from(days) * day_length + i128::from(time) + microseconds;
    let (days, time) = total.div_rem_euclid(&day_length);
    let days = days
        .checked_add(day_delta.into())
        .and_then(|days| i64::try_from(days).ok())
        .ok_or_else(|| overflowed("days"))?;
    let (year, month, day) = utils::era_days_to_gregorian(days);
    let year = year.checked_add(years).ok_or_else(|| overflowed("years"))?;
    let date = constrain_day(year, month, day, overflow)?;
    // NOTE: the remainder of a Euclidean division by a day is within a day.
    Ok((date, time as i64))
}

impl Shiftable for CalendarDate {
    /// Shifts this date. Sub-day offsets move it from midnight and the
    /// result is floored to its day.
    fn shift_with_overflow(
        &self,
        offsets: &[ShiftOffset],
        overflow: ArithmeticOverflow,
    ) -> ChronalResult<Self> {
        match ShiftPlan::resolve(offsets)? {
            ShiftPlan::Noop => Ok(*self),
            ShiftPlan::Months(months) => shift_months(self.balance()?, months, overflow),
            ShiftPlan::Compound {
                microseconds,
                days,
                years,
            } => {
                let (date, _) =
                    shift_compound(self.to_day_count(), 0, (microseconds, days, years), overflow)?;
                Ok(date)
            }
        }
    }
}

impl Shiftable for DateTime {
    fn shift_with_overflow(
        &self,
        offsets: &[ShiftOffset],
        overflow: ArithmeticOverflow,
    ) -> ChronalResult<Self> {
        match ShiftPlan::resolve(offsets)? {
            ShiftPlan::Noop => Ok(*self),
            ShiftPlan::Months(months) => {
                let start = Self::from_absolute_microseconds(self.to_absolute_microseconds())?;
                Ok(Self::new(
                    shift_months(start.date(), months, overflow)?,
                    start.time(),
                ))
            }
            ShiftPlan::Compound {
                microseconds,
                days,
                years,
            } => {
                let (date, time) = shift_compound(
                    self.date().to_day_count(),
                    self.time().to_microseconds(),
                    (microseconds, days, years),
                    overflow,
                )?;
                Ok(Self::new(date, Time::from_microseconds(time)))
            }
        }
    }
}

impl Shiftable for Timestamp {
    /// Shifts this interval by exact amounts.
    ///
    /// A day is 86 400 seconds. Weeks, months and years are rejected with
    /// `InvalidArgument`; shift a `CalendarDate` or `DateTime` instead.
    fn shift_with_overflow(
        &self,
        offsets: &[ShiftOffset],
        _: ArithmeticOverflow,
    ) -> ChronalResult<Self> {
        if offsets.iter().all(ShiftOffset::is_zero) {
            return Ok(*self);
        }
        if let Some(offset) = offsets.iter().find(|offset| {
            matches!(
                offset,
                ShiftOffset::Weeks(_) | ShiftOffset::Months(_) | ShiftOffset::Years(_)
            )
        }) {
            return Err(ChronalError::invalid_argument().with_message(alloc::format!(
                "a Timestamp cannot be shifted by {}",
                offset.unit_name()
            )));
        }
        match ShiftPlan::resolve(offsets)? {
            ShiftPlan::Compound {
                microseconds, days, ..
            } => {
                let delta = i128::from(days) * i128::from(MICROSECONDS_PER_DAY) + microseconds;
                self.add(&Timestamp::from_microseconds(delta)?)
            }
            _ => Ok(*self),
        }
    }
}
