//! English month and weekday names.

use core::str::FromStr;

use tinystr::TinyAsciiStr;

use crate::{ChronalError, ChronalResult};

/// The longest accepted name, "september" or "wednesday".
const MAX_NAME_LEN: usize = 9;

/// Lowercases `name` for matching, rejecting anything that cannot be a
/// month or weekday name.
fn normalize_name(name: &str) -> Option<TinyAsciiStr<MAX_NAME_LEN>> {
    TinyAsciiStr::<MAX_NAME_LEN>::try_from_str(name)
        .ok()
        .map(TinyAsciiStr::to_ascii_lowercase)
}

/// Returns whether the lowercased `input` is `name` or its three letter
/// abbreviation.
fn matches_name(input: &TinyAsciiStr<MAX_NAME_LEN>, name: &str) -> bool {
    normalize_name(name)
        .is_some_and(|full| *input == full || full.as_str().get(..3) == Some(input.as_str()))
}

/// A month of the Gregorian calendar.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the `Month` for an ordinal in `1..=12`.
    ///
    /// ```rust
    /// use chronal::Month;
    ///
    /// assert_eq!(Month::from_ordinal(2).unwrap(), Month::February);
    /// assert!(Month::from_ordinal(13).is_err());
    /// ```
    pub fn from_ordinal(ordinal: u8) -> ChronalResult<Self> {
        ordinal
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or_else(|| {
                ChronalError::invalid_argument()
                    .with_message(alloc::format!("{ordinal} is not a valid month ordinal"))
            })
    }

    /// Returns this month's ordinal, 1 for January.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the full English name of this month.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Returns the three letter English abbreviation of this month.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        // Every name is ASCII and at least three bytes long.
        &self.name()[..3]
    }
}

impl FromStr for Month {
    type Err = ChronalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_name(s)
            .and_then(|input| {
                Self::ALL
                    .into_iter()
                    .find(|month| matches_name(&input, month.name()))
            })
            .ok_or_else(|| {
                ChronalError::invalid_argument()
                    .with_message(alloc::format!("'{s}' is not a valid month name"))
            })
    }
}

/// A day of the ISO week, Monday first.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the `Weekday` for an ISO ordinal in `1..=7`.
    pub fn from_ordinal(ordinal: u8) -> ChronalResult<Self> {
        ordinal
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or_else(|| {
                ChronalError::invalid_argument()
                    .with_message(alloc::format!("{ordinal} is not a valid weekday ordinal"))
            })
    }

    /// Returns the `Weekday` of an ISO weekday computed by the date
    /// equations, which is always within `1..=7`.
    pub(crate) fn from_iso_weekday(weekday: u8) -> Self {
        Self::ALL[usize::from(weekday.wrapping_sub(1) % 7)]
    }

    /// Returns the ISO ordinal of this weekday, 1 for Monday.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }
}

impl FromStr for Weekday {
    type Err = ChronalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_name(s)
            .and_then(|input| {
                Self::ALL
                    .into_iter()
                    .find(|weekday| matches_name(&input, weekday.name()))
            })
            .ok_or_else(|| {
                ChronalError::invalid_argument()
                    .with_message(alloc::format!("'{s}' is not a valid weekday name"))
            })
    }
}
