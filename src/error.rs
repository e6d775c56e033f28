//! This module implements `ChronalError`.

use alloc::borrow::Cow;
use core::fmt;

/// `ChronalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error kind for any failure that does not fit a more specific kind.
    #[default]
    Generic,
    /// A malformed weekday or month name, or an out of range ordinal or unit.
    InvalidArgument,
    /// A compound shift mixed `months` with other units.
    AmbiguousShift,
    /// A `(year, month, day)` triple failed the Gregorian validity check.
    InvalidDate,
    /// A value left the representable range.
    Range,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidArgument => "InvalidArgument",
            Self::AmbiguousShift => "AmbiguousShift",
            Self::InvalidDate => "InvalidDate",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `chronal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronalError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl ChronalError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Create an ambiguous shift error.
    #[must_use]
    pub fn ambiguous_shift() -> Self {
        Self::new(ErrorKind::AmbiguousShift)
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create a range error.
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates an assertion error
    #[must_use]
    pub(crate) fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error: assertion failed.")
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for ChronalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChronalError {}
