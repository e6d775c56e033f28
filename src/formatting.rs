//! `Writeable` implementations for the displayable components.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    components::{CalendarDate, DateTime, Duration, Time},
    Sign,
};

impl_display_with_writeable!(CalendarDate);
impl_display_with_writeable!(Time);
impl_display_with_writeable!(DateTime);
impl_display_with_writeable!(Duration);

impl Writeable for CalendarDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.year(), sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.month(), sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.day(), sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.year()) { 4 } else { 7 };
        LengthHint::exact(6 + year_length)
    }
}

impl Writeable for Time {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour(), sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute(), sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.second(), sink)?;
        write_fraction(self.microsecond(), sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.microsecond() == 0 {
            return LengthHint::exact(8);
        }
        LengthHint::between(10, 15)
    }
}

impl Writeable for DateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date().write_to(sink)?;
        sink.write_char('T')?;
        self.time().write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date().writeable_length_hint() + 1 + self.time().writeable_length_hint()
    }
}

impl Writeable for Duration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let (sign, hours, minutes, seconds, fraction) = self.magnitude_parts();
        if sign == Sign::Negative {
            sink.write_char('-')?;
        }
        sink.write_str("PT")?;
        if hours != 0 {
            hours.write_to(sink)?;
            sink.write_char('H')?;
        }
        if minutes != 0 {
            minutes.write_to(sink)?;
            sink.write_char('M')?;
        }
        if seconds != 0 || fraction != 0 || sign == Sign::Zero {
            seconds.write_to(sink)?;
            write_fraction(fraction, sink)?;
            sink.write_char('S')?;
        }
        Ok(())
    }
}

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        return write_padded_digits(year.unsigned_abs(), 4, sink);
    }
    let sign = if year < 0 { '-' } else { '+' };
    sink.write_char(sign)?;
    write_padded_digits(year.unsigned_abs(), 6, sink)
}

/// Writes `value` left padded with zeros to at least `width` digits.
fn write_padded_digits<W: core::fmt::Write + ?Sized>(
    value: u32,
    width: u32,
    sink: &mut W,
) -> core::fmt::Result {
    let digits = value.checked_ilog10().unwrap_or(0) + 1;
    for _ in digits..width {
        sink.write_char('0')?;
    }
    value.write_to(sink)
}

/// Writes a sub-second microsecond count as a decimal fraction with
/// trailing zeros removed. Nothing is written for zero.
fn write_fraction<W: core::fmt::Write + ?Sized>(
    microseconds: u32,
    sink: &mut W,
) -> core::fmt::Result {
    if microseconds == 0 {
        return Ok(());
    }
    sink.write_char('.')?;
    let mut value = microseconds;
    let mut width = 6;
    while value % 10 == 0 {
        value /= 10;
        width -= 1;
    }
    write_padded_digits(value, width, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    fn fraction(micros: u32) -> String {
        let mut out = String::new();
        write_fraction(micros, &mut out).unwrap();
        out
    }

    #[test]
    fn fractions_trim_trailing_zeros() {
        assert_eq!(fraction(0), "");
        assert_eq!(fraction(500_000), ".5");
        assert_eq!(fraction(7), ".000007");
        assert_eq!(fraction(4_005), ".004005");
        assert_eq!(fraction(120_000), ".12");
    }

    #[test]
    fn length_hints() {
        let date = CalendarDate::new(2021, 1, 1);
        assert_eq!(date.writeable_length_hint(), LengthHint::exact(10));
        writeable::assert_writeable_eq!(date, "2021-01-01");
        writeable::assert_writeable_eq!(Time::new(9, 5, 0, 0), "09:05:00");
    }
}
