//! Stateless conversions between units of time and the carry representation.
//!
//! Every fixed-length [`Unit`] is a linear scaling of a microsecond, so each
//! conversion is a multiplication by the source unit's length followed by a
//! division by the target unit's length. The lengths come from
//! [`Unit::as_microseconds`].
//!
//! The carry representation splits a microsecond count into three tiers of
//! 10^6: `(coarse, mid, fine)`, where the magnitude is
//! `coarse * 10^12 + mid * 10^6 + fine`. After carrying, `mid` and `fine`
//! always lie in `[0, 10^6)` and the sign lives in `coarse`.

use num_traits::Euclid;

use crate::{
    options::Unit, primitive::FiniteF64, ChronalError, ChronalResult, CARRY_BASE,
};

const CARRY_BASE_128: i128 = CARRY_BASE as i128;

/// Distance from a whole microsecond below which a product counts as whole.
const SNAP_TOLERANCE: f64 = 1e-6;

/// Converts `value` expressed in `from` units into `to` units.
///
/// The result may be fractional, e.g. an odd microsecond count converted to
/// seconds.
///
/// ```rust
/// use chronal::{convert, options::Unit};
///
/// assert_eq!(convert::convert(1.5, Unit::Minute, Unit::Second).unwrap(), 90.0);
/// assert_eq!(convert::convert(500.0, Unit::Millisecond, Unit::Second).unwrap(), 0.5);
/// ```
///
/// # Errors
///   - `InvalidArgument` if either unit is a calendar unit.
///   - `Range` if `value` or the result is not finite.
pub fn convert(value: f64, from: Unit, to: Unit) -> ChronalResult<f64> {
    let value = FiniteF64::try_from(value)?;
    let from_len = from.try_as_microseconds()?;
    let to_len = to.try_as_microseconds()?;
    if from == to || value.is_zero() {
        return Ok(value.as_inner());
    }
    Ok(value
        .checked_mul(from_len as f64)?
        .checked_div(to_len as f64)?
        .as_inner())
}

/// Converts an integral `value` in `from` units into whole `to` units,
/// flooring any remainder.
pub fn convert_exact(value: i128, from: Unit, to: Unit) -> ChronalResult<i128> {
    let from_len = i128::from(from.try_as_microseconds()?);
    let to_len = i128::from(to.try_as_microseconds()?);
    let micros = value
        .checked_mul(from_len)
        .ok_or(ChronalError::range().with_message("unit conversion overflowed."))?;
    Ok(micros.div_euclid(to_len))
}

/// Converts a scalar in `unit` into the carry representation.
///
/// This is the single place where fractional microseconds are discarded;
/// they are floored. A product within [`SNAP_TOLERANCE`] of a whole
/// microsecond is binary rounding noise and snaps to it, so `1.001` seconds
/// is exactly 1 001 000 microseconds.
///
/// ```rust
/// use chronal::{convert, options::Unit};
///
/// assert_eq!(convert::to_carry(1.5, Unit::Second).unwrap(), (0, 1, 500_000));
/// assert_eq!(convert::to_carry(-1.0, Unit::Microsecond).unwrap(), (-1, 999_999, 999_999));
/// ```
pub fn to_carry(value: f64, unit: Unit) -> ChronalResult<(i64, u32, u32)> {
    let len = unit.try_as_microseconds()?;
    let micros = FiniteF64::try_from(value)?
        .checked_mul(len as f64)?
        .snapped_floor_to_i128(SNAP_TOLERANCE)?;
    carry(0, 0, micros)
}

/// Converts a carry triple back into a scalar in `unit`.
///
/// `mid` and `fine` do not need to be normalized; they are folded in
/// linearly.
pub fn from_carry(coarse: i64, mid: i64, fine: i64, unit: Unit) -> ChronalResult<f64> {
    microseconds_to_unit(fold_carry(coarse, mid, fine), unit)
}

/// Carries raw `(coarse, mid, fine)` tiers into their normalized form.
///
/// Each tier is divided by 10^6 with floor semantics, finest first: the
/// quotient moves into the next coarser tier and the remainder, always in
/// `[0, 10^6)`, stays. A negative magnitude therefore keeps non-negative
/// `mid` and `fine` tiers and a negative `coarse` tier.
pub(crate) fn carry(coarse: i128, mid: i128, fine: i128) -> ChronalResult<(i64, u32, u32)> {
    let (overflow, fine) = fine.div_rem_euclid(&CARRY_BASE_128);
    let (overflow, mid) = (mid + overflow).div_rem_euclid(&CARRY_BASE_128);
    let coarse = i64::try_from(coarse + overflow)
        .map_err(|_| ChronalError::range().with_message("carry exceeds a valid coarse range."))?;
    // NOTE: Euclidean remainders by 10^6 are within [0, 10^6).
    Ok((coarse, mid as u32, fine as u32))
}

/// Folds three (possibly unnormalized) tiers into a microsecond count.
#[inline]
pub(crate) fn fold_carry(coarse: i64, mid: i64, fine: i64) -> i128 {
    i128::from(coarse) * CARRY_BASE_128 * CARRY_BASE_128
        + i128::from(mid) * CARRY_BASE_128
        + i128::from(fine)
}

/// Expresses a microsecond count in `unit`, keeping the integral part exact.
///
/// The magnitude is split and the sign applied last, so a count and its
/// negation convert to exact negatives of each other.
pub(crate) fn microseconds_to_unit(micros: i128, unit: Unit) -> ChronalResult<f64> {
    let len = u128::from(unit.try_as_microseconds()?.unsigned_abs());
    let (whole, remainder) = micros.unsigned_abs().div_rem_euclid(&len);
    let magnitude = whole as f64 + remainder as f64 / len as f64;
    let result = if micros < 0 { -magnitude } else { magnitude };
    Ok(FiniteF64::try_from(result)?.as_inner())
}
