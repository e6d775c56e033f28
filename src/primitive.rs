//! Implementation of the FiniteF64 primitive

use crate::{ChronalError, ChronalResult};
use core_maths::CoreFloat;
use num_traits::FromPrimitive;

/// An `f64` that is guaranteed to be neither `NaN` nor infinite.
///
/// Scalar unit values enter the crate through this type so the conversion
/// functions never see a non-finite number.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    #[inline]
    pub fn as_inner(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    #[inline]
    pub fn checked_mul(&self, other: f64) -> ChronalResult<Self> {
        Self::try_from(self.0 * other)
    }

    #[inline]
    pub fn checked_div(&self, other: f64) -> ChronalResult<Self> {
        Self::try_from(self.0 / other)
    }

    /// Floors the value and converts it into an `i128`.
    pub(crate) fn floor_to_i128(&self) -> ChronalResult<i128> {
        i128::from_f64(self.0.floor())
            .ok_or(ChronalError::range().with_message("number exceeds a valid integer range."))
    }

    /// Floors the value into an `i128`, snapping to the nearest integer
    /// first when the value lies within `tolerance` of it.
    pub(crate) fn snapped_floor_to_i128(&self, tolerance: f64) -> ChronalResult<i128> {
        let nearest = self.0.round();
        if (self.0 - nearest).abs() <= tolerance {
            return Self(nearest).floor_to_i128();
        }
        self.floor_to_i128()
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = ChronalError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ChronalError::range().with_message("number value is not a finite value."));
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::FiniteF64;

    #[test]
    fn rejects_non_finite() {
        assert!(FiniteF64::try_from(f64::NAN).is_err());
        assert!(FiniteF64::try_from(f64::INFINITY).is_err());
        assert!(FiniteF64::try_from(f64::MAX).unwrap().checked_mul(2.0).is_err());
    }

    #[test]
    fn floors_toward_negative_infinity() {
        assert_eq!(FiniteF64(1.9).floor_to_i128().unwrap(), 1);
        assert_eq!(FiniteF64(-0.5).floor_to_i128().unwrap(), -1);
        assert_eq!(FiniteF64(-2.0).floor_to_i128().unwrap(), -2);
        assert!(FiniteF64(1e300).floor_to_i128().is_err());
    }

    #[test]
    fn snapping_absorbs_representation_error() {
        assert_eq!(FiniteF64(1_000_999.999_999_9).snapped_floor_to_i128(1e-6).unwrap(), 1_001_000);
        assert_eq!(FiniteF64(-289.999_999_9).snapped_floor_to_i128(1e-6).unwrap(), -290);
        assert_eq!(FiniteF64(2.9).snapped_floor_to_i128(1e-6).unwrap(), 2);
        assert_eq!(FiniteF64(-2.5).snapped_floor_to_i128(1e-6).unwrap(), -3);
    }
}
