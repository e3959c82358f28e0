//! Constraint traits for generic operations
//!
//! Two capability classes restrict which element kinds the generic functions
//! in this crate accept. Both are checked by the compiler; there is no
//! runtime predicate and no runtime failure for a "wrong" kind.
//!
//! - [`Numeric`]: the closed set `i8`, `i16`, `i32`, `i64`, `f32`, `f64`.
//!   The trait is sealed, so downstream crates cannot widen the set.
//! - [`EqualityComparable`]: anything supporting `==` / `!=`.

use core::fmt::Debug;
use core::ops::Add;

mod sealed {
    pub trait Sealed {}
}

/// Scalar kinds accepted by [`sum`](crate::sum), [`checked_sum`](crate::checked_sum)
/// and [`max`](crate::max).
///
/// Unsigned, 128-bit and arbitrary-precision kinds are deliberately excluded
/// so that overflow and rounding behave predictably per kind.
pub trait Numeric:
    sealed::Sealed + Copy + PartialOrd + Debug + Add<Output = Self> + 'static
{
    /// Additive identity of the kind.
    const ZERO: Self;

    /// Addition that never panics.
    ///
    /// Integers wrap around on overflow; floats follow IEEE 754 and saturate
    /// to an infinity.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Addition that reports overflow as `None`.
    ///
    /// For floats a non-finite result from two finite operands counts as
    /// overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const ZERO: Self = 0;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let result = self + rhs;
                    if result.is_finite() || !self.is_finite() || !rhs.is_finite() {
                        Some(result)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8, i16, i32, i64);
impl_numeric_for_float!(f32, f64);

/// Kinds that support `==` / `!=`; required by [`contains`](crate::contains).
pub trait EqualityComparable: PartialEq {}

impl<T: PartialEq + ?Sized> EqualityComparable for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_of<T: Numeric>() -> T {
        T::ZERO
    }

    #[test]
    fn test_zero_constants() {
        assert_eq!(zero_of::<i8>(), 0);
        assert_eq!(zero_of::<i64>(), 0);
        assert_eq!(zero_of::<f32>(), 0.0);
        assert_eq!(zero_of::<f64>(), 0.0);
    }

    #[test]
    fn test_integer_wrapping_add() {
        assert_eq!(Numeric::wrapping_add(i8::MAX, 1), i8::MIN);
        assert_eq!(Numeric::wrapping_add(40i32, 2), 42);
    }

    #[test]
    fn test_integer_checked_add() {
        assert_eq!(Numeric::checked_add(i16::MAX, 1), None);
        assert_eq!(Numeric::checked_add(1i16, 2), Some(3));
    }

    #[test]
    fn test_float_checked_add_detects_overflow() {
        assert_eq!(Numeric::checked_add(f32::MAX, f32::MAX), None);
        assert_eq!(Numeric::checked_add(1.5f64, 2.5), Some(4.0));
        // Already non-finite input propagates instead of counting as overflow
        assert_eq!(
            Numeric::checked_add(f64::INFINITY, 1.0),
            Some(f64::INFINITY)
        );
    }

    #[test]
    fn test_float_wrapping_add_saturates_to_infinity() {
        assert_eq!(Numeric::wrapping_add(f64::MAX, f64::MAX), f64::INFINITY);
    }
}
