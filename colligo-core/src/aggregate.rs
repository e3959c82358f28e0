//! Aggregates over numeric and equality-comparable sequences
//!
//! Overflow policy: [`sum`] never panics. Integer kinds wrap around and float
//! kinds follow IEEE 754. Callers who need to detect overflow use
//! [`checked_sum`].

use crate::error::{CoreError, Result};
use crate::num::{EqualityComparable, Numeric};

/// Sums the sequence starting from the kind's zero.
///
/// An empty sequence sums to zero; there is no failure path.
pub fn sum<T: Numeric>(numbers: &[T]) -> T {
    numbers
        .iter()
        .fold(T::ZERO, |acc, &n| acc.wrapping_add(n))
}

/// Sums the sequence, failing with [`CoreError::Overflow`] instead of
/// wrapping.
pub fn checked_sum<T: Numeric>(numbers: &[T]) -> Result<T> {
    numbers.iter().try_fold(T::ZERO, |acc, &n| {
        acc.checked_add(n).ok_or(CoreError::Overflow)
    })
}

/// Returns the largest element by the kind's natural ordering.
///
/// Fails with [`CoreError::EmptySequence`] on empty input. The running
/// maximum is only replaced by a strictly greater element, so the first of
/// several equal maxima wins and a NaN never displaces an earlier value.
pub fn max<T: Numeric>(numbers: &[T]) -> Result<T> {
    let (&first, rest) = numbers.split_first().ok_or(CoreError::EmptySequence)?;

    Ok(rest
        .iter()
        .fold(first, |best, &n| if n > best { n } else { best }))
}

/// Linear scan for `target`; stops at the first match.
pub fn contains<T: EqualityComparable>(sequence: &[T], target: &T) -> bool {
    sequence.iter().any(|item| item == target)
}
