//! Two-slot value type

use core::fmt;

/// A pair of independently typed values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<T, U> {
    /// First slot
    pub first: T,
    /// Second slot
    pub second: U,
}

impl<T, U> Pair<T, U> {
    /// Creates a pair from its two slots.
    pub const fn new(first: T, second: U) -> Self {
        Self { first, second }
    }

    /// Returns a new pair with the slots exchanged.
    pub fn swap(self) -> Pair<U, T> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    /// Splits the pair into a tuple.
    pub fn into_tuple(self) -> (T, U) {
        (self.first, self.second)
    }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
    fn from((first, second): (T, U)) -> Self {
        Self { first, second }
    }
}

impl<T, U> From<Pair<T, U>> for (T, U) {
    fn from(pair: Pair<T, U>) -> Self {
        pair.into_tuple()
    }
}

impl<T: fmt::Display, U: fmt::Display> fmt::Display for Pair<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_exchanges_slots() {
        let pair = Pair::new("age", 42);
        let swapped = pair.swap();
        assert_eq!(swapped, Pair::new(42, "age"));
        // Copy source is still usable and unchanged
        assert_eq!(pair.first, "age");
    }

    #[test]
    fn test_swap_owned_values() {
        let pair = Pair::new(String::from("key"), vec![1, 2]);
        let swapped = pair.clone().swap();
        assert_eq!(swapped.first, vec![1, 2]);
        assert_eq!(swapped.second, "key");
        assert_eq!(pair.first, "key");
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::new(1, "one").to_string(), "(1, one)");
    }

    #[test]
    fn test_tuple_conversions() {
        let pair: Pair<i32, char> = (1, 'x').into();
        let tuple: (i32, char) = pair.into();
        assert_eq!(tuple, (1, 'x'));
    }
}
