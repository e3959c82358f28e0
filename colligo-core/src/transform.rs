//! Stateless higher-order transforms over ordered sequences
//!
//! Every function here borrows its input and never mutates it. Each is total
//! over finite slices and deterministic given a deterministic closure.

use alloc::vec::Vec;

/// Applies `f` to every element, producing a new sequence of the same length.
///
/// `f` runs exactly once per element, in input order.
///
/// ```rust
/// use colligo_core::map;
///
/// let lengths = map(&["a", "bcd", "ef"], |s| s.len());
/// assert_eq!(lengths, vec![1, 3, 2]);
/// ```
pub fn map<T, U, F>(sequence: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sequence.iter().map(f).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// Kept elements are cloned into the output, so heap-owning types such as
/// `String` allocate once per kept element. Use [`filter_ref`] to borrow
/// instead; it allocates only the output vector.
///
/// ```rust
/// use colligo_core::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

/// Like [`filter`], but returns references into `sequence`.
///
/// ```rust
/// use colligo_core::filter_ref;
///
/// let words = ["alpha".to_string(), "be".to_string(), "gamma".to_string()];
/// let long = filter_ref(&words, |w| w.len() > 2);
/// assert_eq!(long, vec![&words[0], &words[2]]);
/// ```
pub fn filter_ref<T, P>(sequence: &[T], mut predicate: P) -> Vec<&T>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().filter(|item| predicate(item)).collect()
}

/// Left fold: `acc = f(acc, item)` for each element, starting at `initial`.
///
/// An empty sequence returns `initial` unchanged.
///
/// ```rust
/// use colligo_core::reduce;
///
/// let sentence = reduce(&["a", "b", "c"], String::new(), |mut acc, s| {
///     acc.push_str(s);
///     acc
/// });
/// assert_eq!(sentence, "abc");
/// ```
pub fn reduce<T, A, F>(sequence: &[T], initial: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    sequence.iter().fold(initial, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn test_map_preserves_length_and_order() {
        let doubled = map(&[1, 2, 3], |n| n * 2);
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_map_changes_element_type() {
        let rendered: Vec<String> = map(&[1.5f64, 2.0], |n| n.to_string());
        assert_eq!(rendered, vec!["1.5".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_map_invokes_once_per_element_in_order() {
        let mut calls = Vec::new();
        let _ = map(&[10, 20, 30], |n| calls.push(*n));
        assert_eq!(calls, vec![10, 20, 30]);
    }

    #[test]
    fn test_map_empty() {
        let empty: [i32; 0] = [];
        assert!(map(&empty, |n| n + 1).is_empty());
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let input = vec!["keep".to_string(), "drop".to_string()];
        let kept = filter(&input, |s| s.starts_with('k'));
        assert_eq!(kept, vec!["keep".to_string()]);
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_filter_none_match() {
        assert!(filter(&[1, 3, 5], |n| n % 2 == 0).is_empty());
    }

    #[test]
    fn test_filter_ref_borrows_in_order() {
        let names = [
            "ann".to_string(),
            "bartholomew".to_string(),
            "cy".to_string(),
            "dorothea".to_string(),
        ];
        let long = filter_ref(&names, |n| n.len() > 3);

        assert_eq!(long.len(), 2);
        assert!(core::ptr::eq(long[0], &names[1]));
        assert!(core::ptr::eq(long[1], &names[3]));
        assert!(filter_ref(&names, |_| false).is_empty());
    }

    #[test]
    fn test_reduce_left_to_right() {
        let folded = reduce(&[1, 2, 3], String::from("0"), |acc, n| {
            alloc::format!("({acc}+{n})")
        });
        assert_eq!(folded, "(((0+1)+2)+3)");
    }

    #[test]
    fn test_reduce_empty_returns_initial() {
        let empty: [u8; 0] = [];
        assert_eq!(reduce(&empty, 42, |acc, _| acc + 1), 42);
    }

    #[test]
    fn test_pipeline() {
        let words = ["apple", "kiwi", "banana", "fig"];
        let long = filter(&words, |w| w.len() > 3);
        let lengths = map(&long, |w| w.len());
        let total = reduce(&lengths, 0, |acc, n| acc + n);
        assert_eq!(total, 15);
    }
}
