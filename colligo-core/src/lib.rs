//! Generic containers, functional transforms and numeric aggregates
//!
//! This crate is the dependency-free foundation of Colligo. Everything here
//! is synchronous, in-memory and deterministic: operations are bounded by
//! input size and report failures through [`CoreError`] instead of panicking.
//!
//! # Modules
//!
//! - [`num`]: the `Numeric` and `EqualityComparable` constraint traits
//! - [`container`], [`stack`], [`queue`]: LIFO/FIFO adapters with an explicit
//!   empty-container failure
//! - [`transform`]: `map`, `filter`/`filter_ref` and `reduce` over slices
//! - [`aggregate`]: `sum`, `checked_sum`, `max` and `contains`
//! - [`pair`]: a two-slot value with `swap`
//!
//! # Example
//!
//! ```rust
//! use colligo_core::{max, reduce, sum, CoreError, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//!
//! let numbers = [5, 3, 9, 9, 1];
//! assert_eq!(sum(&numbers), 27);
//! assert_eq!(reduce(&numbers, 0, |acc, n| acc + n), 27);
//! assert_eq!(max(&numbers), Ok(9));
//! assert_eq!(max::<i32>(&[]), Err(CoreError::EmptySequence));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aggregate;
pub mod error;
pub mod num;
pub mod pair;

#[cfg(feature = "alloc")]
pub mod container;
#[cfg(feature = "alloc")]
pub mod queue;
#[cfg(feature = "alloc")]
pub mod stack;
#[cfg(feature = "alloc")]
pub mod transform;

// Re-export key types
pub use aggregate::{checked_sum, contains, max, sum};
pub use error::{CoreError, Result};
pub use num::{EqualityComparable, Numeric};
pub use pair::Pair;

#[cfg(feature = "alloc")]
pub use container::Container;
#[cfg(feature = "alloc")]
pub use queue::Queue;
#[cfg(feature = "alloc")]
pub use stack::Stack;
#[cfg(feature = "alloc")]
pub use transform::{filter, filter_ref, map, reduce};
