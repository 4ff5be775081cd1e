//! Semigroup trait for combining error collections
//!
//! A Semigroup is a type with an associative binary operation. Validation passes
//! use it to merge the errors of independent rules into one collection without
//! stopping at the first failure.
//!
//! For a type to be a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use cascade::{Errors, Semigroup};
//!
//! let mut first = Errors::new();
//! first.add("user", "is invalid");
//!
//! let mut second = Errors::new();
//! second.add("items", "is invalid");
//!
//! let merged = first.combine(second);
//! assert_eq!(merged.attributes().collect::<Vec<_>>(), vec!["user", "items"]);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value. Clone first if the original is still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// ```
    /// use cascade::Semigroup;
    ///
    /// assert_eq!(vec!["a"].combine(vec!["b"]), vec!["a", "b"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: Self) -> Self {}
}
