//! Nested attribute values
//!
//! A cascaded attribute holds either one record or an ordered collection of
//! records. [`Nested`] makes that shape explicit, and [`AsNested`] lets common
//! containers produce it, with `None` standing for an absent value.
//!
//! # Examples
//!
//! ```
//! use cascade::{AsNested, Nested};
//!
//! let one: Option<u8> = Some(1);
//! let many = vec![1u8, 2, 3];
//! let none: Option<u8> = None;
//!
//! assert!(matches!(one.as_nested(), Some(Nested::Single(&1))));
//! assert_eq!(many.as_nested().map(|n| n.len()), Some(3));
//! assert!(none.as_nested().is_none());
//! ```

use crate::{Context, Validatable};

/// The shape of a present nested value
#[derive(Debug, PartialEq, Eq)]
pub enum Nested<'a, T> {
    /// A single nested record
    Single(&'a T),
    /// An ordered collection of nested records
    Many(&'a [T]),
}

impl<T> Clone for Nested<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nested<'_, T> {}

impl<'a, T> Nested<'a, T> {
    /// Number of records held: always 1 for [`Nested::Single`].
    pub fn len(&self) -> usize {
        match self {
            Nested::Single(_) => 1,
            Nested::Many(items) => items.len(),
        }
    }

    /// `true` for an empty collection.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the held records in order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        match *self {
            Nested::Single(item) => std::slice::from_ref(item).iter(),
            Nested::Many(items) => items.iter(),
        }
    }
}

impl<T: Validatable> Nested<'_, T> {
    /// `true` when every held record is valid under `context`.
    ///
    /// Stops at the first invalid record. An empty collection is valid.
    pub fn is_valid(&self, context: Option<&Context>) -> bool {
        self.iter().all(|item| item.is_valid(context))
    }
}

impl<'a, T> From<&'a T> for Nested<'a, T> {
    fn from(item: &'a T) -> Self {
        Nested::Single(item)
    }
}

impl<'a, T> From<&'a [T]> for Nested<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Nested::Many(items)
    }
}

impl<'a, T> IntoIterator for Nested<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Containers that can present their content as a [`Nested`] value
///
/// Returns `None` when the attribute is absent.
pub trait AsNested {
    /// The nested record type
    type Item;

    /// Borrow the content as a nested value, or `None` when absent.
    fn as_nested(&self) -> Option<Nested<'_, Self::Item>>;
}

impl<T> AsNested for Option<T> {
    type Item = T;

    fn as_nested(&self) -> Option<Nested<'_, T>> {
        self.as_ref().map(Nested::Single)
    }
}

impl<T> AsNested for Vec<T> {
    type Item = T;

    fn as_nested(&self) -> Option<Nested<'_, T>> {
        Some(Nested::Many(self))
    }
}

impl<T> AsNested for [T] {
    type Item = T;

    fn as_nested(&self) -> Option<Nested<'_, T>> {
        Some(Nested::Many(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Errors, Validation};

    struct Item(bool);

    impl Validatable for Item {
        fn validate(&self, _context: Option<&Context>) -> Validation<(), Errors> {
            let mut errors = Errors::new();
            if !self.0 {
                errors.add("item", "is broken");
            }
            Validation::from_errors(errors)
        }
    }

    #[test]
    fn test_single_len_is_one() {
        let item = Item(true);
        let nested = Nested::from(&item);
        assert_eq!(nested.len(), 1);
        assert!(!nested.is_empty());
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let items: Vec<Item> = Vec::new();
        let nested = Nested::Many(&items);
        assert!(nested.is_empty());
        assert!(nested.is_valid(None));
    }

    #[test]
    fn test_any_invalid_element_fails() {
        let items = vec![Item(true), Item(false), Item(true)];
        assert!(!Nested::Many(&items).is_valid(None));
    }

    #[test]
    fn test_iter_preserves_order() {
        let items = vec![1, 2, 3];
        let collected: Vec<_> = Nested::Many(&items).into_iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_as_nested_shapes() {
        let absent: Option<Item> = None;
        assert!(absent.as_nested().is_none());

        let present = Some(Item(true));
        assert!(matches!(present.as_nested(), Some(Nested::Single(_))));

        let slice: &[u8] = &[1, 2];
        assert!(matches!(slice.as_nested(), Some(Nested::Many(items)) if items.len() == 2));
    }
}
