//! Field-level error collection
//!
//! [`Errors`] is the ordered, append-only set of `(attribute, message)` entries
//! produced by one validation pass over a record. Rules only ever add to it; a
//! fresh collection is built for every pass.
//!
//! # Examples
//!
//! ```
//! use cascade::Errors;
//!
//! let mut errors = Errors::new();
//! errors.add("user_credentials", "is invalid");
//! errors.add("terms_accepted", "must be accepted");
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.on("user_credentials").collect::<Vec<_>>(), vec!["is invalid"]);
//! assert_eq!(
//!     errors.full_messages(),
//!     vec!["User credentials is invalid", "Terms accepted must be accepted"],
//! );
//! ```

use std::fmt;

use crate::Semigroup;

/// Message recorded when a nested record fails its own validation.
pub const INVALID: &str = "is invalid";

/// A single error attached to an attribute of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    attribute: String,
    message: String,
}

impl FieldError {
    /// Create an error for `attribute` with the given message.
    pub fn new(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Create the generic [`INVALID`] error for `attribute`.
    ///
    /// ```
    /// use cascade::FieldError;
    ///
    /// let err = FieldError::invalid("items");
    /// assert_eq!(err.message(), "is invalid");
    /// ```
    pub fn invalid(attribute: impl Into<String>) -> Self {
        FieldError::new(attribute, INVALID)
    }

    /// The attribute this error belongs to.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The error message, without the attribute name.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message prefixed with the humanized attribute name.
    ///
    /// ```
    /// use cascade::FieldError;
    ///
    /// let err = FieldError::new("customer_email", "can't be blank");
    /// assert_eq!(err.full_message(), "Customer email can't be blank");
    /// ```
    pub fn full_message(&self) -> String {
        format!("{} {}", humanize(&self.attribute), self.message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_message())
    }
}

/// Ordered collection of [`FieldError`]s for one record
///
/// Entries keep insertion order and an attribute may carry several messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Errors {
    entries: Vec<FieldError>,
}

impl Errors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Errors::default()
    }

    /// Append an error for `attribute`.
    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.entries.push(FieldError::new(attribute, message));
    }

    /// Append an already-built error.
    pub fn push(&mut self, error: FieldError) {
        self.entries.push(error);
    }

    /// `true` when no error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over every error in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.entries.iter()
    }

    /// Messages recorded for `attribute`, in insertion order.
    pub fn on<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.attribute == attribute)
            .map(FieldError::message)
    }

    /// `true` when at least one error is recorded for `attribute`.
    pub fn contains(&self, attribute: &str) -> bool {
        self.entries.iter().any(|e| e.attribute == attribute)
    }

    /// Distinct attributes that carry errors, in first-seen order.
    ///
    /// ```
    /// use cascade::Errors;
    ///
    /// let mut errors = Errors::new();
    /// errors.add("name", "can't be blank");
    /// errors.add("age", "is not a number");
    /// errors.add("name", "is too short");
    /// assert_eq!(errors.attributes().collect::<Vec<_>>(), vec!["name", "age"]);
    /// ```
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(idx, e)| {
                !self.entries[..*idx]
                    .iter()
                    .any(|seen| seen.attribute == e.attribute)
            })
            .map(|(_, e)| e.attribute())
    }

    /// Every error rendered as `"<Attribute> <message>"`.
    pub fn full_messages(&self) -> Vec<String> {
        self.entries.iter().map(FieldError::full_message).collect()
    }

    /// Remove every recorded error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Semigroup for Errors {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl Extend<FieldError> for Errors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<FieldError> for Errors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Errors {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Errors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// "user_credentials" -> "User credentials"
fn humanize(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let errors = Errors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut errors = Errors::new();
        errors.add("b", "second");
        errors.add("a", "first");
        let attrs: Vec<_> = errors.iter().map(FieldError::attribute).collect();
        assert_eq!(attrs, vec!["b", "a"]);
    }

    #[test]
    fn test_on_filters_by_attribute() {
        let mut errors = Errors::new();
        errors.add("name", "can't be blank");
        errors.add("age", "is not included in the list");
        errors.add("name", "is too short");
        assert_eq!(
            errors.on("name").collect::<Vec<_>>(),
            vec!["can't be blank", "is too short"]
        );
        assert_eq!(errors.on("missing").count(), 0);
        assert!(errors.contains("age"));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("user_credentials"), "User credentials");
        assert_eq!(humanize("items"), "Items");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_full_messages() {
        let mut errors = Errors::new();
        errors.push(FieldError::invalid("user"));
        errors.add("terms_accepted", "must be accepted");
        assert_eq!(
            errors.full_messages(),
            vec!["User is invalid", "Terms accepted must be accepted"]
        );
    }

    #[test]
    fn test_display_joins_full_messages() {
        let errors: Errors = vec![FieldError::invalid("user"), FieldError::invalid("items")]
            .into_iter()
            .collect();
        assert_eq!(errors.to_string(), "User is invalid, Items is invalid");
    }

    #[test]
    fn test_combine_appends() {
        let mut a = Errors::new();
        a.add("x", "one");
        let mut b = Errors::new();
        b.add("y", "two");
        let combined = a.combine(b);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.attributes().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_clear() {
        let mut errors = Errors::new();
        errors.add("x", "one");
        errors.clear();
        assert!(errors.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_list_of_entries() {
        let mut errors = Errors::new();
        errors.add("user", INVALID);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "attribute": "user", "message": "is invalid" }])
        );
    }
}
