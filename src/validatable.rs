//! The capability a nested record needs to take part in cascading validation

use std::rc::Rc;
use std::sync::Arc;

use crate::{Context, Errors, Validation};

/// A record that can check itself under an optional [`Context`]
///
/// Implementors return their own errors from [`validate`](Validatable::validate).
/// A cascade only looks at the outcome through [`is_valid`](Validatable::is_valid);
/// callers that need the nested detail call `validate` on the child directly.
///
/// # Examples
///
/// ```
/// use cascade::{Context, Errors, Validatable, Validation};
///
/// struct Child {
///     name: String,
///     age: Option<u8>,
/// }
///
/// impl Validatable for Child {
///     fn validate(&self, _context: Option<&Context>) -> Validation<(), Errors> {
///         let mut errors = Errors::new();
///         if self.name.is_empty() {
///             errors.add("name", "can't be blank");
///         }
///         if !self.age.is_some_and(|age| (18..=65).contains(&age)) {
///             errors.add("age", "is not included in the list");
///         }
///         Validation::from_errors(errors)
///     }
/// }
///
/// let child = Child { name: "hoge".into(), age: Some(11) };
/// assert!(!child.is_valid(None));
/// ```
pub trait Validatable {
    /// Run this record's rules for `context` and return its errors.
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors>;

    /// `true` when [`validate`](Validatable::validate) reports no errors.
    fn is_valid(&self, context: Option<&Context>) -> bool {
        self.validate(context).is_success()
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        (**self).validate(context)
    }

    fn is_valid(&self, context: Option<&Context>) -> bool {
        (**self).is_valid(context)
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        (**self).validate(context)
    }

    fn is_valid(&self, context: Option<&Context>) -> bool {
        (**self).is_valid(context)
    }
}

impl<T: Validatable + ?Sized> Validatable for Rc<T> {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        (**self).validate(context)
    }

    fn is_valid(&self, context: Option<&Context>) -> bool {
        (**self).is_valid(context)
    }
}

impl<T: Validatable + ?Sized> Validatable for Arc<T> {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        (**self).validate(context)
    }

    fn is_valid(&self, context: Option<&Context>) -> bool {
        (**self).is_valid(context)
    }
}
