//! Outcome of a validation pass
//!
//! [`Validation`] is similar to `Result`, but combining two validations
//! accumulates the errors of both sides through [`Semigroup`] instead of
//! stopping at the first failure. A record's validation pass returns
//! `Validation<(), Errors>`.
//!
//! # Examples
//!
//! ```
//! use cascade::{Errors, Validation};
//!
//! let clean = Validation::from_errors(Errors::new());
//! assert!(clean.is_success());
//!
//! let mut errors = Errors::new();
//! errors.add("user", "is invalid");
//! let failed = Validation::from_errors(errors);
//! assert!(failed.is_failure());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use cascade::{Errors, FieldError, Validation};
//!
//! let user = Validation::<(), Errors>::failure(Errors::from_iter([FieldError::invalid("user")]));
//! let items = Validation::<(), Errors>::failure(Errors::from_iter([FieldError::invalid("items")]));
//!
//! let combined = user.and(items);
//! assert_eq!(combined.errors().map(Errors::len), Some(2));
//! ```

use crate::{Errors, Semigroup};

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The error type, [`Errors`] unless stated otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E = Errors> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// ```
    /// use cascade::Validation;
    ///
    /// let v = Validation::from_result(Err::<(), _>("is invalid".to_string()));
    /// assert_eq!(v, Validation::Failure("is invalid".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the accumulated errors, if this validation failed
    #[inline]
    pub fn errors(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// ```
    /// use cascade::{Errors, FieldError, Validation};
    ///
    /// let v = Validation::<(), _>::failure(Errors::from_iter([FieldError::invalid("user")]));
    /// assert_eq!(v.map_err(|errors| errors.full_messages()), Validation::Failure(vec![
    ///     "User is invalid".to_string(),
    /// ]));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl Validation<(), Errors> {
    /// Succeed when `errors` is empty, fail with them otherwise.
    pub fn from_errors(errors: Errors) -> Self {
        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(errors)
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both succeed the result holds both values. If either or both fail, the
    /// errors are combined left to right.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is successful.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in an iterator
    ///
    /// Returns every success value if all validations succeed. Otherwise the
    /// errors of every failure are combined in order.
    ///
    /// ```
    /// use cascade::Validation;
    ///
    /// let result = Validation::all([
    ///     Validation::<i32, Vec<&str>>::success(1),
    ///     Validation::failure(vec!["name can't be blank"]),
    ///     Validation::failure(vec!["age is too low"]),
    /// ]);
    /// assert_eq!(result, Validation::Failure(vec!["name can't be blank", "age is too low"]));
    /// ```
    pub fn all<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
