//! Testing utilities for records that use cascading validation
//!
//! Assertion macros for [`Validatable`](crate::Validatable) records and, with the
//! `proptest` feature, an `Arbitrary` strategy for [`Context`](crate::Context).
//!
//! # Examples
//!
//! ```rust
//! use cascade::{assert_errors_on, assert_invalid, assert_valid};
//! use cascade::{Context, Errors, Validatable, Validation};
//!
//! struct Terms {
//!     accepted: bool,
//! }
//!
//! impl Validatable for Terms {
//!     fn validate(&self, _context: Option<&Context>) -> Validation<(), Errors> {
//!         let mut errors = Errors::new();
//!         if !self.accepted {
//!             errors.add("accepted", "must be accepted");
//!         }
//!         Validation::from_errors(errors)
//!     }
//! }
//!
//! assert_valid!(Terms { accepted: true });
//! assert_invalid!(Terms { accepted: false });
//! assert_errors_on!(Terms { accepted: false }, "accepted", ["must be accepted"]);
//! ```

/// Assert that a record is valid, optionally under a context.
///
/// Panics with the record's full messages otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($record:expr) => {
        $crate::assert_valid!($record, None)
    };
    ($record:expr, $context:expr) => {
        match $crate::Validatable::validate(&$record, $context) {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(errors) => {
                panic!("Expected valid record, got errors: {:?}", errors.full_messages());
            }
        }
    };
}

/// Assert that a record is invalid, optionally under a context.
#[macro_export]
macro_rules! assert_invalid {
    ($record:expr) => {
        $crate::assert_invalid!($record, None)
    };
    ($record:expr, $context:expr) => {
        match $crate::Validatable::validate(&$record, $context) {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(_) => {
                panic!("Expected invalid record, got a valid one");
            }
        }
    };
}

/// Assert the exact messages recorded for one attribute of a record.
///
/// An optional fourth argument gives the validation context.
#[macro_export]
macro_rules! assert_errors_on {
    ($record:expr, $attribute:expr, $expected:expr) => {
        $crate::assert_errors_on!($record, $attribute, $expected, None)
    };
    ($record:expr, $attribute:expr, $expected:expr, $context:expr) => {
        match $crate::Validatable::validate(&$record, $context) {
            $crate::Validation::Failure(errors) => {
                let actual: ::std::vec::Vec<&str> = errors.on($attribute).collect();
                let expected: ::std::vec::Vec<&str> = $expected.iter().copied().collect();
                assert_eq!(actual, expected, "messages on `{}`", $attribute);
            }
            $crate::Validation::Success(_) => {
                panic!(
                    "Expected errors {:?} on `{}`, got a valid record",
                    $expected, $attribute
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Context {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(crate::Context::from_static("create")),
            Just(crate::Context::from_static("update")),
            Just(crate::Context::from_static("publish")),
            "[a-z][a-z_]{0,11}".prop_map(crate::Context::new),
        ]
        .boxed()
    }
}
