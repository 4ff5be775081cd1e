//! # Cascade
//!
//! Cascading validation for nested records.
//!
//! A record that holds another record, or a collection of them, can declare a
//! **cascade** on that attribute: validating the parent re-validates the nested
//! records and, if any of them fails, records a single `"is invalid"` error
//! against the attribute. The **composite** validator is the same rule under a
//! second name.
//!
//! - absent values and empty collections are skipped
//! - one error per attribute, however many nested records fail
//! - the nested check inherits the parent's [`Context`] unless the rule forces one
//!
//! ## Quick Example
//!
//! ```rust
//! use cascade::{AsNested, CascadeOptions, Context, Errors, RuleSet, Validatable, Validation};
//!
//! struct Article {
//!     title: String,
//!     author: Option<String>,
//! }
//!
//! impl Validatable for Article {
//!     fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
//!         RuleSet::new()
//!             .rule("title", |a: &Article, _| {
//!                 if a.title.is_empty() { Err("can't be blank".into()) } else { Ok(()) }
//!             })
//!             .rule("author", |a: &Article, _| {
//!                 if a.author.is_none() { Err("can't be blank".into()) } else { Ok(()) }
//!             })
//!             .on("publish")
//!             .validate(self, context)
//!     }
//! }
//!
//! struct ArticleForm {
//!     article: Option<Article>,
//! }
//!
//! let rules = RuleSet::new().cascade_with(
//!     "article",
//!     |form: &ArticleForm| form.article.as_nested(),
//!     CascadeOptions::new().on("publish"),
//! );
//!
//! let form = ArticleForm {
//!     article: Some(Article { title: "My Article".into(), author: None }),
//! };
//!
//! match rules.validate(&form, None) {
//!     Validation::Success(()) => println!("Article form is valid!"),
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.full_messages(), vec!["Article is invalid"]);
//!     }
//! }
//! ```
//!
//! Records can also call [`cascade()`] directly from their own `validate`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod cascade;
pub mod context;
pub mod errors;
pub mod nested;
pub mod rules;
pub mod semigroup;
pub mod testing;
pub mod validatable;
pub mod validation;

// Re-exports
pub use crate::cascade::{cascade, composite, CascadeOptions, CascadeValidator, CompositeValidator};
pub use context::Context;
pub use errors::{Errors, FieldError, INVALID};
pub use nested::{AsNested, Nested};
pub use rules::{RuleError, RuleKind, RuleSet, ValidatorKind};
pub use semigroup::Semigroup;
pub use validatable::Validatable;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cascade::{cascade, composite, CascadeOptions, CascadeValidator};
    pub use crate::context::Context;
    pub use crate::errors::{Errors, FieldError};
    pub use crate::nested::{AsNested, Nested};
    pub use crate::rules::{RuleError, RuleSet, ValidatorKind};
    pub use crate::semigroup::Semigroup;
    pub use crate::validatable::Validatable;
    pub use crate::validation::Validation;
}
