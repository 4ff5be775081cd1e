//! Cascading validation of nested records
//!
//! A cascade re-runs the validation of a record held by an attribute (or of each
//! record in a collection held by it) and, if any of them fails, records one
//! generic error against that attribute on the parent.
//!
//! - an absent value is skipped
//! - an empty collection is skipped
//! - any number of failing records yields exactly one error
//! - the nested records' own errors are not copied to the parent
//!
//! The composite validator is the same component under a second name.
//!
//! # Examples
//!
//! ```
//! use ::cascade::{cascade, AsNested, CascadeOptions, Context, Errors, Validatable, Validation};
//!
//! struct Item {
//!     quantity: i32,
//! }
//!
//! impl Validatable for Item {
//!     fn validate(&self, _context: Option<&Context>) -> Validation<(), Errors> {
//!         let mut errors = Errors::new();
//!         if self.quantity <= 0 {
//!             errors.add("quantity", "must be greater than 0");
//!         }
//!         Validation::from_errors(errors)
//!     }
//! }
//!
//! let items = vec![Item { quantity: 5 }, Item { quantity: -1 }, Item { quantity: 0 }];
//!
//! let mut errors = Errors::new();
//! let passed = cascade(&mut errors, "items", items.as_nested(), &CascadeOptions::new(), None);
//!
//! assert!(!passed);
//! assert_eq!(errors.full_messages(), vec!["Items is invalid"]);
//! ```

use crate::errors::INVALID;
use crate::{Context, Errors, Nested, Validatable};

/// Configuration of a cascade rule
///
/// # Examples
///
/// ```
/// use cascade::{CascadeOptions, Context};
///
/// let options = CascadeOptions::new().on("publish").message("has problems");
///
/// let ambient = Context::new("create");
/// assert_eq!(options.resolve_context(Some(&ambient)), Some(&Context::new("publish")));
/// assert_eq!(options.message_text(), "has problems");
///
/// let inherit = CascadeOptions::new();
/// assert_eq!(inherit.resolve_context(Some(&ambient)), Some(&ambient));
/// assert_eq!(inherit.message_text(), "is invalid");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CascadeOptions {
    context: Option<Context>,
    message: Option<String>,
}

impl CascadeOptions {
    /// Options that inherit the parent's context and use the default message.
    pub fn new() -> Self {
        CascadeOptions::default()
    }

    /// Force nested records to be validated under `context`.
    pub fn on(mut self, context: impl Into<Context>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Replace the default `"is invalid"` message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The forced context, if any.
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// The message recorded on failure.
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or(INVALID)
    }

    /// Context nested records run under: the forced one, else `ambient`.
    pub fn resolve_context<'a>(&'a self, ambient: Option<&'a Context>) -> Option<&'a Context> {
        self.context.as_ref().or(ambient)
    }
}

/// Validates the records held by an attribute and reports their failure on it
///
/// # Examples
///
/// ```
/// use cascade::{CascadeOptions, CascadeValidator, Context, Errors, Nested, Validatable, Validation};
///
/// struct Article {
///     author: Option<String>,
/// }
///
/// impl Validatable for Article {
///     fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
///         let mut errors = Errors::new();
///         if Context::new("publish").matches(context) && self.author.is_none() {
///             errors.add("author", "can't be blank");
///         }
///         Validation::from_errors(errors)
///     }
/// }
///
/// let draft = Article { author: None };
/// let validator = CascadeValidator::new(CascadeOptions::new().on("publish"));
///
/// let mut errors = Errors::new();
/// validator.validate_each(&mut errors, "article", Some(Nested::Single(&draft)), None);
/// assert_eq!(errors.on("article").collect::<Vec<_>>(), vec!["is invalid"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CascadeValidator {
    options: CascadeOptions,
}

/// The composite validator: same behaviour as [`CascadeValidator`].
pub type CompositeValidator = CascadeValidator;

impl CascadeValidator {
    /// Create a validator with the given options.
    pub fn new(options: CascadeOptions) -> Self {
        CascadeValidator { options }
    }

    /// The validator's options.
    pub fn options(&self) -> &CascadeOptions {
        &self.options
    }

    /// Validate `value` and append one error for `attribute` if it fails.
    ///
    /// `ambient` is the context of the parent's validation pass; it is used
    /// unless the options force another one. Returns `true` when nothing was
    /// appended.
    pub fn validate_each<T: Validatable>(
        &self,
        errors: &mut Errors,
        attribute: &str,
        value: Option<Nested<'_, T>>,
        ambient: Option<&Context>,
    ) -> bool {
        cascade(errors, attribute, value, &self.options, ambient)
    }
}

/// Cascade `value` into `errors` under `attribute`.
///
/// The free-standing form of [`CascadeValidator::validate_each`], for records
/// that call their rules explicitly.
pub fn cascade<T: Validatable>(
    errors: &mut Errors,
    attribute: &str,
    value: Option<Nested<'_, T>>,
    options: &CascadeOptions,
    ambient: Option<&Context>,
) -> bool {
    let Some(nested) = value else {
        #[cfg(feature = "tracing")]
        tracing::trace!(attribute, "cascade skipped, value absent");
        return true;
    };

    if nested.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!(attribute, "cascade skipped, collection empty");
        return true;
    }

    let context = options.resolve_context(ambient);
    if nested.is_valid(context) {
        return true;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        attribute,
        context = context.map(Context::name),
        records = nested.len(),
        "nested record invalid"
    );
    errors.add(attribute, options.message_text());
    false
}

/// Composite spelling of [`cascade`]; identical behaviour.
pub fn composite<T: Validatable>(
    errors: &mut Errors,
    attribute: &str,
    value: Option<Nested<'_, T>>,
    options: &CascadeOptions,
    ambient: Option<&Context>,
) -> bool {
    cascade(errors, attribute, value, options, ambient)
}
