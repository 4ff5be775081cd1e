//! Declarative rule tables
//!
//! A [`RuleSet`] lists the rules of one record type, built once when the model
//! is defined and reused for every validation pass. Rules run in declaration
//! order and write into a fresh [`Errors`] for each pass.
//!
//! Cascade rules are registered either directly ([`RuleSet::cascade`],
//! [`RuleSet::composite`]) or by validator name through [`RuleSet::register`],
//! which resolves the name to a [`ValidatorKind`] while the table is built.
//!
//! # Examples
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use cascade::{AsNested, Context, Errors, RuleSet, Validatable, Validation};
//!
//! struct OrderItem {
//!     product_name: String,
//! }
//!
//! struct Order {
//!     items: Vec<OrderItem>,
//!     customer_email: String,
//! }
//!
//! static ITEM_RULES: LazyLock<RuleSet<OrderItem>> = LazyLock::new(|| {
//!     RuleSet::new().rule("product_name", |item: &OrderItem, _| {
//!         if item.product_name.is_empty() {
//!             Err("can't be blank".to_string())
//!         } else {
//!             Ok(())
//!         }
//!     })
//! });
//!
//! static ORDER_RULES: LazyLock<RuleSet<Order>> = LazyLock::new(|| {
//!     RuleSet::new()
//!         .cascade("items", |order: &Order| order.items.as_nested())
//!         .rule("customer_email", |order: &Order, _| {
//!             if order.customer_email.contains('@') {
//!                 Ok(())
//!             } else {
//!                 Err("is invalid".to_string())
//!             }
//!         })
//! });
//!
//! impl Validatable for OrderItem {
//!     fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
//!         ITEM_RULES.validate(self, context)
//!     }
//! }
//!
//! impl Validatable for Order {
//!     fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
//!         ORDER_RULES.validate(self, context)
//!     }
//! }
//!
//! let order = Order {
//!     items: vec![
//!         OrderItem { product_name: "Widget".into() },
//!         OrderItem { product_name: String::new() },
//!     ],
//!     customer_email: "buyer@example.com".into(),
//! };
//!
//! let errors = order.validate(None).errors().cloned().unwrap_or_default();
//! assert_eq!(errors.full_messages(), vec!["Items is invalid"]);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{CascadeOptions, CascadeValidator, Context, Errors, Nested, Validatable, Validation};

/// Registration names of the cascading validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidatorKind {
    /// Registered as `cascade`
    Cascade,
    /// Registered as `composite`
    Composite,
}

impl ValidatorKind {
    /// Every registered validator.
    pub const ALL: [ValidatorKind; 2] = [ValidatorKind::Cascade, ValidatorKind::Composite];

    /// The registration name.
    pub fn name(self) -> &'static str {
        match self {
            ValidatorKind::Cascade => "cascade",
            ValidatorKind::Composite => "composite",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidatorKind {
    type Err = RuleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ValidatorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| RuleError::UnknownValidator {
                name: name.to_string(),
            })
    }
}

/// Error raised while declaring rules
///
/// These are reported when the table is built, never during a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// No validator is registered under this name.
    UnknownValidator {
        /// The name that was looked up.
        name: String,
    },
    /// A rule was declared without an attribute name.
    EmptyAttribute,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::UnknownValidator { name } => {
                write!(f, "unknown validator `{}`", name)
            }
            RuleError::EmptyAttribute => write!(f, "rule declared without an attribute"),
        }
    }
}

impl std::error::Error for RuleError {}

type Check<R> = Box<dyn Fn(&R, Option<&Context>, &mut Errors) + Send + Sync>;

/// What produced a rule, kept for introspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// A cascading validator
    Validator(ValidatorKind),
    /// A rule written by the caller
    Custom,
}

struct Rule<R> {
    attribute: String,
    kind: RuleKind,
    on: Option<Context>,
    check: Check<R>,
}

impl<R> Rule<R> {
    fn applies(&self, context: Option<&Context>) -> bool {
        self.on.as_ref().map_or(true, |on| on.matches(context))
    }
}

impl<R> fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("attribute", &self.attribute)
            .field("kind", &self.kind)
            .field("on", &self.on)
            .finish_non_exhaustive()
    }
}

/// The validation rules of a record type `R`
pub struct RuleSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R> Default for RuleSet<R> {
    fn default() -> Self {
        RuleSet { rules: Vec::new() }
    }
}

impl<R> fmt::Debug for RuleSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").field("rules", &self.rules).finish()
    }
}

impl<R> RuleSet<R> {
    /// An empty rule table.
    pub fn new() -> Self {
        RuleSet::default()
    }

    /// Cascade into the value returned by `accessor`, inheriting the pass context.
    pub fn cascade<T, F>(self, attribute: impl Into<String>, accessor: F) -> Self
    where
        T: Validatable + 'static,
        F: for<'a> Fn(&'a R) -> Option<Nested<'a, T>> + Send + Sync + 'static,
    {
        self.cascade_with(attribute, accessor, CascadeOptions::new())
    }

    /// Cascade into the value returned by `accessor` with explicit options.
    pub fn cascade_with<T, F>(
        self,
        attribute: impl Into<String>,
        accessor: F,
        options: CascadeOptions,
    ) -> Self
    where
        T: Validatable + 'static,
        F: for<'a> Fn(&'a R) -> Option<Nested<'a, T>> + Send + Sync + 'static,
    {
        self.push_nested(ValidatorKind::Cascade, attribute.into(), accessor, options)
    }

    /// Composite spelling of [`cascade`](RuleSet::cascade).
    pub fn composite<T, F>(self, attribute: impl Into<String>, accessor: F) -> Self
    where
        T: Validatable + 'static,
        F: for<'a> Fn(&'a R) -> Option<Nested<'a, T>> + Send + Sync + 'static,
    {
        self.composite_with(attribute, accessor, CascadeOptions::new())
    }

    /// Composite spelling of [`cascade_with`](RuleSet::cascade_with).
    pub fn composite_with<T, F>(
        self,
        attribute: impl Into<String>,
        accessor: F,
        options: CascadeOptions,
    ) -> Self
    where
        T: Validatable + 'static,
        F: for<'a> Fn(&'a R) -> Option<Nested<'a, T>> + Send + Sync + 'static,
    {
        self.push_nested(ValidatorKind::Composite, attribute.into(), accessor, options)
    }

    /// Register a cascading validator by its registration name.
    ///
    /// ```
    /// use cascade::{AsNested, CascadeOptions, RuleError, RuleSet};
    /// # use cascade::{Context, Errors, Validatable, Validation};
    /// # struct Child;
    /// # impl Validatable for Child {
    /// #     fn validate(&self, _: Option<&Context>) -> Validation<(), Errors> {
    /// #         Validation::success(())
    /// #     }
    /// # }
    /// struct Parent {
    ///     child: Option<Child>,
    /// }
    ///
    /// let rules = RuleSet::new()
    ///     .register("composite", "child", |p: &Parent| p.child.as_nested(), CascadeOptions::new());
    /// assert!(rules.is_ok());
    ///
    /// let err = RuleSet::new()
    ///     .register("nested", "child", |p: &Parent| p.child.as_nested(), CascadeOptions::new())
    ///     .unwrap_err();
    /// assert_eq!(err, RuleError::UnknownValidator { name: "nested".into() });
    /// ```
    pub fn register<T, F>(
        self,
        validator: &str,
        attribute: impl Into<String>,
        accessor: F,
        options: CascadeOptions,
    ) -> Result<Self, RuleError>
    where
        T: Validatable + 'static,
        F: for<'a> Fn(&'a R) -> Option<Nested<'a, T>> + Send + Sync + 'static,
    {
        let kind = validator.parse::<ValidatorKind>()?;
        let attribute = attribute.into();
        if attribute.is_empty() {
            return Err(RuleError::EmptyAttribute);
        }
        Ok(self.push_nested(kind, attribute, accessor, options))
    }

    /// Add a custom rule; `Err(message)` is recorded against `attribute`.
    pub fn rule<F>(mut self, attribute: impl Into<String>, check: F) -> Self
    where
        F: Fn(&R, Option<&Context>) -> Result<(), String> + Send + Sync + 'static,
    {
        let attribute = attribute.into();
        let target = attribute.clone();
        self.rules.push(Rule {
            attribute,
            kind: RuleKind::Custom,
            on: None,
            check: Box::new(move |record: &R, context: Option<&Context>, errors: &mut Errors| {
                if let Err(message) = check(record, context) {
                    errors.add(target.as_str(), message);
                }
            }),
        });
        self
    }

    /// Restrict the most recently declared rule to passes run under `context`.
    ///
    /// Has no effect on an empty table.
    pub fn on(mut self, context: impl Into<Context>) -> Self {
        if let Some(rule) = self.rules.last_mut() {
            rule.on = Some(context.into());
        }
        self
    }

    /// Run every rule that applies to `context` against `record`.
    pub fn validate(&self, record: &R, context: Option<&Context>) -> Validation<(), Errors> {
        let mut errors = Errors::new();
        for rule in self.rules.iter().filter(|rule| rule.applies(context)) {
            (rule.check)(record, context, &mut errors);
        }
        Validation::from_errors(errors)
    }

    /// `true` when [`validate`](RuleSet::validate) reports no errors.
    pub fn is_valid(&self, record: &R, context: Option<&Context>) -> bool {
        self.validate(record, context).is_success()
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` when no rule is declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Attribute and kind of every rule, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, RuleKind)> {
        self.rules
            .iter()
            .map(|rule| (rule.attribute.as_str(), rule.kind))
    }

    fn push_nested<T, F>(
        mut self,
        kind: ValidatorKind,
        attribute: String,
        accessor: F,
        options: CascadeOptions,
    ) -> Self
    where
        T: Validatable + 'static,
        F: for<'a> Fn(&'a R) -> Option<Nested<'a, T>> + Send + Sync + 'static,
    {
        let validator = CascadeValidator::new(options);
        let target = attribute.clone();
        self.rules.push(Rule {
            attribute,
            kind: RuleKind::Validator(kind),
            on: None,
            check: Box::new(move |record: &R, context: Option<&Context>, errors: &mut Errors| {
                validator.validate_each(errors, &target, accessor(record), context);
            }),
        });
        self
    }
}
