//! Validation contexts
//!
//! A [`Context`] is a symbolic tag that selects which subset of a record's rules
//! run during a validation pass, such as `create` versus `publish`. A pass with
//! no context runs only the rules that are not scoped to one.
//!
//! # Examples
//!
//! ```
//! use cascade::Context;
//!
//! let publish = Context::new("publish");
//! assert_eq!(publish.name(), "publish");
//! assert_eq!(publish, Context::from("publish"));
//! ```

use std::borrow::Cow;
use std::fmt;

/// A named validation context
///
/// Contexts compare by name. They are cheap to build from string literals and
/// can also own a name produced at runtime.
///
/// # Examples
///
/// ```
/// use cascade::Context;
///
/// const PUBLISH: Context = Context::from_static("publish");
///
/// let runtime = Context::new(String::from("publish"));
/// assert_eq!(PUBLISH, runtime);
/// assert_eq!(PUBLISH.to_string(), "publish");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Context(Cow<'static, str>);

impl Context {
    /// Create a context from any string-like name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Context(name.into())
    }

    /// Create a context from a static name, usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        Context(Cow::Borrowed(name))
    }

    /// The context's name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Check whether an optional context refers to this one.
    ///
    /// ```
    /// use cascade::Context;
    ///
    /// let publish = Context::new("publish");
    /// assert!(publish.matches(Some(&Context::new("publish"))));
    /// assert!(!publish.matches(None));
    /// ```
    pub fn matches(&self, other: Option<&Context>) -> bool {
        other.is_some_and(|other| other == self)
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Context {
    fn from(name: &'static str) -> Self {
        Context::from_static(name)
    }
}

impl From<String> for Context {
    fn from(name: String) -> Self {
        Context(Cow::Owned(name))
    }
}

impl AsRef<str> for Context {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
