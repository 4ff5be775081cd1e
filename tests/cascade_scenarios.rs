//! End-to-end scenarios for cascade and composite rules
//!
//! Records here declare their rules in `RuleSet` tables built once, the way a
//! model definition would.

use std::sync::LazyLock;

use cascade::prelude::*;
use cascade::{assert_errors_on, assert_invalid, assert_valid};

// Child: name required, age in 18..=65
#[derive(Debug, Default, Clone)]
struct Child {
    name: String,
    age: Option<u8>,
}

impl Child {
    fn fixed() -> Self {
        Child {
            name: "hoge".into(),
            age: Some(18),
        }
    }
}

static CHILD_RULES: LazyLock<RuleSet<Child>> = LazyLock::new(|| {
    RuleSet::new()
        .rule("name", |c: &Child, _| {
            if c.name.is_empty() {
                Err("can't be blank".into())
            } else {
                Ok(())
            }
        })
        .rule("age", |c: &Child, _| match c.age {
            None => Err("can't be blank".into()),
            Some(age) if !(18..=65).contains(&age) => Err("is not included in the list".into()),
            Some(_) => Ok(()),
        })
});

impl Validatable for Child {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        CHILD_RULES.validate(self, context)
    }
}

struct SingleParent {
    child: Option<Child>,
}

static SINGLE_RULES: LazyLock<RuleSet<SingleParent>> = LazyLock::new(|| {
    RuleSet::new().composite("child", |p: &SingleParent| p.child.as_nested())
});

impl Validatable for SingleParent {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        SINGLE_RULES.validate(self, context)
    }
}

struct ManyParent {
    children: Vec<Child>,
}

static MANY_RULES: LazyLock<RuleSet<ManyParent>> = LazyLock::new(|| {
    RuleSet::new()
        .register(
            "composite",
            "children",
            |p: &ManyParent| p.children.as_nested(),
            CascadeOptions::new(),
        )
        .expect("composite is a registered validator")
});

impl Validatable for ManyParent {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        MANY_RULES.validate(self, context)
    }
}

#[test]
fn single_child_tracks_the_child_state() {
    let mut model = SingleParent {
        child: Some(Child::default()),
    };
    assert!(!model.is_valid(None));

    if let Some(child) = model.child.as_mut() {
        child.name = "hoge".into();
        child.age = Some(18);
    }
    assert!(model.is_valid(None));

    if let Some(child) = model.child.as_mut() {
        child.age = Some(11);
    }
    assert!(!model.is_valid(None));
    assert_errors_on!(model, "child", ["is invalid"]);
}

#[test]
fn absent_child_is_skipped() {
    let mut model = SingleParent {
        child: Some(Child::default()),
    };
    model.child = None;
    assert_valid!(model);
}

#[test]
fn collection_is_valid_only_when_every_element_is() {
    let mut model = ManyParent {
        children: vec![Child::default(); 3],
    };
    assert_invalid!(model);

    model.children[0] = Child::fixed();
    assert_invalid!(model);

    model.children[1] = Child::fixed();
    assert_invalid!(model);

    model.children[2] = Child::fixed();
    assert_valid!(model);

    model.children[1].age = Some(11);
    assert_invalid!(model);
}

#[test]
fn collection_reports_one_error_for_many_failures() {
    let model = ManyParent {
        children: vec![Child::default(); 3],
    };
    assert_errors_on!(model, "children", ["is invalid"]);
}

#[test]
fn empty_collection_is_valid() {
    assert_valid!(ManyParent {
        children: Vec::new()
    });
}

#[test]
fn nested_errors_stay_on_the_child() {
    let model = SingleParent {
        child: Some(Child {
            name: String::new(),
            age: Some(30),
        }),
    };
    let errors = model.validate(None).errors().cloned().unwrap_or_default();
    assert!(!errors.contains("name"));

    let child_errors = model
        .child
        .as_ref()
        .and_then(|c| c.validate(None).errors().cloned())
        .unwrap_or_default();
    assert_eq!(child_errors.on("name").collect::<Vec<_>>(), vec!["can't be blank"]);
}

// Article: content and author only required when publishing
#[derive(Debug, Clone)]
struct Article {
    title: String,
    content: String,
    author: Option<String>,
}

static ARTICLE_RULES: LazyLock<RuleSet<Article>> = LazyLock::new(|| {
    RuleSet::new()
        .rule("title", |a: &Article, _| {
            if a.title.is_empty() {
                Err("can't be blank".into())
            } else {
                Ok(())
            }
        })
        .rule("content", |a: &Article, _| {
            if a.content.len() < 100 {
                Err("is too short (minimum is 100 characters)".into())
            } else {
                Ok(())
            }
        })
        .on("publish")
        .rule("author", |a: &Article, _| {
            if a.author.is_none() {
                Err("can't be blank".into())
            } else {
                Ok(())
            }
        })
        .on("publish")
});

impl Validatable for Article {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        ARTICLE_RULES.validate(self, context)
    }
}

struct ArticleForm {
    article: Option<Article>,
    category: String,
}

fn category_rule(form: &ArticleForm, _: Option<&Context>) -> Result<(), String> {
    if form.category.is_empty() {
        Err("can't be blank".into())
    } else {
        Ok(())
    }
}

fn draft() -> Article {
    Article {
        title: "My Article".into(),
        content: "Short content".into(),
        author: None,
    }
}

#[test]
fn context_scoped_child_is_ignored_without_context() {
    let rules = RuleSet::new()
        .cascade("article", |f: &ArticleForm| f.article.as_nested())
        .rule("category", category_rule);
    let form = ArticleForm {
        article: Some(draft()),
        category: "Tech".into(),
    };
    assert!(rules.is_valid(&form, None));
}

#[test]
fn forced_context_flags_context_scoped_child() {
    let rules = RuleSet::new()
        .cascade_with(
            "article",
            |f: &ArticleForm| f.article.as_nested(),
            CascadeOptions::new().on("publish"),
        )
        .rule("category", category_rule);
    let form = ArticleForm {
        article: Some(draft()),
        category: "Tech".into(),
    };

    let errors = rules.validate(&form, None).errors().cloned().unwrap_or_default();
    assert_eq!(errors.full_messages(), vec!["Article is invalid"]);

    let create = Context::new("create");
    assert!(!rules.is_valid(&form, Some(&create)));
}

#[test]
fn inherited_context_reaches_the_child() {
    let rules = RuleSet::new().cascade("article", |f: &ArticleForm| f.article.as_nested());
    let form = ArticleForm {
        article: Some(draft()),
        category: String::new(),
    };
    let publish = Context::new("publish");
    assert!(rules.is_valid(&form, None));
    assert!(!rules.is_valid(&form, Some(&publish)));
}

// Registration form with two cascaded parts and an acceptance check
struct User {
    name: String,
    email: String,
}

impl Validatable for User {
    fn validate(&self, _context: Option<&Context>) -> Validation<(), Errors> {
        let mut errors = Errors::new();
        if self.name.chars().count() < 2 {
            errors.add("name", "is too short (minimum is 2 characters)");
        }
        if !self.email.contains('@') {
            errors.add("email", "is invalid");
        }
        Validation::from_errors(errors)
    }
}

struct UserCredentials {
    password: String,
    password_confirmation: String,
}

impl Validatable for UserCredentials {
    fn validate(&self, _context: Option<&Context>) -> Validation<(), Errors> {
        let mut errors = Errors::new();
        if self.password.len() < 8 {
            errors.add("password", "is too short (minimum is 8 characters)");
        }
        if self.password != self.password_confirmation {
            errors.add("password_confirmation", "doesn't match Password");
        }
        Validation::from_errors(errors)
    }
}

struct UserRegistration {
    user: Option<User>,
    user_credentials: Option<UserCredentials>,
    terms_accepted: bool,
}

impl Validatable for UserRegistration {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        let mut errors = Errors::new();
        let options = CascadeOptions::new();
        cascade(&mut errors, "user", self.user.as_nested(), &options, context);
        cascade(
            &mut errors,
            "user_credentials",
            self.user_credentials.as_nested(),
            &options,
            context,
        );
        if !self.terms_accepted {
            errors.add("terms_accepted", "must be accepted");
        }
        Validation::from_errors(errors)
    }
}

#[test]
fn registration_reports_in_declaration_order() {
    let registration = UserRegistration {
        user: Some(User {
            name: "J".into(),
            email: "invalid-email".into(),
        }),
        user_credentials: Some(UserCredentials {
            password: "short".into(),
            password_confirmation: "different".into(),
        }),
        terms_accepted: false,
    };

    let errors = registration.validate(None).errors().cloned().unwrap_or_default();
    assert_eq!(
        errors.full_messages(),
        vec![
            "User is invalid",
            "User credentials is invalid",
            "Terms accepted must be accepted",
        ]
    );
}

#[test]
fn registration_with_valid_parts_passes() {
    let registration = UserRegistration {
        user: Some(User {
            name: "John Doe".into(),
            email: "john@example.com".into(),
        }),
        user_credentials: Some(UserCredentials {
            password: "password123".into(),
            password_confirmation: "password123".into(),
        }),
        terms_accepted: true,
    };
    assert_valid!(registration);
}
