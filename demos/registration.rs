//! Cascading validation walkthrough: registrations, orders and articles
//!
//! Run with: cargo run --example registration
//! Add `--features tracing` to see the cascade's debug events.

use std::sync::LazyLock;

use cascade::prelude::*;

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
        if !self.email.contains('@') || !self.email.contains('.') {
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

static REGISTRATION_RULES: LazyLock<RuleSet<UserRegistration>> = LazyLock::new(|| {
    RuleSet::new()
        .cascade("user", |r: &UserRegistration| r.user.as_nested())
        .cascade("user_credentials", |r: &UserRegistration| {
            r.user_credentials.as_nested()
        })
        .rule("terms_accepted", |r: &UserRegistration, _| {
            if r.terms_accepted {
                Ok(())
            } else {
                Err("must be accepted".into())
            }
        })
});

impl Validatable for UserRegistration {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        REGISTRATION_RULES.validate(self, context)
    }
}

struct OrderItem {
    product_name: String,
    quantity: i32,
    price: f64,
}

impl Validatable for OrderItem {
    fn validate(&self, _context: Option<&Context>) -> Validation<(), Errors> {
        let mut errors = Errors::new();
        if self.product_name.is_empty() {
            errors.add("product_name", "can't be blank");
        }
        if self.quantity <= 0 {
            errors.add("quantity", "must be greater than 0");
        }
        if self.price < 0.0 {
            errors.add("price", "must be greater than or equal to 0");
        }
        Validation::from_errors(errors)
    }
}

struct Order {
    items: Vec<OrderItem>,
    customer_email: String,
}

impl Validatable for Order {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        let mut errors = Errors::new();
        cascade(
            &mut errors,
            "items",
            self.items.as_nested(),
            &CascadeOptions::new(),
            context,
        );
        let domain_ok = self
            .customer_email
            .split_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'));
        if !domain_ok {
            errors.add("customer_email", "is invalid");
        }
        Validation::from_errors(errors)
    }
}

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
        .rule("author", |a: &Article, _| match a.author {
            Some(_) => Ok(()),
            None => Err("can't be blank".into()),
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

static ARTICLE_FORM_RULES: LazyLock<RuleSet<ArticleForm>> = LazyLock::new(|| {
    RuleSet::new()
        .cascade_with(
            "article",
            |f: &ArticleForm| f.article.as_nested(),
            CascadeOptions::new().on("publish"),
        )
        .rule("category", |f: &ArticleForm, _| {
            if f.category.is_empty() {
                Err("can't be blank".into())
            } else {
                Ok(())
            }
        })
});

impl Validatable for ArticleForm {
    fn validate(&self, context: Option<&Context>) -> Validation<(), Errors> {
        ARTICLE_FORM_RULES.validate(self, context)
    }
}

fn report(label: &str, record: &impl Validatable) {
    match record.validate(None) {
        Validation::Success(()) => println!("{} is valid!", label),
        Validation::Failure(errors) => {
            println!("{} errors:", label);
            for message in errors.full_messages() {
                println!("  - {}", message);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Example 1: User Registration ===");
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
    report("Registration", &registration);

    println!("\n=== Example 2: Valid Registration ===");
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
    report("Registration", &registration);

    println!("\n=== Example 3: Order with Multiple Items ===");
    let order = Order {
        items: vec![
            OrderItem {
                product_name: "Widget".into(),
                quantity: 5,
                price: 10.99,
            },
            OrderItem {
                product_name: String::new(),
                quantity: -1,
                price: 20.50,
            },
            OrderItem {
                product_name: "Gadget".into(),
                quantity: 2,
                price: -5.0,
            },
        ],
        customer_email: "invalid@email".into(),
    };
    report("Order", &order);

    println!("\n=== Example 4: Context-based Validation ===");
    let form = ArticleForm {
        article: Some(Article {
            title: "My Article".into(),
            content: "Short content".into(),
            author: None,
        }),
        category: "Tech".into(),
    };
    report("Article form", &form);

    if let Some(article) = &form.article {
        let publish = Context::new("publish");
        if let Validation::Failure(errors) = article.validate(Some(&publish)) {
            println!("Article errors under `{}`: {}", publish, errors);
        }
    }
}
