//! Form validation for drafts, run before calling into the store.
//!
//! The store accepts any well-typed draft or patch; business rules live here.

use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

use crate::{ProductDraft, Record, RecordId, User, UserDraft};

/// Minimum length of user and product names, in characters, after trimming.
pub const MIN_NAME_LEN: usize = 3;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found in a draft, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validates a user form.
///
/// `editing` is the id of the user being edited, whose own email does not count
/// as a duplicate.
///
/// # Errors
///
/// Returns every failing field.
pub fn validate_user(
    draft: &UserDraft,
    existing: &[User],
    editing: Option<RecordId>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.push("name", "Name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.push("name", "Name must be at least 3 characters");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "Please enter a valid email");
    } else {
        let email = email.to_lowercase();
        let duplicate = existing
            .iter()
            .any(|user| user.email.to_lowercase() == email && Some(user.id()) != editing);
        if duplicate {
            errors.push("email", "This email is already registered");
        }
    }

    errors.into_result()
}

/// Validates a product form.
///
/// Stock cannot be negative by type, so only the name and price are checked.
///
/// # Errors
///
/// Returns every failing field.
pub fn validate_product(draft: &ProductDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.push("name", "Product name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.push("name", "Product name must be at least 3 characters");
    }

    if !draft.price.is_finite() || draft.price < 0.0 {
        errors.push("price", "Please enter a valid price");
    }

    errors.into_result()
}
