//! Form validation schemas for the authentication forms
//!
//! Each form value implements [`FormSchema`], which evaluates the declarative
//! rules below and reports at most one message per field:
//! - email must look like `local@domain.tld`
//! - password (and confirmation) must be at least [`MIN_PASSWORD_LENGTH`] long
//! - signup confirmation must equal the password

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum password length, counted in UTF-16 code units like the browser does
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const INVALID_EMAIL: &str = "Invalid Email";
pub const PASSWORD_TOO_SHORT: &str = "Password must be minimum 8 characters";
pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match.";

/// Local part, `@`, dot-separated labels and an alphabetic TLD, ASCII only.
/// Leading and doubled dots are rejected separately (no lookaround in `regex`).
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

/// Form fields known to the authentication forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Name used for the input element and on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-level validation messages; the first violated rule per field wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one
    pub fn add(&mut self, field: Field, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    /// First message in field order, used as a form-level summary
    pub fn first_message(&self) -> Option<&'static str> {
        self.errors.values().next().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// A form value with declarative validation rules
pub trait FormSchema: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Fields rendered by the form, in display order
    const FIELDS: &'static [Field];

    /// Evaluate every rule
    fn validate(&self) -> FieldErrors;

    /// Current value of a field
    fn field(&self, field: Field) -> &str;

    /// Replace the value of a field; unknown fields are ignored
    fn set_field(&mut self, field: Field, value: String);

    /// Produce the typed valid value or the collected field errors
    fn parse(self) -> Result<Self, FieldErrors> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

/// Login form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl FormSchema for Credentials {
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_password_length(&mut errors, Field::Password, &self.password);
        errors
    }

    fn field(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => "",
        }
    }

    fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => {}
        }
    }
}

/// Signup form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupCredentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupCredentials {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// The part of the signup input the auth service cares about
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl FormSchema for SignupCredentials {
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password, Field::ConfirmPassword];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_password_length(&mut errors, Field::Password, &self.password);
        check_password_length(&mut errors, Field::ConfirmPassword, &self.confirm_password);
        // The equality refinement runs even when other rules failed; `add`
        // keeps an earlier length message on the confirmation field.
        if self.password != self.confirm_password {
            errors.add(Field::ConfirmPassword, PASSWORDS_DONT_MATCH);
        }
        errors
    }

    fn field(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// Check email syntax
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !is_valid_email(email) {
        errors.add(Field::Email, INVALID_EMAIL);
    }
}

fn check_password_length(errors: &mut FieldErrors, field: Field, password: &str) {
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        errors.add(field, PASSWORD_TOO_SHORT);
    }
}
