//! Synchronous form validation run before any request is sent. Each failing
//! field gets its own message; a form with any error is never submitted.

use crate::types::{LoginCredentials, RegisterData};
use chrono::NaiveDate;
use regex::Regex;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loose email shape: something, `@`, something, `.`, something.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").is_ok_and(|re| re.is_match(email))
}

/// Per-field messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub date_of_birth: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.date_of_birth.is_none()
    }
}

fn check_email(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !valid_email(email) {
        Some("Email is invalid".to_string())
    } else {
        None
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    /// Returns the per-field errors when the email is missing or malformed or
    /// the password is empty.
    pub fn validate(&self) -> Result<LoginCredentials, FieldErrors> {
        let email = self.email.trim();
        let errors = FieldErrors {
            email: check_email(email),
            password: self
                .password
                .is_empty()
                .then(|| "Password is required".to_string()),
            ..FieldErrors::default()
        };

        if errors.is_empty() {
            Ok(LoginCredentials {
                email: email.to_string(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Raw date input, expected as `YYYY-MM-DD` (the value of `<input type="date">`).
    pub date_of_birth: String,
}

impl RegisterForm {
    /// # Errors
    /// Returns the per-field errors for a blank name, a missing or malformed
    /// email, a short password, or a missing or unparseable date of birth.
    pub fn validate(&self) -> Result<RegisterData, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let date_input = self.date_of_birth.trim();

        let password = if self.password.is_empty() {
            Some("Password is required".to_string())
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            Some(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            ))
        } else {
            None
        };

        let date = if date_input.is_empty() {
            Err("Date of birth is required".to_string())
        } else {
            NaiveDate::parse_from_str(date_input, DATE_FORMAT)
                .map_err(|_| "Date of birth is invalid".to_string())
        };

        let errors = FieldErrors {
            name: name.is_empty().then(|| "Name is required".to_string()),
            email: check_email(email),
            password,
            date_of_birth: date.as_ref().err().cloned(),
        };

        match date {
            Ok(date) if errors.is_empty() => Ok(RegisterData {
                name: name.to_string(),
                email: email.to_string(),
                password: self.password.clone(),
                date_of_birth: date.format(DATE_FORMAT).to_string(),
            }),
            _ => Err(errors),
        }
    }
}
