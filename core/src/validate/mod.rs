//! Form checks run before any network call.
//!
//! Lengths are counted in characters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::{AccountConfig, ReviewsConfig};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+@([^@]+)$").unwrap());

static CODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// An address on the configured campus domain, e.g. `pete@purdue.edu`.
pub fn email(email: &str, account: &AccountConfig) -> Result<(), ValidationError> {
    let on_domain = EMAIL_PATTERN
        .captures(email)
        .is_some_and(|caps| caps[1] == *account.email_domain);
    if on_domain && email.chars().count() <= account.max_chars {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn password(password: &str, account: &AccountConfig) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if length > 0 && (account.min_password_length..=account.max_chars).contains(&length) {
        Ok(())
    } else {
        Err(ValidationError::PasswordLength {
            min: account.min_password_length,
            max: account.max_chars,
        })
    }
}

pub fn confirmation(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password == confirm {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

/// A verification code: digits only, exactly `code_length` of them.
pub fn code(code: &str, account: &AccountConfig) -> Result<(), ValidationError> {
    if CODE_PATTERN.is_match(code) && code.chars().count() == account.code_length {
        Ok(())
    } else {
        Err(ValidationError::InvalidCode {
            length: account.code_length,
        })
    }
}

pub fn description(description: &str, reviews: &ReviewsConfig) -> Result<(), ValidationError> {
    let length = description.chars().count();
    if (reviews.min_chars..=reviews.max_chars).contains(&length) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDescription {
            min: reviews.min_chars,
            max: reviews.max_chars,
        })
    }
}

#[cfg(test)]
mod tests;
