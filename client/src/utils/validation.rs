/// Validation utilities for form input

use std::str::FromStr;

use chrono::NaiveDate;

use crate::core::error::{AppError, Result};

/// Maximum digits accepted in a phone field
pub const PHONE_MAX_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Validation` error carrying the first failure message
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Every value must be non-blank
pub fn validate_required(values: &[&str], message: &str) -> ValidationResult {
    if values.iter().any(|v| v.trim().is_empty()) {
        return ValidationResult::err(message);
    }
    ValidationResult::ok()
}

/// Validate a phone number: digits only, at most ten of them
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if phone.len() > PHONE_MAX_DIGITS {
        return ValidationResult::err("Phone number must be at most 10 digits");
    }

    ValidationResult::ok()
}

/// Keep only digits, truncated to [`PHONE_MAX_DIGITS`]
///
/// Applied as the user types into a phone field.
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect()
}

/// Parse a numeric form field
pub fn parse_number<T: FromStr>(value: &str, field: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| AppError::Validation(format!("{} must be a number", field)))
}

/// Parse a `YYYY-MM-DD` form field
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{} must be a date (YYYY-MM-DD)", field)))
}
