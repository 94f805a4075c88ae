//! Field validation shared by the draft constructors.
//!
//! Each helper checks one field, records every rule it breaches in the shared
//! [`ValidationErrors`] collection, and yields the value only when that field
//! passed all of its checks. Callers therefore report the full set of
//! problems with a payload in a single response.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;

use crate::domain::error::{ValidationErrors, ValidationRule};

/// Wire-level field names used in violation reports.
pub mod fields {
    /// Name field shared by districts, properties, and rooms.
    pub const NAME: &str = "name";
    /// District price per square metre.
    pub const SQUARE_METER_VALUE: &str = "squareMeterValue";
    /// District a property belongs to.
    pub const DISTRICT_ID: &str = "districtId";
    /// Room width in metres.
    pub const WIDTH: &str = "width";
    /// Room length in metres.
    pub const LENGTH: &str = "length";
}

/// Integer digits allowed in a square-metre rate.
const RATE_MAX_INTEGER_DIGITS: u32 = 13;
/// Fraction digits allowed in a square-metre rate.
const RATE_MAX_FRACTION_DIGITS: u32 = 2;

/// Require a field with no rules beyond presence.
pub(crate) fn require<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<T>,
) -> Option<T> {
    if value.is_none() {
        errors.push(
            field,
            ValidationRule::Required,
            format!("{field} must not be empty"),
        );
    }
    value
}

/// Validate a display name.
///
/// Blank input reports only `Required`. Non-blank input is checked against
/// the leading-letter rule and the length limit independently, so a lowercase
/// name that is also too long reports both violations. The leading-letter
/// rule looks at the raw first character, so leading whitespace fails it.
pub(crate) fn require_name(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    max_chars: usize,
) -> Option<String> {
    let Some(value) = value else {
        errors.push(
            field,
            ValidationRule::Required,
            format!("{field} must not be empty"),
        );
        return None;
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(
            field,
            ValidationRule::Required,
            format!("{field} must not be empty"),
        );
        return None;
    }

    let mut valid = true;
    if !starts_with_uppercase_letter(&value) {
        errors.push(
            field,
            ValidationRule::Format,
            format!("{field} must start with an uppercase letter"),
        );
        valid = false;
    }
    if value.chars().count() > max_chars {
        errors.push(
            field,
            ValidationRule::TooLong,
            format!("{field} must not exceed {max_chars} characters"),
        );
        valid = false;
    }
    valid.then_some(value)
}

/// Validate a square-metre rate.
///
/// The rate must be non-negative and fit thirteen integer digits and two
/// fraction digits, matching the precision of the stored currency column.
pub(crate) fn require_square_meter_value(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<Decimal>,
) -> Option<Decimal> {
    let Some(value) = value else {
        errors.push(
            field,
            ValidationRule::Required,
            format!("{field} must not be empty"),
        );
        return None;
    };

    let mut valid = true;
    if integer_digits(value) > RATE_MAX_INTEGER_DIGITS || value.scale() > RATE_MAX_FRACTION_DIGITS {
        errors.push(
            field,
            ValidationRule::Precision,
            format!(
                "{field} must have at most {RATE_MAX_INTEGER_DIGITS} integer digits and {RATE_MAX_FRACTION_DIGITS} fraction digits"
            ),
        );
        valid = false;
    }
    if value < Decimal::ZERO {
        errors.push(
            field,
            ValidationRule::Range,
            format!("{field} must not be negative"),
        );
        valid = false;
    }
    valid.then_some(value)
}

/// Validate a room dimension in metres against its inclusive bounds.
pub(crate) fn require_dimension(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<f64>,
    bounds: &RangeInclusive<f64>,
) -> Option<f64> {
    let Some(value) = value else {
        errors.push(
            field,
            ValidationRule::Required,
            format!("{field} must not be empty"),
        );
        return None;
    };
    if !bounds.contains(&value) {
        errors.push(
            field,
            ValidationRule::Range,
            format!(
                "{field} must be between {} and {} metres",
                bounds.start(),
                bounds.end()
            ),
        );
        return None;
    }
    Some(value)
}

fn starts_with_uppercase_letter(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.is_alphabetic() && !first.is_lowercase())
}

fn integer_digits(value: Decimal) -> u32 {
    let whole = value.abs().trunc();
    if whole.is_zero() {
        0
    } else {
        whole.to_string().len() as u32
    }
}
