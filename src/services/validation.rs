//! Field-level validation errors

use std::fmt;

use crate::models::{Money, TransactionType};

/// One rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Largest amount a single entry may carry
///
/// Keeps report totals far away from the limits of the cent counter.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Check an amount field: present, numeric, at most two decimals, within
/// `0.01..=MAX_AMOUNT`
pub(crate) fn check_amount(raw: &str, errors: &mut ValidationErrors) -> Option<Money> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add("amount", "Amount is required.");
        return None;
    }

    let decimals = trimmed.split_once('.').map_or(0, |(_, frac)| frac.len());

    match Money::parse(trimmed) {
        Ok(amount) if amount.is_zero() && trimmed.chars().any(|c| ('1'..='9').contains(&c)) => {
            errors.add("amount", "Amount must be at least 0.01.");
            None
        }
        Ok(amount) if amount.is_positive() && decimals > 2 => {
            errors.add("amount", "Amount can have at most 2 decimal places.");
            None
        }
        Ok(amount) if amount > MAX_AMOUNT => {
            errors.add(
                "amount",
                format!(
                    "Amount must be at most {}.{:02}.",
                    MAX_AMOUNT.units(),
                    MAX_AMOUNT.cents_part()
                ),
            );
            None
        }
        Ok(amount) if amount.is_positive() => Some(amount),
        _ => {
            errors.add("amount", "Amount must be a positive number.");
            None
        }
    }
}

/// Check a transaction type field
pub(crate) fn check_kind(raw: &str, errors: &mut ValidationErrors) -> Option<TransactionType> {
    if raw.trim().is_empty() {
        errors.add("type", "Please select a transaction type.");
        return None;
    }

    match raw.parse() {
        Ok(kind) => Some(kind),
        Err(message) => {
            errors.add("type", message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "Title must be at least 2 characters.");
        errors.add("amount", "Amount is required.");
        assert_eq!(
            errors.to_string(),
            "title: Title must be at least 2 characters.; amount: Amount is required."
        );
        assert_eq!(errors.get("amount"), Some("Amount is required."));
        assert_eq!(errors.get("date"), None);
    }

    #[test]
    fn test_check_amount() {
        let mut errors = ValidationErrors::new();
        assert_eq!(check_amount("4.50", &mut errors), Some(Money::from_cents(450)));
        assert_eq!(check_amount("0.01", &mut errors), Some(Money::from_cents(1)));
        assert!(errors.is_empty());

        for (raw, expected) in [
            ("", "Amount is required."),
            ("0", "Amount must be a positive number."),
            ("-5", "Amount must be a positive number."),
            ("abc", "Amount must be a positive number."),
            ("0.001", "Amount must be at least 0.01."),
            ("4.509", "Amount can have at most 2 decimal places."),
            ("92233720368547758", "Amount must be at most 1000000000.00."),
        ] {
            let mut errors = ValidationErrors::new();
            assert_eq!(check_amount(raw, &mut errors), None);
            assert_eq!(errors.get("amount"), Some(expected), "input {:?}", raw);
        }
    }

    #[test]
    fn test_check_amount_ceiling_is_inclusive() {
        let mut errors = ValidationErrors::new();
        assert_eq!(check_amount("1000000000", &mut errors), Some(MAX_AMOUNT));
        assert_eq!(check_amount("1000000000.01", &mut errors), None);
        assert_eq!(
            errors.get("amount"),
            Some("Amount must be at most 1000000000.00.")
        );
    }

    #[test]
    fn test_check_kind() {
        let mut errors = ValidationErrors::new();
        assert_eq!(check_kind("income", &mut errors), Some(TransactionType::Income));
        assert_eq!(check_kind("", &mut errors), None);
        assert_eq!(errors.get("type"), Some("Please select a transaction type."));
    }
}
