//! The module contains the errors the engine can return.
//!
//! Validation errors ([`InvalidKind`], [`InvalidAmount`], [`MissingCategory`],
//! [`InvalidDate`]) are produced before a record reaches the store, so their
//! messages always name the offending request field.
//!
//! - [`InvalidThreshold`] and [`InvalidIncome`] come from the aggregation
//!   functions.
//! - [`NotFound`] is returned when removing an unknown transaction.
//!
//!  [`InvalidKind`]: EngineError::InvalidKind
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`MissingCategory`]: EngineError::MissingCategory
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidThreshold`]: EngineError::InvalidThreshold
//!  [`InvalidIncome`]: EngineError::InvalidIncome
//!  [`NotFound`]: EngineError::NotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid type. Must be \"income\" or \"expense\".")]
    InvalidKind(String),
    #[error("Amount must be a positive number.")]
    InvalidAmount(String),
    #[error("Category is required.")]
    MissingCategory,
    #[error("Invalid date \"{0}\". Expected YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("Threshold must be a number: {0}")]
    InvalidThreshold(String),
    #[error("Income must be greater than zero: {0}")]
    InvalidIncome(String),
    #[error("Transaction not found.")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let cases = [
            (EngineError::InvalidKind("x".to_string()), "type"),
            (EngineError::InvalidAmount("-1".to_string()), "amount"),
            (EngineError::MissingCategory, "category"),
            (EngineError::InvalidDate("2024-13-01".to_string()), "date"),
            (EngineError::InvalidThreshold("NaN".to_string()), "threshold"),
            (EngineError::InvalidIncome("0".to_string()), "income"),
        ];
        for (err, field) in cases {
            assert!(
                err.to_string().to_lowercase().contains(field),
                "{err} should mention {field}"
            );
        }
    }
}
