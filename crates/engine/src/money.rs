use std::{fmt, str::FromStr};

use crate::{EngineError, ResultEngine};

/// A strictly positive, finite monetary amount.
///
/// Direction (credit/debit) is carried by [`TransactionKind`], never by the
/// sign, so an `Amount` can only be built from a value `> 0`.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount = Amount::new(12.5).unwrap();
/// assert_eq!(amount.value(), 12.5);
/// assert_eq!(amount.to_string(), "12.50");
/// assert!(Amount::new(0.0).is_err());
/// ```
///
/// Parsing from user input (`.` is the only decimal separator):
///
/// ```rust
/// use engine::Amount;
///
/// assert_eq!("10".parse::<Amount>().unwrap().value(), 10.0);
/// assert_eq!("10.5".parse::<Amount>().unwrap().value(), 10.5);
/// assert!("1,000".parse::<Amount>().is_err());
/// assert!("abc".parse::<Amount>().is_err());
/// assert!("-3".parse::<Amount>().is_err());
/// ```
///
/// [`TransactionKind`]: crate::TransactionKind
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Creates a new amount, rejecting zero, negative and non-finite values.
    pub fn new(value: f64) -> ResultEngine<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EngineError::InvalidAmount(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Builds an amount for compile-time tables. An invalid value fails const
    /// evaluation.
    pub(crate) const fn from_const(value: f64) -> Self {
        assert!(value.is_finite() && value > 0.0, "amount must be positive");
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = EngineError;

    /// Parses a decimal string into an amount.
    ///
    /// Accepts `.` as decimal separator and an optional leading `+`.
    /// Rejects empty strings, non-numeric text (thousands separators
    /// included), `inf`/`NaN` and values `<= 0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidAmount(s.to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        {
            return Err(invalid());
        }

        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }
}

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
