//! Validation rules applied to a candidate record before it reaches the store.
//!
//! Checks run in a fixed order (kind, amount, category, date) and the first
//! failure is returned. Nothing here mutates state.

use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;

use crate::{Amount, EngineError, NewTransaction, ResultEngine, TransactionKind};

/// Raw amount as received from a client.
///
/// Clients may send a JSON number or a numeric string; anything else is kept
/// as [`AmountInput::Other`] so that it fails validation with a proper
/// `InvalidAmount` instead of a decoding error.
#[derive(Clone, Debug, PartialEq)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    Other(String),
}

/// Unvalidated payload for a new transaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionDraft {
    pub kind: Option<String>,
    pub category: Option<String>,
    pub amount: Option<AmountInput>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl TransactionDraft {
    #[must_use]
    pub fn new(kind: TransactionKind, category: impl Into<String>, amount: f64) -> Self {
        Self {
            kind: Some(kind.as_str().to_string()),
            category: Some(category.into()),
            amount: Some(AmountInput::Number(amount)),
            description: None,
            date: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Validate a draft, filling defaults for the optional fields.
///
/// `today` is used when the draft carries no date.
pub fn validate(draft: &TransactionDraft, today: NaiveDate) -> ResultEngine<NewTransaction> {
    let kind = validate_kind(draft.kind.as_deref())?;
    let amount = validate_amount(draft.amount.as_ref())?;
    let category = validate_category(draft.category.as_deref())?;
    let occurred_on = match draft.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => today,
    };
    let description = draft
        .description
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    Ok(NewTransaction {
        kind,
        category,
        amount,
        description,
        occurred_on,
    })
}

pub fn validate_kind(raw: Option<&str>) -> ResultEngine<TransactionKind> {
    let raw = raw.ok_or_else(|| EngineError::InvalidKind("missing".to_string()))?;
    TransactionKind::try_from(raw)
}

pub fn validate_amount(raw: Option<&AmountInput>) -> ResultEngine<Amount> {
    match raw {
        None => Err(EngineError::InvalidAmount("missing".to_string())),
        Some(AmountInput::Number(value)) => Amount::new(*value),
        Some(AmountInput::Text(text)) => text.parse(),
        Some(AmountInput::Other(repr)) => Err(EngineError::InvalidAmount(repr.clone())),
    }
}

pub fn validate_category(raw: Option<&str>) -> ResultEngine<String> {
    raw.and_then(normalize_label)
        .ok_or(EngineError::MissingCategory)
}

fn parse_date(raw: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(raw.to_string()))
}

/// Trim, collapse inner whitespace and NFC-normalise a label.
///
/// Returns `None` when nothing is left, so that whitespace-only labels count
/// as missing.
fn normalize_label(input: &str) -> Option<String> {
    let mut out = String::new();
    for token in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    if out.is_empty() {
        None
    } else {
        Some(out.nfc().collect())
    }
}
