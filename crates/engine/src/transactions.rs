//! Transaction primitives.
//!
//! A `Transaction` is a single income or expense event. Records are immutable
//! once stored: the ledger only ever inserts or removes whole records.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{Amount, EngineError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidKind(other.to_string())),
        }
    }
}

/// A validated record that has not been stored yet.
///
/// Produced by [`validate`](crate::validation::validate) and by the default
/// seed; the store assigns `id` and `created_at` on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Amount,
    pub description: String,
    pub occurred_on: NaiveDate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    /// Expense category, or income source.
    pub category: String,
    pub amount: Amount,
    pub description: String,
    pub occurred_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn from_new(new: NewTransaction, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: new.kind,
            category: new.category,
            amount: new.amount,
            description: new.description,
            occurred_on: new.occurred_on,
            created_at,
        }
    }

    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
