//! JSON wire types of the ledger HTTP API.
//!
//! Field names are camelCase on the wire; the transaction kind travels as
//! `type`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Body of confirmations that carry no data (delete, reset).
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionView {
        pub id: Uuid,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        /// Expense category or income source.
        pub category: String,
        pub amount: f64,
        pub description: String,
        /// Calendar date, `YYYY-MM-DD`.
        pub date: NaiveDate,
        pub created_at: DateTime<Utc>,
    }

    /// Request body for `POST /api/transactions`.
    ///
    /// Every field is optional at the decoding level so that the server can
    /// answer with a precise validation message instead of a decoding error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TransactionNew {
        /// `"income"` or `"expense"`.
        #[serde(rename = "type")]
        pub kind: Option<serde_json::Value>,
        pub category: Option<String>,
        /// A JSON number or a numeric string.
        pub amount: Option<serde_json::Value>,
        pub description: Option<String>,
        /// `YYYY-MM-DD`; the server uses today when absent.
        pub date: Option<String>,
    }

    /// Query string of `GET /api/transactions`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct TransactionFilter {
        /// Only return transactions with `amount >= minAmount`.
        pub min_amount: Option<String>,
    }
}

pub mod summary {
    use std::collections::BTreeMap;

    use super::*;
    use crate::transaction::TransactionView;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Status {
        Surplus,
        Deficit,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Summary {
        pub total_income: f64,
        pub total_expenses: f64,
        pub balance: f64,
        pub status: Status,
        pub transaction_count: usize,
        /// Up to five records, newest date first.
        pub recent_transactions: Vec<TransactionView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BalanceReport {
        pub income: f64,
        pub expenses: f64,
        pub balance: f64,
        pub status: Status,
        pub generated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Breakdown {
        /// Income totals per source.
        pub income: BTreeMap<String, f64>,
        /// Expense totals per category.
        pub expenses: BTreeMap<String, f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsRate {
        /// Percentage, two decimals.
        pub savings_rate: f64,
    }
}
