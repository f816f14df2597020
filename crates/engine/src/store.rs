//! The record store: an ordered, append/remove-only collection of
//! transactions.
//!
//! The store never validates; callers hand it records that already passed
//! [`validation`](crate::validation). Ids are random UUIDs, so rapid
//! sequential inserts can never collide.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EngineError, NewTransaction, ResultEngine, Transaction};

#[derive(Clone, Debug, Default)]
pub struct TransactionStore {
    records: Vec<Transaction>,
}

impl TransactionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `seed`, in order.
    #[must_use]
    pub fn with_seed(seed: Vec<NewTransaction>, created_at: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        store.reset(seed, created_at);
        store
    }

    /// Append a record, assigning its id and creation timestamp.
    pub fn insert(&mut self, new: NewTransaction, created_at: DateTime<Utc>) -> Transaction {
        let mut tx = Transaction::from_new(new, created_at);
        while self.records.iter().any(|r| r.id == tx.id) {
            tx.id = Uuid::new_v4();
        }
        self.records.push(tx.clone());
        tx
    }

    /// Remove the record with `id`, returning it.
    pub fn remove(&mut self, id: Uuid) -> ResultEngine<Transaction> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| EngineError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Transaction] {
        &self.records
    }

    /// Replace the whole collection with `seed`.
    pub fn reset(&mut self, seed: Vec<NewTransaction>, created_at: DateTime<Utc>) {
        self.records = seed
            .into_iter()
            .map(|new| Transaction::from_new(new, created_at))
            .collect();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
