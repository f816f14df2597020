//! Ledger engine: transaction records, validation, storage and aggregation.
//!
//! [`Engine`] is the only entry point the transport needs. It fixes the order
//! validate-then-mutate for writes and recomputes every derived view from the
//! current snapshot on each call.
//!
//! ```rust
//! use engine::{Engine, TransactionDraft, TransactionKind};
//!
//! let mut engine = Engine::builder().build();
//! assert_eq!(engine.summary().transaction_count, 3);
//!
//! let tx = engine
//!     .add_transaction(&TransactionDraft::new(TransactionKind::Expense, "Transport", 45.0))
//!     .unwrap();
//! assert_eq!(engine.summary().total_expenses, 275.0);
//!
//! engine.remove_transaction(tx.id).unwrap();
//! assert_eq!(engine.summary().transaction_count, 3);
//! ```

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use aggregation::{BalanceReport, Breakdown, Status, Summary};
pub use error::EngineError;
pub use money::Amount;
pub use store::TransactionStore;
pub use transactions::{NewTransaction, Transaction, TransactionKind};
pub use validation::{AmountInput, TransactionDraft};

pub mod aggregation;
mod error;
mod money;
pub mod seed;
mod store;
mod transactions;
pub mod validation;

type ResultEngine<T> = Result<T, EngineError>;

/// Source of the current time, used for `created_at` and default dates.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug)]
pub struct Engine {
    store: TransactionStore,
    seed: Vec<NewTransaction>,
    clock: Clock,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Validate `draft` and append it to the ledger.
    ///
    /// Validation errors are returned unchanged.
    pub fn add_transaction(&mut self, draft: &TransactionDraft) -> ResultEngine<Transaction> {
        let now = (self.clock)();
        let new = validation::validate(draft, now.date_naive())?;
        Ok(self.store.insert(new, now))
    }

    /// Remove the transaction with `id`, returning it.
    pub fn remove_transaction(&mut self, id: Uuid) -> ResultEngine<Transaction> {
        self.store.remove(id)
    }

    /// All transactions in insertion order.
    pub fn list_transactions(&self) -> &[Transaction] {
        self.store.list()
    }

    pub fn summary(&self) -> Summary {
        aggregation::summarize(self.store.list())
    }

    /// Replace the ledger contents with the engine's seed.
    pub fn reset_to_default(&mut self) {
        self.store.reset(self.seed.clone(), (self.clock)());
    }

    /// Transactions whose amount is at least `threshold`.
    pub fn transactions_above(&self, threshold: f64) -> ResultEngine<Vec<Transaction>> {
        aggregation::filter_by_threshold(self.store.list(), threshold)
    }

    pub fn breakdown(&self) -> Breakdown {
        aggregation::breakdown(self.store.list())
    }

    /// Savings rate of the whole ledger; fails while there is no income.
    pub fn savings_rate(&self) -> ResultEngine<f64> {
        let records = self.store.list();
        aggregation::savings_rate(
            aggregation::total_by_kind(records, TransactionKind::Income),
            aggregation::total_by_kind(records, TransactionKind::Expense),
        )
    }

    pub fn balance_report(&self) -> BalanceReport {
        let records = self.store.list();
        aggregation::balance_report(
            aggregation::total_by_kind(records, TransactionKind::Income),
            aggregation::total_by_kind(records, TransactionKind::Expense),
            (self.clock)(),
        )
    }
}

/// The builder for `Engine`
pub struct EngineBuilder {
    seed: Vec<NewTransaction>,
    seeded: bool,
    clock: Clock,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            seed: seed::default_seed(),
            seeded: true,
            clock: Utc::now,
        }
    }
}

impl EngineBuilder {
    /// Records used on reset. Defaults to [`seed::default_seed`].
    pub fn seed(mut self, seed: Vec<NewTransaction>) -> EngineBuilder {
        self.seed = seed;
        self
    }

    /// Whether the ledger starts with the seed (`true`) or empty.
    pub fn seeded(mut self, seeded: bool) -> EngineBuilder {
        self.seeded = seeded;
        self
    }

    pub fn clock(mut self, clock: Clock) -> EngineBuilder {
        self.clock = clock;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        let store = if self.seeded {
            TransactionStore::with_seed(self.seed.clone(), (self.clock)())
        } else {
            TransactionStore::new()
        };
        Engine {
            store,
            seed: self.seed,
            clock: self.clock,
        }
    }
}
