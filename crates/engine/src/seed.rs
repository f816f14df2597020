//! The fixed default ledger contents, shared by boot and reset.

use chrono::NaiveDate;

use crate::{Amount, NewTransaction, TransactionKind};

type SeedRow = (TransactionKind, &'static str, Amount, &'static str, NaiveDate);

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

// Evaluated at compile time, so a bad constant fails the build.
const DEFAULT_SEED: [SeedRow; 3] = [
    (
        TransactionKind::Income,
        "Salary",
        Amount::from_const(3000.0),
        "Monthly salary",
        date(2024, 1, 1),
    ),
    (
        TransactionKind::Expense,
        "Food",
        Amount::from_const(150.0),
        "Groceries",
        date(2024, 1, 2),
    ),
    (
        TransactionKind::Expense,
        "Utilities",
        Amount::from_const(80.0),
        "Electricity bill",
        date(2024, 1, 3),
    ),
];

/// One income (Salary, 3000) and two expenses (Food, 150; Utilities, 80),
/// dated 2024-01-01 to 2024-01-03.
pub fn default_seed() -> Vec<NewTransaction> {
    DEFAULT_SEED
        .iter()
        .map(
            |&(kind, category, amount, description, occurred_on)| NewTransaction {
                kind,
                category: category.to_string(),
                amount,
                description: description.to_string(),
                occurred_on,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_fixed_records() {
        let seed = default_seed();
        assert_eq!(seed.len(), 3);

        let income: Vec<_> = seed
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| (t.category.as_str(), t.amount.value()))
            .collect();
        assert_eq!(income, [("Salary", 3000.0)]);

        let expenses: Vec<_> = seed
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| (t.category.as_str(), t.amount.value()))
            .collect();
        assert_eq!(expenses, [("Food", 150.0), ("Utilities", 80.0)]);
    }

    #[test]
    fn seed_keeps_every_table_row_in_order() {
        let seed = default_seed();
        assert_eq!(seed.len(), DEFAULT_SEED.len());

        let dates: Vec<_> = seed.iter().map(|t| t.occurred_on.to_string()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(default_seed(), default_seed());
    }
}
