//! Pure aggregation over a ledger snapshot.
//!
//! Every function here is stateless and never fails on empty input: totals
//! are `0`, groupings are empty maps, lists are empty. The only genuine domain
//! errors are a zero/negative income in [`savings_rate`] and non-numeric
//! inputs to [`filter_by_threshold`] and [`project_annual_income`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{EngineError, ResultEngine, Transaction, TransactionKind, money::round_cents};

/// Number of records in [`Summary::recent_transactions`].
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Surplus,
    Deficit,
}

/// Full view of the ledger at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub status: Status,
    pub transaction_count: usize,
    pub recent_transactions: Vec<Transaction>,
}

/// Standalone summary built from two totals.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceReport {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub status: Status,
    pub generated_at: DateTime<Utc>,
}

/// Income grouped by source and expenses grouped by category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakdown {
    pub income: BTreeMap<String, f64>,
    pub expenses: BTreeMap<String, f64>,
}

pub fn total_by_kind(records: &[Transaction], kind: TransactionKind) -> f64 {
    records
        .iter()
        .filter(|r| r.kind == kind)
        .map(|r| r.amount.value())
        .sum()
}

pub fn balance(income: f64, expenses: f64) -> f64 {
    income - expenses
}

pub fn status(balance: f64) -> Status {
    if balance >= 0.0 {
        Status::Surplus
    } else {
        Status::Deficit
    }
}

/// Percentage of income kept after expenses, rounded to two decimals.
///
/// Totals that overflowed to infinity have no meaningful rate.
pub fn savings_rate(income: f64, expenses: f64) -> ResultEngine<f64> {
    if !income.is_finite() || income <= 0.0 {
        return Err(EngineError::InvalidIncome(income.to_string()));
    }
    let rate = balance(income, expenses) / income * 100.0;
    if !rate.is_finite() {
        return Err(EngineError::InvalidIncome(income.to_string()));
    }
    Ok(round_cents(rate))
}

/// Sum amounts per key. Keys absent from `records` never appear.
pub fn group_by<'a, I, F>(records: I, key: F) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a Transaction>,
    F: Fn(&'a Transaction) -> &'a str,
{
    records.into_iter().fold(BTreeMap::new(), |mut groups, r| {
        *groups.entry(key(r).to_string()).or_insert(0.0) += r.amount.value();
        groups
    })
}

/// Records with `amount >= threshold`, in their original order.
pub fn filter_by_threshold(
    records: &[Transaction],
    threshold: f64,
) -> ResultEngine<Vec<Transaction>> {
    if !threshold.is_finite() {
        return Err(EngineError::InvalidThreshold(threshold.to_string()));
    }
    Ok(records
        .iter()
        .filter(|r| r.amount.value() >= threshold)
        .cloned()
        .collect())
}

/// The `n` most recent records by date; equal dates keep insertion order.
pub fn recent_transactions(records: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = records.to_vec();
    // `sort_by` is stable.
    sorted.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
    sorted.truncate(n);
    sorted
}

pub fn summarize(records: &[Transaction]) -> Summary {
    let total_income = total_by_kind(records, TransactionKind::Income);
    let total_expenses = total_by_kind(records, TransactionKind::Expense);
    let balance = balance(total_income, total_expenses);

    Summary {
        total_income,
        total_expenses,
        balance,
        status: status(balance),
        transaction_count: records.len(),
        recent_transactions: recent_transactions(records, DEFAULT_RECENT_LIMIT),
    }
}

pub fn balance_report(income: f64, expenses: f64, generated_at: DateTime<Utc>) -> BalanceReport {
    let balance = balance(income, expenses);
    BalanceReport {
        income,
        expenses,
        balance,
        status: status(balance),
        generated_at,
    }
}

pub fn breakdown(records: &[Transaction]) -> Breakdown {
    Breakdown {
        income: group_by(records.iter().filter(|r| r.is_income()), |r| {
            r.category.as_str()
        }),
        expenses: group_by(records.iter().filter(|r| r.is_expense()), |r| {
            r.category.as_str()
        }),
    }
}

/// Yearly income from a monthly figure, rounded to two decimals.
pub fn project_annual_income(monthly: f64) -> ResultEngine<f64> {
    if !monthly.is_finite() || monthly < 0.0 {
        return Err(EngineError::InvalidIncome(monthly.to_string()));
    }
    Ok(round_cents(monthly * 12.0))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::Amount;

    fn tx(kind: TransactionKind, category: &str, amount: f64, day: u32) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind,
            category: category.to_string(),
            amount: Amount::new(amount).unwrap(),
            description: String::new(),
            occurred_on: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn expense(category: &str, amount: f64) -> Transaction {
        tx(TransactionKind::Expense, category, amount, 1)
    }

    #[test]
    fn totals_are_zero_for_empty_input() {
        assert_eq!(total_by_kind(&[], TransactionKind::Income), 0.0);
        assert_eq!(total_by_kind(&[], TransactionKind::Expense), 0.0);
    }

    #[test]
    fn totals_only_count_matching_kind() {
        let records = [
            tx(TransactionKind::Income, "Salary", 3000.0, 1),
            expense("Food", 150.0),
            expense("Utilities", 80.0),
        ];
        assert_eq!(total_by_kind(&records, TransactionKind::Income), 3000.0);
        assert_eq!(total_by_kind(&records, TransactionKind::Expense), 230.0);
    }

    #[test]
    fn balance_is_plain_difference() {
        assert_eq!(balance(5000.0, 3000.0), 2000.0);
        assert_eq!(balance(3000.0, 5000.0), -2000.0);
        assert_eq!(balance(4000.0, 4000.0), 0.0);
    }

    #[test]
    fn status_boundary_is_surplus() {
        assert_eq!(status(0.0), Status::Surplus);
        assert_eq!(status(2000.0), Status::Surplus);
        assert_eq!(status(-0.01), Status::Deficit);
    }

    #[test]
    fn savings_rate_matches_known_values() {
        assert_eq!(savings_rate(10000.0, 7000.0), Ok(30.0));
        assert_eq!(savings_rate(5000.0, 5000.0), Ok(0.0));
        assert_eq!(savings_rate(3.0, 2.0), Ok(33.33));
        assert!(savings_rate(5000.0, 6000.0).unwrap() < 0.0);
    }

    #[test]
    fn savings_rate_rejects_non_positive_income() {
        for income in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                savings_rate(income, 3000.0),
                Err(EngineError::InvalidIncome(_))
            ));
        }
    }

    #[test]
    fn savings_rate_rejects_overflowed_totals() {
        let income = total_by_kind(
            &[
                tx(TransactionKind::Income, "Salary", 1e308, 1),
                tx(TransactionKind::Income, "Bonus", 1e308, 2),
            ],
            TransactionKind::Income,
        );
        assert!(income.is_infinite());
        assert!(matches!(
            savings_rate(income, 0.0),
            Err(EngineError::InvalidIncome(_))
        ));
        assert!(matches!(
            savings_rate(1000.0, f64::INFINITY),
            Err(EngineError::InvalidIncome(_))
        ));
    }

    #[test]
    fn group_by_sums_per_key() {
        let records = [
            expense("Food", 500.0),
            expense("Transport", 300.0),
            expense("Food", 200.0),
        ];
        let groups = group_by(&records, |r| r.category.as_str());
        assert_eq!(
            groups,
            BTreeMap::from([("Food".to_string(), 700.0), ("Transport".to_string(), 300.0)])
        );
    }

    #[test]
    fn group_by_empty_is_empty() {
        let records: [Transaction; 0] = [];
        assert!(group_by(&records, |r| r.category.as_str()).is_empty());
    }

    #[test]
    fn filter_by_threshold_is_inclusive() {
        let records = [expense("A", 50.0), expense("B", 100.0), expense("C", 150.0)];
        let above = filter_by_threshold(&records, 100.0).unwrap();
        let names: Vec<_> = above.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, ["B", "C"]);

        assert_eq!(filter_by_threshold(&records, 0.0).unwrap().len(), 3);
        assert!(filter_by_threshold(&records, 1000.0).unwrap().is_empty());
    }

    #[test]
    fn filter_by_threshold_rejects_non_numbers() {
        assert!(matches!(
            filter_by_threshold(&[], f64::NAN),
            Err(EngineError::InvalidThreshold(_))
        ));
        assert!(matches!(
            filter_by_threshold(&[], f64::INFINITY),
            Err(EngineError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn recent_transactions_sorts_desc_and_keeps_insertion_order_on_ties() {
        let records = [
            tx(TransactionKind::Expense, "old", 1.0, 1),
            tx(TransactionKind::Expense, "tie-first", 1.0, 5),
            tx(TransactionKind::Income, "newest", 1.0, 9),
            tx(TransactionKind::Expense, "tie-second", 1.0, 5),
        ];
        let recent = recent_transactions(&records, 5);
        let names: Vec<_> = recent.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, ["newest", "tie-first", "tie-second", "old"]);

        assert_eq!(recent_transactions(&records, 2).len(), 2);
        assert!(recent_transactions(&[], 5).is_empty());
    }

    #[test]
    fn summarize_is_pure() {
        let records: Vec<_> = (1..=7)
            .map(|day| tx(TransactionKind::Expense, "x", f64::from(day), day))
            .collect();
        let first = summarize(&records);
        let second = summarize(&records);
        assert_eq!(first, second);
        assert_eq!(first.transaction_count, 7);
        assert_eq!(first.recent_transactions.len(), DEFAULT_RECENT_LIMIT);
        assert_eq!(first.status, Status::Deficit);
    }

    #[test]
    fn summarize_empty_ledger() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.status, Status::Surplus);
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.recent_transactions.is_empty());
    }

    #[test]
    fn balance_report_carries_status() {
        let now = Utc::now();
        let report = balance_report(3000.0, 5000.0, now);
        assert_eq!(report.balance, -2000.0);
        assert_eq!(report.status, Status::Deficit);
        assert_eq!(report.generated_at, now);
    }

    #[test]
    fn breakdown_splits_by_kind() {
        let records = [
            tx(TransactionKind::Income, "Salary", 3000.0, 1),
            tx(TransactionKind::Income, "Freelance", 500.0, 2),
            tx(TransactionKind::Income, "Salary", 100.0, 3),
            expense("Food", 150.0),
        ];
        let breakdown = breakdown(&records);
        assert_eq!(breakdown.income.get("Salary"), Some(&3100.0));
        assert_eq!(breakdown.income.get("Freelance"), Some(&500.0));
        assert_eq!(breakdown.income.get("Food"), None);
        assert_eq!(
            breakdown.expenses,
            BTreeMap::from([("Food".to_string(), 150.0)])
        );
    }

    #[test]
    fn project_annual_income_multiplies_by_twelve() {
        assert_eq!(project_annual_income(5000.0), Ok(60000.0));
        assert_eq!(project_annual_income(0.0), Ok(0.0));
        assert_eq!(project_annual_income(1234.567), Ok(14814.8));
        assert!(project_annual_income(-1.0).is_err());
    }
}
