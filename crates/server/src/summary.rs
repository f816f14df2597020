//! Summary API endpoints
//!
//! Every view is recomputed from the current ledger on each request.

use api_types::summary::{BalanceReport, Breakdown, SavingsRate, Status, Summary};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState, transactions::map_transaction};

fn map_status(status: engine::Status) -> Status {
    match status {
        engine::Status::Surplus => Status::Surplus,
        engine::Status::Deficit => Status::Deficit,
    }
}

pub async fn get_summary(State(state): State<ServerState>) -> Json<Summary> {
    let summary = state.engine.read().await.summary();

    Json(Summary {
        total_income: summary.total_income,
        total_expenses: summary.total_expenses,
        balance: summary.balance,
        status: map_status(summary.status),
        transaction_count: summary.transaction_count,
        recent_transactions: summary
            .recent_transactions
            .iter()
            .map(map_transaction)
            .collect(),
    })
}

/// Standalone income/expenses/balance report with its generation time.
pub async fn get_report(State(state): State<ServerState>) -> Json<BalanceReport> {
    let report = state.engine.read().await.balance_report();

    Json(BalanceReport {
        income: report.income,
        expenses: report.expenses,
        balance: report.balance,
        status: map_status(report.status),
        generated_at: report.generated_at,
    })
}

pub async fn get_breakdown(State(state): State<ServerState>) -> Json<Breakdown> {
    let breakdown = state.engine.read().await.breakdown();

    Json(Breakdown {
        income: breakdown.income,
        expenses: breakdown.expenses,
    })
}

pub async fn get_savings_rate(
    State(state): State<ServerState>,
) -> Result<Json<SavingsRate>, ServerError> {
    let savings_rate = state.engine.read().await.savings_rate()?;
    Ok(Json(SavingsRate { savings_rate }))
}
