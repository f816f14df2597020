//! Transactions API endpoints

use api_types::{
    Message,
    transaction::{TransactionFilter, TransactionKind as ApiKind, TransactionNew, TransactionView},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use engine::{AmountInput, EngineError, TransactionDraft};
use serde_json::Value;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub(crate) fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Income => ApiKind::Income,
        engine::TransactionKind::Expense => ApiKind::Expense,
    }
}

pub(crate) fn map_transaction(tx: &engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        kind: map_kind(tx.kind),
        category: tx.category.clone(),
        amount: tx.amount.value(),
        description: tx.description.clone(),
        date: tx.occurred_on,
        created_at: tx.created_at,
    }
}

fn amount_input(value: Value) -> AmountInput {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) => AmountInput::Number(v),
            None => AmountInput::Other(n.to_string()),
        },
        Value::String(s) => AmountInput::Text(s),
        other => AmountInput::Other(other.to_string()),
    }
}

fn kind_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn draft_from(payload: TransactionNew) -> TransactionDraft {
    TransactionDraft {
        kind: payload.kind.map(kind_text),
        category: payload.category,
        amount: payload.amount.map(amount_input),
        description: payload.description,
        date: payload.date,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<TransactionFilter>, QueryRejection>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let Query(filter) = query?;
    let engine = state.engine.read().await;

    let transactions: Vec<TransactionView> = match filter.min_amount {
        Some(raw) => {
            let threshold: f64 = raw
                .trim()
                .parse()
                .map_err(|_| EngineError::InvalidThreshold(raw.clone()))?;
            engine
                .transactions_above(threshold)?
                .iter()
                .map(map_transaction)
                .collect()
        }
        None => engine
            .list_transactions()
            .iter()
            .map(map_transaction)
            .collect(),
    };

    Ok(Json(transactions))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let Json(payload) = payload?;
    let draft = draft_from(payload);

    let tx = state.engine.write().await.add_transaction(&draft)?;
    tracing::info!("added {} {} ({})", tx.kind.as_str(), tx.id, tx.category);

    Ok((StatusCode::CREATED, Json(map_transaction(&tx))))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ServerError> {
    // Anything that is not a UUID cannot be in the ledger.
    let id = Uuid::parse_str(&id).map_err(|_| EngineError::NotFound(id.clone()))?;

    let tx = state.engine.write().await.remove_transaction(id)?;
    tracing::info!("removed {} {}", tx.kind.as_str(), tx.id);

    Ok(Json(Message {
        message: "Transaction deleted successfully.".to_string(),
    }))
}

pub async fn reset(State(state): State<ServerState>) -> Json<Message> {
    state.engine.write().await.reset_to_default();
    tracing::info!("ledger reset to defaults");

    Json(Message {
        message: "Data reset to defaults.".to_string(),
    })
}
