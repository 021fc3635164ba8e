use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use budgetwise_core::budgets::{Budget, BudgetSummary, NewBudget};
use budgetwise_core::errors::Error;

use crate::error::ApiResult;
use crate::identity::UserId;
use crate::main_lib::AppState;

async fn create_budget(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(new_budget): Json<NewBudget>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let budget = state
        .budget_service
        .create_budget(&user_id, new_budget)
        .await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

async fn get_budget(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<BudgetSummary>> {
    match state.budget_service.get_budget_summary(&user_id).await? {
        Some(summary) => Ok(Json(summary)),
        None => Err(Error::NotFound("Budget".to_string()).into()),
    }
}

async fn delete_budget(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<Value>> {
    state.budget_service.delete_budget(&user_id).await?;
    Ok(Json(json!({ "message": "Budget deleted successfully" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/budgets",
        post(create_budget).get(get_budget).delete(delete_budget),
    )
}
