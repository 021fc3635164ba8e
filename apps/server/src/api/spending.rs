use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use budgetwise_core::spending::SpendRecord;
use budgetwise_core::utils::validate_id;

use crate::error::ApiResult;
use crate::identity::UserId;
use crate::main_lib::AppState;

async fn get_spend_records(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<Vec<SpendRecord>>> {
    validate_id(&user_id)?;
    let records = state.spending_repository.list_for_user(&user_id)?;
    Ok(Json(records))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/spending", get(get_spend_records))
}
