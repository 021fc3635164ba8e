use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;

use budgetwise_core::goals::{Goal, GoalsStats, NewGoal};

use crate::error::ApiResult;
use crate::identity::UserId;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct UpdateAccumulatedPayload {
    accumulated_amount: Decimal,
}

async fn get_goals(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals(&user_id)?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(new_goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state.goal_service.create_goal(&user_id, new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn get_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.get_goal(&user_id, &id)?;
    Ok(Json(goal))
}

async fn update_accumulated(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(payload): Json<UpdateAccumulatedPayload>,
) -> ApiResult<Json<Goal>> {
    let goal = state
        .goal_service
        .update_accumulated(&user_id, &id, payload.accumulated_amount)
        .await?;
    Ok(Json(goal))
}

async fn get_goals_stats(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<GoalsStats>> {
    let stats = state.goal_service.get_goals_stats(&user_id)?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals/stats", get(get_goals_stats))
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{id}", get(get_goal).put(update_accumulated))
}
