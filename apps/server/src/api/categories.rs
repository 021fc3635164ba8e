use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use budgetwise_core::categories::{Category, NewCategory};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_categories(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.get_categories()?;
    Ok(Json(categories))
}

async fn get_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Category>> {
    let category = state.category_service.get_category(&id)?;
    Ok(Json(category))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(new_category): Json<NewCategory>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.category_service.create_category(new_category).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route("/categories/{id}", get(get_category))
}
