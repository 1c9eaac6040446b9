use crate::db::models::{AccountPatch, NewAccount};
use crate::error::AppError;
use crate::router::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

/// GET / -> health check, no side effects.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /accounts -> every stored account as a JSON array.
pub async fn list_accounts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let accounts = state.storage.list().await?;
    Ok(Json(accounts))
}

/// POST /accounts -> 201 with the persisted account.
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<NewAccount>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(new) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    if new.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let account = state.storage.create(new).await?;
    info!(id = account.id, "account created");
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let account = state.storage.get_by_id(id).await?;
    Ok(Json(account))
}

/// PUT /accounts/{id} -> overwrites the provided fields, returns the
/// updated account.
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<AccountPatch>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(patch) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let account = state.storage.update_by_id(id, patch).await?;
    info!(id, "account updated");
    Ok(Json(account))
}

/// DELETE /accounts/{id} -> 204 on success, no body.
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.storage.delete_by_id(id).await?;
    info!(id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
