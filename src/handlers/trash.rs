// src/handlers/trash.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError, config::AppState, middleware::auth::AuthenticatedUser,
    models::trash::DeletedLead,
};

// GET /api/trash
#[utoipa::path(
    get,
    path = "/api/trash",
    tag = "Trash",
    responses(
        (status = 200, description = "Leads na lixeira, mais recentes primeiro", body = Vec<DeletedLead>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_trash(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let entries = app_state.trash_service.list(user.0.id).await?;

    Ok((StatusCode::OK, Json(entries)))
}

// POST /api/trash/{id}/restore
#[utoipa::path(
    post,
    path = "/api/trash/{id}/restore",
    tag = "Trash",
    params(("id" = Uuid, Path, description = "ID da entrada na lixeira")),
    responses(
        (status = 200, description = "Lead restaurado", body = crate::models::lead::Lead),
        (status = 404, description = "Registro não encontrado na lixeira")
    ),
    security(("api_jwt" = []))
)]
pub async fn restore_lead(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.trash_service.restore(id, user.0.id).await?;

    Ok((StatusCode::OK, Json(lead)))
}
