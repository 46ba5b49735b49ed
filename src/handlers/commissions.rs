// src/handlers/commissions.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::commission::{Commission, CommissionStatus, CommissionTotals},
};

// GET /api/commissions
#[utoipa::path(
    get,
    path = "/api/commissions",
    tag = "Commissions",
    responses(
        (status = 200, description = "Comissões do usuário", body = Vec<Commission>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_commissions(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let commissions = app_state.commission_ledger.list(user.0.id).await?;

    Ok((StatusCode::OK, Json(commissions)))
}

// GET /api/commissions/totals
#[utoipa::path(
    get,
    path = "/api/commissions/totals",
    tag = "Commissions",
    responses(
        (status = 200, description = "Totais por situação (legados contam como concluídas)", body = CommissionTotals)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_totals(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let totals = app_state.commission_ledger.totals(user.0.id).await?;

    Ok((StatusCode::OK, Json(totals)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommissionStatusPayload {
    #[schema(example = "completed")]
    pub status: CommissionStatus,
}

// PATCH /api/commissions/{id}/status
// Desacoplado do lead de origem: mudar aqui não mexe no funil.
#[utoipa::path(
    patch,
    path = "/api/commissions/{id}/status",
    tag = "Commissions",
    params(("id" = Uuid, Path, description = "ID da comissão")),
    request_body = UpdateCommissionStatusPayload,
    responses(
        (status = 200, description = "Comissão atualizada", body = Commission),
        (status = 404, description = "Comissão não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_commission_status(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCommissionStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let commission = app_state
        .commission_ledger
        .update_status(id, user.0.id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(commission)))
}
