// src/handlers/leads.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    db::lead_repo::LeadPatch,
    middleware::auth::AuthenticatedUser,
    models::lead::{Lead, LeadStatus},
};

// =============================================================================
//  ÁREA 1: CRUD DE LEADS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maria da Silva")]
    pub name: String,

    #[schema(example = "12345678900")]
    pub cpf: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    // Valor no formato de exibição; o backend normaliza ("R$ 1.234,56")
    #[schema(example = "R$ 15.000,00")]
    pub amount: Option<String>,

    #[schema(example = "consignado_inss")]
    pub product: Option<String>,
    pub employee: Option<String>,
    #[schema(example = 84)]
    pub payment_period: Option<i32>,
    #[schema(example = "Banco do Brasil")]
    pub bank: Option<String>,
    pub notes: Option<String>,

    // Data de negócio; se ausente, o banco usa a data corrente
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-10")]
    pub created_at: Option<NaiveDate>,
}

// POST /api/leads
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = CreateLeadPayload,
    responses(
        (status = 201, description = "Lead criado", body = Lead),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let lead = app_state
        .lead_service
        .create(
            user.0.id,
            &payload.name,
            payload.cpf.as_deref(),
            payload.phone.as_deref(),
            payload.email.as_deref(),
            payload.amount.as_deref(),
            payload.product.as_deref(),
            payload.employee.as_deref(),
            payload.payment_period,
            payload.bank.as_deref(),
            payload.notes.as_deref(),
            payload.created_at,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(lead)))
}

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses(
        (status = 200, description = "Leads ativos do usuário", body = Vec<Lead>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.lead_service.list(user.0.id).await?;

    Ok((StatusCode::OK, Json(leads)))
}

// GET /api/leads/{id}
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead encontrado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.lead_service.get(id, user.0.id).await?;

    Ok((StatusCode::OK, Json(lead)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadPayload {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[schema(example = "R$ 15.000,00")]
    pub amount: Option<String>,
    pub product: Option<String>,
    pub employee: Option<String>,
    pub payment_period: Option<i32>,
    pub bank: Option<String>,
    pub notes: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub created_at: Option<NaiveDate>,
}

// PUT /api/leads/{id}
#[utoipa::path(
    put,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = UpdateLeadPayload,
    responses(
        (status = 200, description = "Lead atualizado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let patch = LeadPatch {
        name: payload.name,
        cpf: payload.cpf,
        phone: payload.phone,
        email: payload.email,
        amount: None, // normalizado no serviço a partir do formato de exibição
        product: payload.product,
        employee: payload.employee,
        payment_period: payload.payment_period,
        bank: payload.bank,
        notes: payload.notes,
        created_at: payload.created_at,
    };

    let lead = app_state
        .lead_service
        .update(id, user.0.id, patch, payload.amount.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(lead)))
}

// =============================================================================
//  ÁREA 2: MÁQUINA DE ESTADOS (status do funil)
// =============================================================================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusPayload {
    #[schema(example = "concluido")]
    pub status: LeadStatus,

    // Confirmação explícita exigida para reclassificar uma venda fechada
    // que já tem comissão registrada
    #[serde(default)]
    pub confirmed: bool,
}

// PATCH /api/leads/{id}/status
#[utoipa::path(
    patch,
    path = "/api/leads/{id}/status",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = ChangeStatusPayload,
    responses(
        (status = 200, description = "Resultado da transição", body = crate::services::lead_status::StatusChangeOutcome),
        (status = 400, description = "Lead sem valor ou produto para gerar comissão"),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn change_lead_status(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangeStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = app_state
        .lead_status_service
        .request_status_change(id, user.0.id, payload.status, payload.confirmed)
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

// =============================================================================
//  ÁREA 3: LIXEIRA E TAGS DO LEAD
// =============================================================================

// DELETE /api/leads/{id}
#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead movido para a lixeira", body = crate::models::trash::DeletedLead),
        (status = 404, description = "Lead não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let entry = app_state.trash_service.soft_delete(id, user.0.id).await?;

    Ok((StatusCode::OK, Json(entry)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeletePayload {
    #[validate(length(min = 1, message = "required"))]
    pub lead_ids: Vec<Uuid>,
}

// POST /api/leads/batch-delete
#[utoipa::path(
    post,
    path = "/api/leads/batch-delete",
    tag = "Leads",
    request_body = BatchDeletePayload,
    responses(
        (status = 200, description = "Leads movidos para a lixeira", body = Vec<crate::models::trash::DeletedLead>)
    ),
    security(("api_jwt" = []))
)]
pub async fn batch_delete_leads(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<BatchDeletePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entries = app_state
        .trash_service
        .soft_delete_many(&payload.lead_ids, user.0.id)
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTagsPayload {
    // Conjunto completo desejado; vazio limpa todas as tags do lead
    pub tag_ids: Vec<Uuid>,
}

// PUT /api/leads/{id}/tags
#[utoipa::path(
    put,
    path = "/api/leads/{id}/tags",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = ReplaceTagsPayload,
    responses(
        (status = 200, description = "Tags substituídas", body = Vec<crate::models::tag::LeadTagAssignment>)
    ),
    security(("api_jwt" = []))
)]
pub async fn replace_lead_tags(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReplaceTagsPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .tag_service
        .replace_tags(id, user.0.id, &payload.tag_ids)
        .await?;

    let assignments = app_state.tag_service.list_for_lead(id, user.0.id).await?;

    Ok((StatusCode::OK, Json(assignments)))
}

// GET /api/leads/{id}/tags
#[utoipa::path(
    get,
    path = "/api/leads/{id}/tags",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Tags do lead", body = Vec<crate::models::tag::LeadTagAssignment>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_lead_tags(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = app_state.tag_service.list_for_lead(id, user.0.id).await?;

    Ok((StatusCode::OK, Json(assignments)))
}
