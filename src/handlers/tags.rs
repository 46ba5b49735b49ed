// src/handlers/tags.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError, config::AppState, middleware::auth::AuthenticatedUser,
    models::tag::Tag,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "VIP")]
    pub name: String,

    #[schema(example = "#2e7d32")]
    pub color: Option<String>,
}

// POST /api/tags
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = "Tags",
    request_body = CreateTagPayload,
    responses(
        (status = 201, description = "Tag criada", body = Tag)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_tag(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTagPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tag = app_state
        .tag_service
        .create_tag(user.0.id, &payload.name, payload.color.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(tag)))
}

// GET /api/tags
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "Tags",
    responses(
        (status = 200, description = "Tags do usuário", body = Vec<Tag>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tags(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let tags = app_state.tag_service.list_tags(user.0.id).await?;

    Ok((StatusCode::OK, Json(tags)))
}
