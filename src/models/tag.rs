// src/models/tag.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "VIP")]
    pub name: String,
    #[schema(example = "#2e7d32")]
    pub color: Option<String>,

    pub created_at: DateTime<Utc>,
}

// Vínculo (lead, tag). Não tem ciclo de vida próprio além do lead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadTagAssignment {
    pub lead_id: Uuid,
    pub tag_id: Uuid,
    pub user_id: Uuid,
}
