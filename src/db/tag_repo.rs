// src/db/tag_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::tag::{LeadTagAssignment, Tag},
};

#[derive(Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_tag(
        &self,
        user_id: Uuid,
        name: &str,
        color: Option<&str>,
    ) -> Result<Tag, AppError> {
        let tag = sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (user_id, name, color) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .bind(color)
        .fetch_one(&self.pool)
        .await?;

        Ok(tag)
    }

    pub async fn list_tags(&self, user_id: Uuid) -> Result<Vec<Tag>, AppError> {
        let tags =
            sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE user_id = $1 ORDER BY name ASC")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(tags)
    }

    /// Substitui o conjunto de tags do lead: apaga tudo e insere o conjunto
    /// novo, na mesma transação. Conjunto vazio apenas limpa.
    pub async fn replace_assignments(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM lead_tag_assignments WHERE lead_id = $1 AND user_id = $2")
            .bind(lead_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if !tag_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO lead_tag_assignments (lead_id, tag_id, user_id)
                SELECT $1, tag_id, $2 FROM UNNEST($3::uuid[]) AS t(tag_id)
                "#,
            )
            .bind(lead_id)
            .bind(user_id)
            .bind(tag_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn list_assignments(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<LeadTagAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, LeadTagAssignment>(
            "SELECT * FROM lead_tag_assignments WHERE lead_id = $1 AND user_id = $2",
        )
        .bind(lead_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }
}
