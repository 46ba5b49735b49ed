// src/db/trash_repo.rs

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{lead::Lead, trash::DeletedLead},
};

#[derive(Clone)]
pub struct TrashRepository {
    pool: PgPool,
}

impl TrashRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_snapshot(
        tx: &mut Transaction<'_, Postgres>,
        snap: &DeletedLead,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO deleted_leads (
                id, original_lead_id, user_id, name, cpf, phone, email,
                status, amount, product, employee, payment_period, bank, notes,
                created_at, inserted_at, deleted_at, expires_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18)
            "#,
        )
        .bind(snap.id)
        .bind(snap.original_lead_id)
        .bind(snap.user_id)
        .bind(&snap.name)
        .bind(&snap.cpf)
        .bind(&snap.phone)
        .bind(&snap.email)
        .bind(snap.status)
        .bind(snap.amount)
        .bind(&snap.product)
        .bind(&snap.employee)
        .bind(snap.payment_period)
        .bind(&snap.bank)
        .bind(&snap.notes)
        .bind(snap.created_at)
        .bind(snap.inserted_at)
        .bind(snap.deleted_at)
        .bind(snap.expires_at)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Move o lead para a lixeira: grava o snapshot primeiro e só então
    /// remove da tabela ativa, tudo na mesma transação. Se o snapshot
    /// falhar, o lead fica intacto.
    pub async fn soft_delete(&self, snap: &DeletedLead) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        Self::insert_snapshot(&mut tx, snap).await?;

        sqlx::query("DELETE FROM leads WHERE id = $1 AND user_id = $2")
            .bind(snap.original_lead_id)
            .bind(snap.user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Variante em lote: todos os snapshots, depois uma única remoção.
    /// Mesma ordem e mesmo contrato de falha, na granularidade do lote.
    pub async fn soft_delete_many(&self, snaps: &[DeletedLead]) -> Result<(), AppError> {
        if snaps.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        for snap in snaps {
            Self::insert_snapshot(&mut tx, snap).await?;
        }

        let ids: Vec<Uuid> = snaps.iter().map(|s| s.original_lead_id).collect();
        let user_id = snaps[0].user_id;

        sqlx::query("DELETE FROM leads WHERE id = ANY($1) AND user_id = $2")
            .bind(&ids)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<DeletedLead>, AppError> {
        let entries = sqlx::query_as::<_, DeletedLead>(
            "SELECT * FROM deleted_leads WHERE user_id = $1 ORDER BY deleted_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<DeletedLead>, AppError> {
        let entry = sqlx::query_as::<_, DeletedLead>(
            "SELECT * FROM deleted_leads WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Restauração: recria o lead a partir do snapshot e apaga a entrada da
    /// lixeira, na mesma transação.
    pub async fn restore(&self, entry_id: Uuid, lead: &Lead) -> Result<Lead, AppError> {
        let mut tx = self.pool.begin().await?;

        let restored = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (
                id, user_id, name, cpf, phone, email, status, amount, product,
                employee, payment_period, bank, notes, created_at, inserted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(lead.id)
        .bind(lead.user_id)
        .bind(&lead.name)
        .bind(&lead.cpf)
        .bind(&lead.phone)
        .bind(&lead.email)
        .bind(lead.status)
        .bind(lead.amount)
        .bind(&lead.product)
        .bind(&lead.employee)
        .bind(lead.payment_period)
        .bind(&lead.bank)
        .bind(&lead.notes)
        .bind(lead.created_at)
        .bind(lead.inserted_at)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM deleted_leads WHERE id = $1")
            .bind(entry_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(restored)
    }
}
