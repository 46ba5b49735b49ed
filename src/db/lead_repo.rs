// src/db/lead_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::lead::{Lead, LeadStatus},
};

/// Campos editáveis de um lead. `None` mantém o valor atual no banco
/// (COALESCE), exceto nos campos que aceitam limpeza explícita via update
/// completo no serviço.
#[derive(Debug, Default)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub amount: Option<Decimal>,
    pub product: Option<String>,
    pub employee: Option<String>,
    pub payment_period: Option<i32>,
    pub bank: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        name: &str,
        cpf: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        amount: Option<Decimal>,
        product: Option<&str>,
        employee: Option<&str>,
        payment_period: Option<i32>,
        bank: Option<&str>,
        notes: Option<&str>,
        created_at: Option<NaiveDate>,
    ) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (
                user_id, name, cpf, phone, email, amount, product,
                employee, payment_period, bank, notes, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    COALESCE($12, CURRENT_DATE))
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(cpf)
        .bind(phone)
        .bind(email)
        .bind(amount)
        .bind(product)
        .bind(employee)
        .bind(payment_period)
        .bind(bank)
        .bind(notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(lead)
    }

    /// Leads ativos do usuário, mais recentes primeiro (data de sistema).
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Lead>, AppError> {
        let leads = sqlx::query_as::<_, Lead>(
            "SELECT * FROM leads WHERE user_id = $1 ORDER BY inserted_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    pub async fn find_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Option<Lead>, AppError> {
        let lead =
            sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(lead)
    }

    pub async fn update_fields(
        &self,
        id: Uuid,
        user_id: Uuid,
        patch: &LeadPatch,
    ) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            UPDATE leads SET
                name           = COALESCE($3, name),
                cpf            = COALESCE($4, cpf),
                phone          = COALESCE($5, phone),
                email          = COALESCE($6, email),
                amount         = COALESCE($7, amount),
                product        = COALESCE($8, product),
                employee       = COALESCE($9, employee),
                payment_period = COALESCE($10, payment_period),
                bank           = COALESCE($11, bank),
                notes          = COALESCE($12, notes),
                created_at     = COALESCE($13, created_at),
                updated_at     = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&patch.name)
        .bind(&patch.cpf)
        .bind(&patch.phone)
        .bind(&patch.email)
        .bind(patch.amount)
        .bind(&patch.product)
        .bind(&patch.employee)
        .bind(patch.payment_period)
        .bind(&patch.bank)
        .bind(&patch.notes)
        .bind(patch.created_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::LeadNotFound)?;

        Ok(lead)
    }

    /// Persiste apenas o novo status. A máquina de estados decide quando isto
    /// pode ser chamado; aqui é só a escrita.
    pub async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        status: LeadStatus,
    ) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            UPDATE leads SET status = $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::LeadNotFound)?;

        Ok(lead)
    }
}
