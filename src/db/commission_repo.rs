// src/db/commission_repo.rs

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::commission::{Commission, CommissionStatus},
};

/// Linha agregada de SUM/COUNT por status. O aliasing de status legados para
/// buckets acontece no serviço, não no SQL.
#[derive(Debug, FromRow)]
pub struct StatusTotalRow {
    pub status: CommissionStatus,
    pub count: i64,
    pub total: Decimal,
}

#[derive(Clone)]
pub struct CommissionRepository {
    pool: PgPool,
}

impl CommissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Consulta pura de existência: no máximo uma linha por (lead, usuário).
    pub async fn get_existing(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Commission>, AppError> {
        let commission = sqlx::query_as::<_, Commission>(
            "SELECT * FROM commissions WHERE lead_id = $1 AND user_id = $2",
        )
        .bind(lead_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(commission)
    }

    /// Insere a comissão. O índice único (lead_id, user_id) segura corridas:
    /// se outra chamada inseriu primeiro, devolvemos a linha existente em vez
    /// de falhar.
    pub async fn create(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
        client_name: &str,
        product: &str,
        employee: &str,
        amount: Decimal,
        commission_value: Decimal,
        percentage: Decimal,
        payment_period: Option<i32>,
    ) -> Result<Commission, AppError> {
        let inserted = sqlx::query_as::<_, Commission>(
            r#"
            INSERT INTO commissions (
                lead_id, user_id, client_name, product, employee,
                amount, commission_value, percentage, payment_period
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(lead_id)
        .bind(user_id)
        .bind(client_name)
        .bind(product)
        .bind(employee)
        .bind(amount)
        .bind(commission_value)
        .bind(percentage)
        .bind(payment_period)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(commission) => Ok(commission),
            Err(e) => {
                let is_duplicate = e
                    .as_database_error()
                    .is_some_and(|db_err| db_err.is_unique_violation());
                if is_duplicate {
                    tracing::warn!(
                        "Comissão duplicada para o lead {} detectada no banco; devolvendo a existente.",
                        lead_id
                    );
                    return self
                        .get_existing(lead_id, user_id)
                        .await?
                        .ok_or(AppError::CommissionNotFound);
                }
                Err(AppError::DatabaseError(e))
            }
        }
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Commission>, AppError> {
        let commissions = sqlx::query_as::<_, Commission>(
            "SELECT * FROM commissions WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(commissions)
    }

    /// Atualiza o status da comissão. Desacoplado do lead de origem por
    /// contrato: mudar o lead de novo não mexe aqui.
    pub async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        status: CommissionStatus,
    ) -> Result<Commission, AppError> {
        let commission = sqlx::query_as::<_, Commission>(
            r#"
            UPDATE commissions SET status = $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::CommissionNotFound)?;

        Ok(commission)
    }

    pub async fn totals_by_status(&self, user_id: Uuid) -> Result<Vec<StatusTotalRow>, AppError> {
        let rows = sqlx::query_as::<_, StatusTotalRow>(
            r#"
            SELECT
                status,
                COUNT(*) AS count,
                COALESCE(SUM(commission_value), 0) AS total
            FROM commissions
            WHERE user_id = $1
            GROUP BY status
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
