// src/db/rate_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::rates::{CommissionRateRow, CommissionTierRow, ProductRateCatalog},
};

// Catálogo de taxas: somente leitura do ponto de vista do motor de comissões.
#[derive(Clone)]
pub struct RateRepository {
    pool: PgPool,
}

impl RateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Carrega e monta o catálogo de um produto. A ordem de inserção
    /// (created_at, id) é preservada: é ela que decide qual faixa vence
    /// quando há sobreposição.
    pub async fn load_catalog(&self, product: &str) -> Result<ProductRateCatalog, AppError> {
        let rates = sqlx::query_as::<_, CommissionRateRow>(
            r#"
            SELECT * FROM commission_rates
            WHERE product = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(product)
        .fetch_all(&self.pool)
        .await?;

        let tiers = sqlx::query_as::<_, CommissionTierRow>(
            r#"
            SELECT * FROM commission_tiers
            WHERE product = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(product)
        .fetch_all(&self.pool)
        .await?;

        Ok(ProductRateCatalog::from_rows(&rates, &tiers))
    }
}
