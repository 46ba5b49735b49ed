// src/models/commission.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

// 'Approved' e 'Paid' são status legados que ainda existem em registros
// antigos. Nos totais eles contam junto com 'Completed'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "commission_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    InProgress,
    Pending,
    Completed,
    Approved,
    Paid,
    Cancelled,
}

// Bucket de agregação para relatórios. É aqui que o aliasing legado acontece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommissionBucket {
    InProgress,
    Pending,
    Completed,
    Cancelled,
}

impl CommissionStatus {
    pub fn bucket(&self) -> CommissionBucket {
        match self {
            CommissionStatus::InProgress => CommissionBucket::InProgress,
            CommissionStatus::Pending => CommissionBucket::Pending,
            CommissionStatus::Completed | CommissionStatus::Approved | CommissionStatus::Paid => {
                CommissionBucket::Completed
            }
            CommissionStatus::Cancelled => CommissionBucket::Cancelled,
        }
    }
}

// --- COMISSÃO ---

// Uma linha por (lead, usuário), no máximo. Depois de criada, o status da
// comissão vive desacoplado do status do lead que a originou.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "Maria da Silva")]
    pub client_name: String,
    #[schema(example = "consignado_inss")]
    pub product: String,
    #[schema(example = "João Vendedor")]
    pub employee: String,

    // Valor da venda no momento da conversão
    #[schema(example = "15000.00")]
    pub amount: Decimal,
    // Valor resolvido da comissão
    #[schema(example = "750.00")]
    pub commission_value: Decimal,
    // Percentual efetivo, em [0, 100]. Pode ser sintético quando a taxa é fixa.
    #[schema(example = "5.00")]
    pub percentage: Decimal,

    pub status: CommissionStatus,
    pub payment_period: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- TOTAIS (página de comissões) ---

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTotals {
    pub in_progress: Decimal,
    pub pending: Decimal,
    pub completed: Decimal,
    pub cancelled: Decimal,
    pub total_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_legados_contam_como_completed() {
        assert_eq!(CommissionStatus::Completed.bucket(), CommissionBucket::Completed);
        assert_eq!(CommissionStatus::Approved.bucket(), CommissionBucket::Completed);
        assert_eq!(CommissionStatus::Paid.bucket(), CommissionBucket::Completed);
    }

    #[test]
    fn demais_status_tem_bucket_proprio() {
        assert_eq!(CommissionStatus::InProgress.bucket(), CommissionBucket::InProgress);
        assert_eq!(CommissionStatus::Pending.bucket(), CommissionBucket::Pending);
        assert_eq!(CommissionStatus::Cancelled.bucket(), CommissionBucket::Cancelled);
    }
}
