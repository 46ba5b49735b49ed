// src/models/lead.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

// Mapeia o CREATE TYPE lead_status do banco.
// Os nomes seguem o funil como os agentes o conhecem, em português.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "lead_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Novo,
    Contatado,
    Qualificado,
    Pendente,
    Negociando,
    Concluido,
    Convertido,
    Perdido,
    Cancelado,
}

impl LeadStatus {
    /// Status terminais de venda fechada ('perdido' e 'cancelado' são os
    /// terminais de perda). Os dois são equivalentes para o motor de comissões.
    pub fn is_won(&self) -> bool {
        matches!(self, LeadStatus::Concluido | LeadStatus::Convertido)
    }
}

// --- LEAD ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "Maria da Silva")]
    pub name: String,
    #[schema(example = "12345678900")]
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,

    pub status: LeadStatus,

    // Valor da venda. Obrigatório antes de qualquer transição que gere comissão.
    #[schema(example = "15000.00")]
    pub amount: Option<Decimal>,

    #[schema(example = "consignado_inss")]
    pub product: Option<String>,

    // Funcionário responsável pela venda (texto livre, pode ficar em branco)
    pub employee: Option<String>,

    // Prazo de pagamento em meses
    #[schema(example = 84)]
    pub payment_period: Option<i32>,

    #[schema(example = "Banco do Brasil")]
    pub bank: Option<String>,

    pub notes: Option<String>,

    // Data de negócio (informada pelo agente) x data de sistema.
    // As duas são distintas e as duas são preservadas na lixeira.
    #[schema(value_type = String, format = Date, example = "2024-03-10")]
    pub created_at: NaiveDate,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
