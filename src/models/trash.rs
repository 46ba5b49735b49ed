// src/models/trash.rs

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::lead::{Lead, LeadStatus};

/// Quantos dias um lead fica na lixeira antes do expurgo externo.
pub const TRASH_RETENTION_DAYS: i64 = 30;

/// Cópia congelada de um lead no momento da exclusão. O expurgo após
/// `expires_at` é feito por um processo externo; aqui só gravamos a data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedLead {
    pub id: Uuid,
    pub original_lead_id: Uuid,
    pub user_id: Uuid,

    pub name: String,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: LeadStatus,
    pub amount: Option<Decimal>,
    pub product: Option<String>,
    pub employee: Option<String>,
    pub payment_period: Option<i32>,
    pub bank: Option<String>,
    pub notes: Option<String>,

    // As duas datas do lead original, preservadas como estavam
    #[schema(value_type = String, format = Date, example = "2024-03-10")]
    pub created_at: NaiveDate,
    pub inserted_at: DateTime<Utc>,

    pub deleted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl DeletedLead {
    /// Congela o lead na lixeira. `expires_at` é sempre exatamente
    /// `deleted_at + 30 dias`.
    pub fn snapshot(lead: &Lead, deleted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_lead_id: lead.id,
            user_id: lead.user_id,
            name: lead.name.clone(),
            cpf: lead.cpf.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            status: lead.status,
            amount: lead.amount,
            product: lead.product.clone(),
            employee: lead.employee.clone(),
            payment_period: lead.payment_period,
            bank: lead.bank.clone(),
            notes: lead.notes.clone(),
            created_at: lead.created_at,
            inserted_at: lead.inserted_at,
            deleted_at,
            expires_at: deleted_at + Duration::days(TRASH_RETENTION_DAYS),
        }
    }

    /// Reconstrói o lead a partir do snapshot, para restauração.
    pub fn to_lead(&self, restored_at: DateTime<Utc>) -> Lead {
        Lead {
            id: self.original_lead_id,
            user_id: self.user_id,
            name: self.name.clone(),
            cpf: self.cpf.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            status: self.status,
            amount: self.amount,
            product: self.product.clone(),
            employee: self.employee.clone(),
            payment_period: self.payment_period,
            bank: self.bank.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at,
            inserted_at: self.inserted_at,
            updated_at: restored_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn lead_exemplo() -> Lead {
        Lead {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Maria da Silva".to_string(),
            cpf: Some("12345678900".to_string()),
            phone: Some("11999990000".to_string()),
            email: Some("maria@email.com".to_string()),
            status: LeadStatus::Negociando,
            amount: Some(Decimal::from_str("15000.00").unwrap()),
            product: Some("consignado_inss".to_string()),
            employee: Some("João Vendedor".to_string()),
            payment_period: Some(84),
            bank: Some("Banco do Brasil".to_string()),
            notes: Some("ligar depois das 14h".to_string()),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            inserted_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn snapshot_preserva_todos_os_campos() {
        let lead = lead_exemplo();
        let agora = Utc::now();
        let snap = DeletedLead::snapshot(&lead, agora);

        assert_eq!(snap.original_lead_id, lead.id);
        assert_eq!(snap.user_id, lead.user_id);
        assert_eq!(snap.name, lead.name);
        assert_eq!(snap.cpf, lead.cpf);
        assert_eq!(snap.phone, lead.phone);
        assert_eq!(snap.email, lead.email);
        assert_eq!(snap.status, lead.status);
        assert_eq!(snap.amount, lead.amount);
        assert_eq!(snap.product, lead.product);
        assert_eq!(snap.employee, lead.employee);
        assert_eq!(snap.payment_period, lead.payment_period);
        assert_eq!(snap.bank, lead.bank);
        assert_eq!(snap.notes, lead.notes);
        // Data de negócio e data de sistema, as duas intactas
        assert_eq!(snap.created_at, lead.created_at);
        assert_eq!(snap.inserted_at, lead.inserted_at);
    }

    #[test]
    fn expiracao_e_exatamente_trinta_dias() {
        let lead = lead_exemplo();
        let agora = Utc::now();
        let snap = DeletedLead::snapshot(&lead, agora);

        assert_eq!(snap.deleted_at, agora);
        assert_eq!(snap.expires_at, agora + Duration::days(30));
    }

    #[test]
    fn restauracao_devolve_o_lead_original() {
        let lead = lead_exemplo();
        let snap = DeletedLead::snapshot(&lead, Utc::now());
        let restaurado = snap.to_lead(Utc::now());

        assert_eq!(restaurado.id, lead.id);
        assert_eq!(restaurado.status, lead.status);
        assert_eq!(restaurado.amount, lead.amount);
        assert_eq!(restaurado.created_at, lead.created_at);
        assert_eq!(restaurado.inserted_at, lead.inserted_at);
    }
}
