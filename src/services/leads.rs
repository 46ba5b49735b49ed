// src/services/leads.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, money},
    db::{lead_repo::LeadPatch, LeadRepository},
    models::lead::Lead,
};

/// CRUD fino de leads. O valor da venda chega do formulário no formato de
/// exibição ("R$ 1.234,56") e é normalizado aqui, antes de qualquer
/// persistência ou cálculo.
#[derive(Clone)]
pub struct LeadService {
    lead_repo: LeadRepository,
}

impl LeadService {
    pub fn new(lead_repo: LeadRepository) -> Self {
        Self { lead_repo }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        name: &str,
        cpf: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        amount_display: Option<&str>,
        product: Option<&str>,
        employee: Option<&str>,
        payment_period: Option<i32>,
        bank: Option<&str>,
        notes: Option<&str>,
        created_at: Option<NaiveDate>,
    ) -> Result<Lead, AppError> {
        let amount = normalize_amount(amount_display)?;

        self.lead_repo
            .create(
                user_id,
                name,
                cpf,
                phone,
                email,
                amount,
                product,
                employee,
                payment_period,
                bank,
                notes,
                created_at,
            )
            .await
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Lead>, AppError> {
        self.lead_repo.list_by_user(user_id).await
    }

    pub async fn get(&self, lead_id: Uuid, user_id: Uuid) -> Result<Lead, AppError> {
        self.lead_repo
            .find_by_id(lead_id, user_id)
            .await?
            .ok_or(AppError::LeadNotFound)
    }

    pub async fn update(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
        mut patch: LeadPatch,
        amount_display: Option<&str>,
    ) -> Result<Lead, AppError> {
        patch.amount = normalize_amount(amount_display)?;
        self.lead_repo.update_fields(lead_id, user_id, &patch).await
    }
}

/// Converte o valor de exibição para `Decimal`. Ausente ou em branco vira
/// `None`; presente mas impossível de normalizar é erro de validação.
fn normalize_amount(raw: Option<&str>) -> Result<Option<Decimal>, AppError> {
    match raw {
        None => Ok(None),
        Some(s) => {
            if s.chars().any(|c| c.is_ascii_digit()) {
                money::parse_amount(s).map(Some).ok_or(AppError::InvalidLeadAmount)
            } else {
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn valor_de_exibicao_e_normalizado() {
        let amount = normalize_amount(Some("R$ 1.234,56")).unwrap();
        assert_eq!(amount, Some(Decimal::from_str("1234.56").unwrap()));
    }

    #[test]
    fn valor_em_branco_vira_none() {
        assert_eq!(normalize_amount(None).unwrap(), None);
        assert_eq!(normalize_amount(Some("")).unwrap(), None);
        assert_eq!(normalize_amount(Some("R$ ")).unwrap(), None);
    }

    #[test]
    fn valor_com_digitos_mas_invalido_e_erro() {
        assert!(matches!(
            normalize_amount(Some("1,2,3")),
            Err(AppError::InvalidLeadAmount)
        ));
    }
}
