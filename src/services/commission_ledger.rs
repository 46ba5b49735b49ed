// src/services/commission_ledger.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{commission_repo::StatusTotalRow, CommissionRepository, RateRepository},
    models::{
        commission::{Commission, CommissionBucket, CommissionStatus, CommissionTotals},
        lead::Lead,
    },
    services::commission_resolver,
};

/// Sentinela gravada quando o lead não tem funcionário atribuído.
pub const EMPLOYEE_NOT_INFORMED: &str = "Não informado";

/// Livro-razão de comissões: uma linha por (lead, usuário), criada uma única
/// vez e nunca apagada automaticamente.
#[derive(Clone)]
pub struct CommissionLedger {
    commission_repo: CommissionRepository,
    rate_repo: RateRepository,
}

impl CommissionLedger {
    pub fn new(commission_repo: CommissionRepository, rate_repo: RateRepository) -> Self {
        Self { commission_repo, rate_repo }
    }

    /// Consulta pura de existência, usável de qualquer lugar que precise do
    /// flag "já tem comissão" (nada de cachear isto em estado de tela).
    pub async fn get_existing(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Commission>, AppError> {
        self.commission_repo.get_existing(lead_id, user_id).await
    }

    /// Resolve a taxa no catálogo do produto e grava a comissão do lead.
    /// Quem garante "no máximo uma por lead" é o chamador (a máquina de
    /// estados consulta `get_existing` antes); o índice único no banco segura
    /// o caso de corrida devolvendo a linha já existente.
    pub async fn create_for_lead(&self, lead: &Lead) -> Result<Commission, AppError> {
        let amount = lead.amount.ok_or(AppError::InvalidLeadAmount)?;
        let product = lead.product.as_deref().ok_or(AppError::MissingProduct)?;

        let catalog = self.rate_repo.load_catalog(product).await?;
        let resolved = commission_resolver::resolve(&catalog, amount, lead.payment_period);

        let employee = employee_or_default(lead.employee.as_deref());

        self.commission_repo
            .create(
                lead.id,
                lead.user_id,
                &lead.name,
                product,
                employee,
                amount,
                resolved.commission_value,
                resolved.percentage,
                lead.payment_period,
            )
            .await
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Commission>, AppError> {
        self.commission_repo.list_by_user(user_id).await
    }

    /// Muda o status da comissão. Por contrato isto é independente do status
    /// do lead de origem.
    pub async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        status: CommissionStatus,
    ) -> Result<Commission, AppError> {
        self.commission_repo.update_status(id, user_id, status).await
    }

    /// Totais por bucket para a página de comissões. 'approved' e 'paid'
    /// legados somam junto com 'completed'.
    pub async fn totals(&self, user_id: Uuid) -> Result<CommissionTotals, AppError> {
        let rows = self.commission_repo.totals_by_status(user_id).await?;
        Ok(fold_totals(&rows))
    }
}

fn employee_or_default(employee: Option<&str>) -> &str {
    match employee {
        Some(e) if !e.trim().is_empty() => e,
        _ => EMPLOYEE_NOT_INFORMED,
    }
}

fn fold_totals(rows: &[StatusTotalRow]) -> CommissionTotals {
    let mut totals = CommissionTotals::default();
    for row in rows {
        match row.status.bucket() {
            CommissionBucket::InProgress => totals.in_progress += row.total,
            CommissionBucket::Pending => totals.pending += row.total,
            CommissionBucket::Completed => totals.completed += row.total,
            CommissionBucket::Cancelled => totals.cancelled += row.total,
        }
        totals.total_count += row.count;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(status: CommissionStatus, count: i64, total: &str) -> StatusTotalRow {
        StatusTotalRow { status, count, total: dec(total) }
    }

    #[test]
    fn funcionario_em_branco_vira_sentinela() {
        assert_eq!(employee_or_default(None), EMPLOYEE_NOT_INFORMED);
        assert_eq!(employee_or_default(Some("")), EMPLOYEE_NOT_INFORMED);
        assert_eq!(employee_or_default(Some("   ")), EMPLOYEE_NOT_INFORMED);
        assert_eq!(employee_or_default(Some("João")), "João");
    }

    #[test]
    fn totais_agregam_status_legados_no_bucket_completed() {
        let rows = vec![
            row(CommissionStatus::Completed, 1, "100.00"),
            row(CommissionStatus::Approved, 2, "250.00"),
            row(CommissionStatus::Paid, 1, "50.00"),
            row(CommissionStatus::Pending, 1, "75.00"),
        ];

        let totals = fold_totals(&rows);
        assert_eq!(totals.completed, dec("400.00"));
        assert_eq!(totals.pending, dec("75.00"));
        assert_eq!(totals.in_progress, Decimal::ZERO);
        assert_eq!(totals.cancelled, Decimal::ZERO);
        assert_eq!(totals.total_count, 5);
    }

    #[test]
    fn totais_de_usuario_sem_comissoes_sao_zero() {
        let totals = fold_totals(&[]);
        assert_eq!(totals.completed, Decimal::ZERO);
        assert_eq!(totals.total_count, 0);
    }
}
