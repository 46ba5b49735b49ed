// src/services/lead_status.rs

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::{
        commission::Commission,
        lead::{Lead, LeadStatus},
    },
    services::commission_ledger::CommissionLedger,
};

/// Resultado de um pedido de mudança de status.
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum StatusChangeOutcome {
    /// Status gravado. `commission` vem preenchida apenas quando esta chamada
    /// criou a comissão.
    #[serde(rename_all = "camelCase")]
    Applied {
        lead: Lead,
        commission: Option<Commission>,
    },

    /// Status gravado, mas a comissão já existia — aviso informativo de
    /// "comissão já gerada" (apenas para 'concluido').
    #[serde(rename_all = "camelCase")]
    AlreadyCommissioned { lead: Lead, commission: Commission },

    /// Nada foi gravado: o lead está em status de venda fechada com comissão
    /// registrada, e reclassificar exige confirmação explícita do agente.
    #[serde(rename_all = "camelCase")]
    RequiresConfirmation {
        current: LeadStatus,
        pending: LeadStatus,
    },
}

/// Decisão pura da máquina de estados, separada da orquestração assíncrona
/// para poder ser testada à parte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPlan {
    RequireConfirmation,
    CreateCommission,
    NoteExistingCommission,
    ApplyOnly,
}

/// Aplica as guardas do contrato de transição, na ordem:
///
/// 1. proteção de comissão: sair de um status de venda fechada que já tem
///    comissão registrada exige confirmação explícita;
/// 2. gatilho de comissão: entrar em venda fechada sem comissão cria uma;
///    com comissão existente, 'concluido' vira aviso informativo e
///    'convertido' aplica em silêncio;
/// 3. qualquer outra transição aplica direto, sem efeito colateral.
pub fn plan_transition(
    current: LeadStatus,
    requested: LeadStatus,
    has_commission: bool,
    confirmed: bool,
) -> TransitionPlan {
    if current.is_won() && has_commission && requested != current && !confirmed {
        return TransitionPlan::RequireConfirmation;
    }

    if requested.is_won() {
        if !has_commission {
            return TransitionPlan::CreateCommission;
        }
        if requested == LeadStatus::Concluido {
            return TransitionPlan::NoteExistingCommission;
        }
        return TransitionPlan::ApplyOnly;
    }

    TransitionPlan::ApplyOnly
}

#[derive(Clone)]
pub struct LeadStatusService {
    lead_repo: LeadRepository,
    ledger: CommissionLedger,
}

impl LeadStatusService {
    pub fn new(lead_repo: LeadRepository, ledger: CommissionLedger) -> Self {
        Self { lead_repo, ledger }
    }

    pub async fn request_status_change(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
        requested: LeadStatus,
        confirmed: bool,
    ) -> Result<StatusChangeOutcome, AppError> {
        let lead = self
            .lead_repo
            .find_by_id(lead_id, user_id)
            .await?
            .ok_or(AppError::LeadNotFound)?;

        let existing = self.ledger.get_existing(lead_id, user_id).await?;

        match plan_transition(lead.status, requested, existing.is_some(), confirmed) {
            TransitionPlan::RequireConfirmation => Ok(StatusChangeOutcome::RequiresConfirmation {
                current: lead.status,
                pending: requested,
            }),

            TransitionPlan::CreateCommission => {
                // Valida antes de persistir qualquer coisa.
                if lead.amount.is_none() {
                    return Err(AppError::InvalidLeadAmount);
                }
                if lead.product.as_deref().is_none_or(|p| p.trim().is_empty()) {
                    return Err(AppError::MissingProduct);
                }

                // A resolução vem antes da escrita do status, mas uma falha
                // aqui não impede a escrita: o status segue em frente e a
                // comissão fica para o agente regenerar.
                let commission = match self.ledger.create_for_lead(&lead).await {
                    Ok(c) => Some(c),
                    Err(e) => {
                        tracing::warn!(
                            "Falha ao gerar comissão do lead {}; o status será gravado mesmo assim: {}",
                            lead.id,
                            e
                        );
                        None
                    }
                };

                let updated = self.lead_repo.update_status(lead_id, user_id, requested).await?;
                Ok(StatusChangeOutcome::Applied { lead: updated, commission })
            }

            TransitionPlan::NoteExistingCommission => {
                let updated = self.lead_repo.update_status(lead_id, user_id, requested).await?;
                // O plano só escolhe este braço quando a comissão existe.
                let commission = existing.ok_or(AppError::CommissionNotFound)?;
                Ok(StatusChangeOutcome::AlreadyCommissioned { lead: updated, commission })
            }

            TransitionPlan::ApplyOnly => {
                let updated = self.lead_repo.update_status(lead_id, user_id, requested).await?;
                Ok(StatusChangeOutcome::Applied { lead: updated, commission: None })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LeadStatus::*;

    #[test]
    fn reclassificar_venda_com_comissao_exige_confirmacao() {
        let plan = plan_transition(Concluido, Cancelado, true, false);
        assert_eq!(plan, TransitionPlan::RequireConfirmation);
    }

    #[test]
    fn confirmacao_explicita_libera_a_reclassificacao() {
        let plan = plan_transition(Concluido, Cancelado, true, true);
        assert_eq!(plan, TransitionPlan::ApplyOnly);
    }

    #[test]
    fn repetir_o_mesmo_status_nao_pede_confirmacao() {
        let plan = plan_transition(Concluido, Concluido, true, false);
        assert_eq!(plan, TransitionPlan::NoteExistingCommission);
    }

    #[test]
    fn venda_fechada_sem_comissao_dispara_criacao() {
        assert_eq!(
            plan_transition(Negociando, Concluido, false, false),
            TransitionPlan::CreateCommission
        );
        assert_eq!(
            plan_transition(Qualificado, Convertido, false, false),
            TransitionPlan::CreateCommission
        );
    }

    #[test]
    fn segunda_entrada_em_venda_fechada_nao_duplica() {
        // 'concluido' avisa que a comissão já foi gerada
        assert_eq!(
            plan_transition(Negociando, Concluido, true, false),
            TransitionPlan::NoteExistingCommission
        );
        // 'convertido' aplica em silêncio
        assert_eq!(
            plan_transition(Negociando, Convertido, true, false),
            TransitionPlan::ApplyOnly
        );
    }

    #[test]
    fn trocar_entre_os_dois_status_de_venda_exige_confirmacao() {
        assert_eq!(
            plan_transition(Convertido, Concluido, true, false),
            TransitionPlan::RequireConfirmation
        );
    }

    #[test]
    fn sair_de_venda_fechada_sem_comissao_nao_pede_confirmacao() {
        assert_eq!(
            plan_transition(Concluido, Novo, false, false),
            TransitionPlan::ApplyOnly
        );
    }

    #[test]
    fn transicoes_comuns_aplicam_direto() {
        assert_eq!(plan_transition(Novo, Contatado, false, false), TransitionPlan::ApplyOnly);
        assert_eq!(
            plan_transition(Contatado, Qualificado, false, false),
            TransitionPlan::ApplyOnly
        );
        assert_eq!(
            plan_transition(Negociando, Perdido, false, false),
            TransitionPlan::ApplyOnly
        );
    }

    #[test]
    fn lead_transitorio_com_comissao_nao_bloqueia_transicao() {
        // A guarda 1 só vale saindo de venda fechada; um lead que voltou para
        // o funil muda de status livremente (a comissão fica desacoplada).
        assert_eq!(
            plan_transition(Negociando, Pendente, true, false),
            TransitionPlan::ApplyOnly
        );
    }
}
