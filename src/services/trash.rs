// src/services/trash.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{LeadRepository, TrashRepository},
    models::{lead::Lead, trash::DeletedLead},
};

/// Lixeira de leads: exclusão suave com validade de 30 dias. O expurgo dos
/// snapshots vencidos é de um processo agendado externo — este serviço apenas
/// grava `expires_at`.
#[derive(Clone)]
pub struct TrashService {
    lead_repo: LeadRepository,
    trash_repo: TrashRepository,
}

impl TrashService {
    pub fn new(lead_repo: LeadRepository, trash_repo: TrashRepository) -> Self {
        Self { lead_repo, trash_repo }
    }

    /// Move um lead para a lixeira. O snapshot é gravado antes da remoção;
    /// se ele falhar, o lead continua ativo.
    pub async fn soft_delete(&self, lead_id: Uuid, user_id: Uuid) -> Result<DeletedLead, AppError> {
        let lead = self
            .lead_repo
            .find_by_id(lead_id, user_id)
            .await?
            .ok_or(AppError::LeadNotFound)?;

        let snap = DeletedLead::snapshot(&lead, Utc::now());
        self.trash_repo.soft_delete(&snap).await?;

        tracing::info!("Lead {} movido para a lixeira até {}.", lead_id, snap.expires_at);
        Ok(snap)
    }

    /// Variante em lote: um insert de snapshots seguido de uma remoção, todos
    /// com o mesmo instante de exclusão. Ids desconhecidos são ignorados.
    pub async fn soft_delete_many(
        &self,
        lead_ids: &[Uuid],
        user_id: Uuid,
    ) -> Result<Vec<DeletedLead>, AppError> {
        let deleted_at = Utc::now();
        let mut snaps = Vec::with_capacity(lead_ids.len());

        for &lead_id in lead_ids {
            if let Some(lead) = self.lead_repo.find_by_id(lead_id, user_id).await? {
                snaps.push(DeletedLead::snapshot(&lead, deleted_at));
            }
        }

        self.trash_repo.soft_delete_many(&snaps).await?;

        tracing::info!("{} leads movidos para a lixeira.", snaps.len());
        Ok(snaps)
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<DeletedLead>, AppError> {
        self.trash_repo.list_by_user(user_id).await
    }

    /// Tira o lead da lixeira e o devolve ao conjunto ativo, com os campos
    /// originais intactos (inclusive as duas datas).
    pub async fn restore(&self, entry_id: Uuid, user_id: Uuid) -> Result<Lead, AppError> {
        let entry = self
            .trash_repo
            .find_by_id(entry_id, user_id)
            .await?
            .ok_or(AppError::TrashEntryNotFound)?;

        let lead = entry.to_lead(Utc::now());
        let restored = self.trash_repo.restore(entry.id, &lead).await?;

        tracing::info!("Lead {} restaurado da lixeira.", restored.id);
        Ok(restored)
    }
}
