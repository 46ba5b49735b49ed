// src/services/tags.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::TagRepository,
    models::tag::{LeadTagAssignment, Tag},
};

#[derive(Clone)]
pub struct TagService {
    tag_repo: TagRepository,
}

impl TagService {
    pub fn new(tag_repo: TagRepository) -> Self {
        Self { tag_repo }
    }

    pub async fn create_tag(
        &self,
        user_id: Uuid,
        name: &str,
        color: Option<&str>,
    ) -> Result<Tag, AppError> {
        self.tag_repo.create_tag(user_id, name, color).await
    }

    pub async fn list_tags(&self, user_id: Uuid) -> Result<Vec<Tag>, AppError> {
        self.tag_repo.list_tags(user_id).await
    }

    /// Substitui o conjunto de tags do lead pelo conjunto recebido.
    /// Repetir a mesma chamada deixa exatamente o mesmo conjunto, sem
    /// duplicatas nem resíduo. Conjunto vazio apenas limpa.
    pub async fn replace_tags(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<(), AppError> {
        let deduped = dedup_preserving_order(tag_ids);
        self.tag_repo.replace_assignments(lead_id, user_id, &deduped).await
    }

    pub async fn list_for_lead(
        &self,
        lead_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<LeadTagAssignment>, AppError> {
        self.tag_repo.list_assignments(lead_id, user_id).await
    }
}

/// Remove ids repetidos mantendo a primeira ocorrência de cada um.
fn dedup_preserving_order(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_repetidos_sao_removidos_mantendo_a_ordem() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let deduped = dedup_preserving_order(&[a, b, a, c, b]);
        assert_eq!(deduped, vec![a, b, c]);
    }

    #[test]
    fn conjunto_vazio_continua_vazio() {
        assert!(dedup_preserving_order(&[]).is_empty());
    }
}
