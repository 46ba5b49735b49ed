// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CommissionRepository, LeadRepository, RateRepository, TagRepository, TrashRepository,
        UserRepository,
    },
    services::{
        auth::AuthService, commission_ledger::CommissionLedger, lead_status::LeadStatusService,
        leads::LeadService, tags::TagService, trash::TrashService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub lead_service: LeadService,
    pub lead_status_service: LeadStatusService,
    pub commission_ledger: CommissionLedger,
    pub trash_service: TrashService,
    pub tag_service: TagService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let lead_repo = LeadRepository::new(db_pool.clone());
        let rate_repo = RateRepository::new(db_pool.clone());
        let commission_repo = CommissionRepository::new(db_pool.clone());
        let trash_repo = TrashRepository::new(db_pool.clone());
        let tag_repo = TagRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret);
        let commission_ledger = CommissionLedger::new(commission_repo, rate_repo);
        let lead_status_service =
            LeadStatusService::new(lead_repo.clone(), commission_ledger.clone());
        let lead_service = LeadService::new(lead_repo.clone());
        let trash_service = TrashService::new(lead_repo, trash_repo);
        let tag_service = TagService::new(tag_repo);

        Ok(Self {
            db_pool,
            auth_service,
            lead_service,
            lead_status_service,
            commission_ledger,
            trash_service,
            tag_service,
        })
    }
}
