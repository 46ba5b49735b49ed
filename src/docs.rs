// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Leads ---
        handlers::leads::create_lead,
        handlers::leads::list_leads,
        handlers::leads::get_lead,
        handlers::leads::update_lead,
        handlers::leads::change_lead_status,
        handlers::leads::delete_lead,
        handlers::leads::batch_delete_leads,
        handlers::leads::replace_lead_tags,
        handlers::leads::list_lead_tags,

        // --- Comissões ---
        handlers::commissions::list_commissions,
        handlers::commissions::get_totals,
        handlers::commissions::update_commission_status,

        // --- Lixeira ---
        handlers::trash::list_trash,
        handlers::trash::restore_lead,

        // --- Tags ---
        handlers::tags::create_tag,
        handlers::tags::list_tags,
    ),
    components(
        schemas(
            // --- Leads ---
            models::lead::LeadStatus,
            models::lead::Lead,
            handlers::leads::CreateLeadPayload,
            handlers::leads::UpdateLeadPayload,
            handlers::leads::ChangeStatusPayload,
            handlers::leads::BatchDeletePayload,
            handlers::leads::ReplaceTagsPayload,
            services::lead_status::StatusChangeOutcome,

            // --- Comissões ---
            models::commission::CommissionStatus,
            models::commission::Commission,
            models::commission::CommissionTotals,
            models::rates::RateKind,
            models::rates::TierKind,
            models::rates::Rate,
            models::rates::CommissionRateRow,
            models::rates::CommissionTierRow,
            handlers::commissions::UpdateCommissionStatusPayload,

            // --- Lixeira ---
            models::trash::DeletedLead,

            // --- Tags ---
            models::tag::Tag,
            models::tag::LeadTagAssignment,
            handlers::tags::CreateTagPayload,

            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário"),
        (name = "Leads", description = "Funil de Leads e Máquina de Estados"),
        (name = "Commissions", description = "Comissões e Totais"),
        (name = "Trash", description = "Lixeira (exclusão suave, 30 dias)"),
        (name = "Tags", description = "Tags e Vínculos de Leads")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
