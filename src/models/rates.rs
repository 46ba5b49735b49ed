// src/models/rates.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS (mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "rate_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RateKind {
    Fixed,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tier_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Period,
    Value,
}

// --- DOMÍNIO ---

/// Taxa de comissão como união discriminada de verdade, em vez de um registro
/// solto com campos opcionais lidos por string. O resolver só enxerga isto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Rate {
    Fixed(Decimal),
    Percentage(Decimal),
}

/// Faixa por prazo de pagamento (meses). `max_period = None` é faixa aberta.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTier {
    pub min_period: i32,
    pub max_period: Option<i32>,
    pub rate: Rate,
}

impl PeriodTier {
    pub fn matches(&self, payment_period: i32) -> bool {
        payment_period >= self.min_period
            && self.max_period.is_none_or(|max| payment_period <= max)
    }
}

/// Faixa por valor da venda. `max_amount = None` é faixa aberta.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTier {
    pub min_amount: Decimal,
    pub max_amount: Option<Decimal>,
    pub rate: Rate,
}

impl ValueTier {
    pub fn matches(&self, amount: Decimal) -> bool {
        amount >= self.min_amount && self.max_amount.is_none_or(|max| amount <= max)
    }
}

/// Catálogo de taxas de um produto, já na ordem de inserção. O catálogo é
/// somente leitura para o motor; quem invalida cache é problema de fora.
#[derive(Debug, Clone, Default)]
pub struct ProductRateCatalog {
    pub flat: Option<Rate>,
    pub period_tiers: Vec<PeriodTier>,
    pub value_tiers: Vec<ValueTier>,
}

// --- LINHAS DO BANCO ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRateRow {
    pub id: Uuid,
    pub product: String,
    pub kind: RateKind,
    pub fixed_value: Option<Decimal>,
    pub percentage: Option<Decimal>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl CommissionRateRow {
    /// Converte a linha para a união discriminada. `None` quando a linha está
    /// malformada (kind sem o valor correspondente).
    pub fn rate(&self) -> Option<Rate> {
        match self.kind {
            RateKind::Fixed => self.fixed_value.map(Rate::Fixed),
            RateKind::Percentage => self.percentage.map(Rate::Percentage),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTierRow {
    pub id: Uuid,
    pub product: String,
    pub tier_kind: TierKind,
    pub min_period: Option<i32>,
    pub max_period: Option<i32>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub kind: RateKind,
    pub fixed_value: Option<Decimal>,
    pub percentage: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl CommissionTierRow {
    pub fn rate(&self) -> Option<Rate> {
        match self.kind {
            RateKind::Fixed => self.fixed_value.map(Rate::Fixed),
            RateKind::Percentage => self.percentage.map(Rate::Percentage),
        }
    }
}

impl ProductRateCatalog {
    /// Monta o catálogo a partir das linhas do banco, preservando a ordem de
    /// inserção (é ela que desempata faixas sobrepostas). Linhas malformadas
    /// são puladas com aviso.
    pub fn from_rows(rates: &[CommissionRateRow], tiers: &[CommissionTierRow]) -> Self {
        let flat = rates.iter().filter(|r| r.active).find_map(|r| {
            let rate = r.rate();
            if rate.is_none() {
                tracing::warn!("Taxa fixa malformada ignorada: {}", r.id);
            }
            rate
        });

        let mut period_tiers = Vec::new();
        let mut value_tiers = Vec::new();

        for row in tiers {
            let Some(rate) = row.rate() else {
                tracing::warn!("Faixa de comissão malformada ignorada: {}", row.id);
                continue;
            };
            match row.tier_kind {
                TierKind::Period => {
                    let Some(min_period) = row.min_period else {
                        tracing::warn!("Faixa por prazo sem mínimo ignorada: {}", row.id);
                        continue;
                    };
                    period_tiers.push(PeriodTier {
                        min_period,
                        max_period: row.max_period,
                        rate,
                    });
                }
                TierKind::Value => {
                    let Some(min_amount) = row.min_amount else {
                        tracing::warn!("Faixa por valor sem mínimo ignorada: {}", row.id);
                        continue;
                    };
                    value_tiers.push(ValueTier {
                        min_amount,
                        max_amount: row.max_amount,
                        rate,
                    });
                }
            }
        }

        Self { flat, period_tiers, value_tiers }
    }
}
