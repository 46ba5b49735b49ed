// src/services/commission_resolver.rs

use rust_decimal::Decimal;

use crate::models::rates::{ProductRateCatalog, Rate};

// Fallback quando o produto não tem nenhuma configuração: 5%.
const DEFAULT_PERCENTAGE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Resultado da resolução: valor a pagar e percentual efetivo em [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCommission {
    pub commission_value: Decimal,
    pub percentage: Decimal,
}

/// Resolve a comissão de uma venda contra o catálogo do produto.
///
/// Ordem de precedência, sem mesclagem — a primeira regra que casar vence:
/// 1. taxa fixa ativa do produto;
/// 2. faixas por prazo (apenas se houver prazo informado);
/// 3. faixas por valor;
/// 4. fallback de 5%.
///
/// Dentro de cada lista de faixas vale a primeira que casar, na ordem de
/// inserção. Sobreposições não são validadas.
pub fn resolve(
    catalog: &ProductRateCatalog,
    amount: Decimal,
    payment_period: Option<i32>,
) -> ResolvedCommission {
    if let Some(rate) = catalog.flat {
        return apply_rate(rate, amount);
    }

    if let Some(period) = payment_period {
        if let Some(tier) = catalog.period_tiers.iter().find(|t| t.matches(period)) {
            return apply_rate(tier.rate, amount);
        }
    }

    if let Some(tier) = catalog.value_tiers.iter().find(|t| t.matches(amount)) {
        return apply_rate(tier.rate, amount);
    }

    apply_rate(Rate::Percentage(DEFAULT_PERCENTAGE), amount)
}

/// Aplica uma taxa a um valor de venda. Para taxa fixa o percentual informado
/// é sintético (valor / venda * 100), e zero quando a venda é zero.
fn apply_rate(rate: Rate, amount: Decimal) -> ResolvedCommission {
    match rate {
        Rate::Fixed(value) => {
            let percentage = if amount.is_zero() {
                Decimal::ZERO
            } else {
                value / amount * Decimal::ONE_HUNDRED
            };
            ResolvedCommission { commission_value: value, percentage }
        }
        Rate::Percentage(percentage) => ResolvedCommission {
            commission_value: amount * percentage / Decimal::ONE_HUNDRED,
            percentage,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rates::{PeriodTier, ValueTier};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn value_tier(min: &str, max: Option<&str>, rate: Rate) -> ValueTier {
        ValueTier {
            min_amount: dec(min),
            max_amount: max.map(dec),
            rate,
        }
    }

    fn period_tier(min: i32, max: Option<i32>, rate: Rate) -> PeriodTier {
        PeriodTier { min_period: min, max_period: max, rate }
    }

    #[test]
    fn taxa_fixa_do_produto_vence_as_faixas() {
        // Produto com taxa de 10% E uma faixa de 20% que também casaria
        let catalog = ProductRateCatalog {
            flat: Some(Rate::Percentage(dec("10"))),
            period_tiers: vec![],
            value_tiers: vec![value_tier("0", Some("1000"), Rate::Percentage(dec("20")))],
        };

        let r = resolve(&catalog, dec("500"), None);
        assert_eq!(r.percentage, dec("10"));
        assert_eq!(r.commission_value, dec("50"));
    }

    #[test]
    fn faixa_por_prazo_vence_faixa_por_valor() {
        let catalog = ProductRateCatalog {
            flat: None,
            period_tiers: vec![period_tier(6, Some(24), Rate::Fixed(dec("300")))],
            value_tiers: vec![value_tier("0", None, Rate::Percentage(dec("8")))],
        };

        let r = resolve(&catalog, dec("5000"), Some(12));
        assert_eq!(r.commission_value, dec("300"));
        // Percentual sintético: 300 / 5000 * 100
        assert_eq!(r.percentage, dec("6"));
    }

    #[test]
    fn sem_prazo_informado_faixas_por_prazo_sao_ignoradas() {
        let catalog = ProductRateCatalog {
            flat: None,
            period_tiers: vec![period_tier(0, None, Rate::Fixed(dec("300")))],
            value_tiers: vec![value_tier("0", None, Rate::Percentage(dec("8")))],
        };

        let r = resolve(&catalog, dec("1000"), None);
        assert_eq!(r.percentage, dec("8"));
        assert_eq!(r.commission_value, dec("80"));
    }

    #[test]
    fn fallback_de_cinco_por_cento() {
        let catalog = ProductRateCatalog::default();

        let r = resolve(&catalog, dec("2000"), Some(48));
        assert_eq!(r.percentage, dec("5"));
        assert_eq!(r.commission_value, dec("100"));
    }

    #[test]
    fn taxa_fixa_deriva_percentual_sintetico() {
        let catalog = ProductRateCatalog {
            flat: Some(Rate::Fixed(dec("150"))),
            period_tiers: vec![],
            value_tiers: vec![],
        };

        let r = resolve(&catalog, dec("1000"), None);
        assert_eq!(r.commission_value, dec("150"));
        assert_eq!(r.percentage, dec("15"));
    }

    #[test]
    fn venda_de_valor_zero_nao_divide_por_zero() {
        let catalog = ProductRateCatalog {
            flat: Some(Rate::Fixed(dec("150"))),
            period_tiers: vec![],
            value_tiers: vec![],
        };

        let r = resolve(&catalog, Decimal::ZERO, None);
        assert_eq!(r.commission_value, dec("150"));
        assert_eq!(r.percentage, Decimal::ZERO);
    }

    #[test]
    fn faixa_aberta_casa_qualquer_valor_acima_do_minimo() {
        let catalog = ProductRateCatalog {
            flat: None,
            period_tiers: vec![],
            value_tiers: vec![value_tier("10000", None, Rate::Percentage(dec("3")))],
        };

        let r = resolve(&catalog, dec("999999"), None);
        assert_eq!(r.percentage, dec("3"));
    }

    #[test]
    fn limites_de_faixa_sao_inclusivos() {
        let catalog = ProductRateCatalog {
            flat: None,
            period_tiers: vec![period_tier(6, Some(24), Rate::Percentage(dec("7")))],
            value_tiers: vec![],
        };

        assert_eq!(resolve(&catalog, dec("100"), Some(6)).percentage, dec("7"));
        assert_eq!(resolve(&catalog, dec("100"), Some(24)).percentage, dec("7"));
        // Fora da faixa cai no fallback
        assert_eq!(resolve(&catalog, dec("100"), Some(25)).percentage, dec("5"));
    }

    #[test]
    fn faixas_sobrepostas_vence_a_primeira_na_ordem_de_insercao() {
        let catalog = ProductRateCatalog {
            flat: None,
            period_tiers: vec![],
            value_tiers: vec![
                value_tier("0", Some("1000"), Rate::Percentage(dec("12"))),
                value_tier("0", Some("2000"), Rate::Percentage(dec("4"))),
            ],
        };

        let r = resolve(&catalog, dec("500"), None);
        assert_eq!(r.percentage, dec("12"));
    }
}
