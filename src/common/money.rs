// src/common/money.rs

use rust_decimal::Decimal;
use std::str::FromStr;

/// Normaliza um valor monetário vindo do formulário ("R$ 1.234,56") para
/// `Decimal`. Remove tudo que não for dígito ou vírgula e troca a vírgula
/// decimal por ponto. Retorna `None` se não sobrar um número válido.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn normaliza_formato_brl_completo() {
        assert_eq!(parse_amount("R$ 1.234,56"), Some(dec("1234.56")));
    }

    #[test]
    fn aceita_valor_sem_prefixo() {
        assert_eq!(parse_amount("2500,00"), Some(dec("2500.00")));
        assert_eq!(parse_amount("2000"), Some(dec("2000")));
    }

    #[test]
    fn separador_de_milhar_nao_vira_decimal() {
        assert_eq!(parse_amount("10.000"), Some(dec("10000")));
    }

    #[test]
    fn entrada_vazia_ou_sem_digitos_retorna_none() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("R$ "), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn duas_virgulas_e_invalido() {
        assert_eq!(parse_amount("1,2,3"), None);
    }
}
