//! Coerção numérica com convenção regional
//!
//! As planilhas da SEAB usam vírgula como separador decimal, sem separador
//! de milhar. A coerção remove espaços, troca vírgula por ponto e faz o
//! parse; o destino de células ausentes ou ilegíveis é decidido pela
//! [`PoliticaNumerica`] configurada, nunca por um panic ou erro local.

use serde::{Deserialize, Serialize};

use crate::planilha::Celula;

/// Política para células numéricas ausentes ou ilegíveis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliticaNumerica {
    /// Ausência vira 0.0 (comportamento histórico do dataset VBP)
    #[default]
    Zero,
    /// Ausência vira `None`
    Nulo,
    /// Ausência é um erro fatal de carga
    Erro,
}

/// Coage uma célula em número real finito.
///
/// `Real` e `Inteiro` passam direto; texto é limpo (espaços removidos,
/// vírgula decimal trocada por ponto) e parseado. O sinal é preservado.
/// Retorna `None` para célula vazia, texto não numérico ou resultado não
/// finito; nunca retorna erro.
pub fn coagir(celula: &Celula) -> Option<f64> {
    let valor = match celula {
        Celula::Vazio | Celula::Booleano(_) => return None,
        Celula::Real(f) => *f,
        Celula::Inteiro(i) => *i as f64,
        Celula::Texto(t) => {
            let limpo: String = t
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            limpo.parse::<f64>().ok()?
        }
    };

    valor.is_finite().then_some(valor)
}
