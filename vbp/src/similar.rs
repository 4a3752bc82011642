//! Correspondência aproximada de nomes
//!
//! Usado pela camada de interface para pré-selecionar um município a
//! partir de um texto livre. Nunca participa do pipeline de dados: a
//! ausência de correspondência é um resultado normal (nenhuma
//! pré-seleção), não um erro.

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

use crate::limpeza::texto::normalizar;

/// Similaridade mínima padrão (escala 0–1)
pub const CORTE_PADRAO: f64 = 0.6;

/// Retorna o candidato mais parecido com o alvo, na grafia original.
///
/// A similaridade é a razão de Levenshtein normalizada, calculada sobre
/// as formas normalizadas (sem acento, maiúsculas) do alvo e de cada
/// candidato. Retorna `None` se nenhum candidato atingir `corte`.
pub fn melhor_correspondencia<'a, I>(candidatos: I, alvo: &str, corte: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let alvo_normalizado = normalizar(alvo);

    candidatos
        .into_iter()
        .map(|candidato| {
            let pontuacao = normalized_levenshtein(&normalizar(candidato), &alvo_normalizado);
            (candidato, pontuacao)
        })
        .filter(|(_, pontuacao)| *pontuacao >= corte)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(candidato, _)| candidato)
}
