//! Normalização de texto categórico (municípios, culturas)
//!
//! Forma canônica: maiúsculas, sem acentos, sem excesso de espaços.
//! A função é pura, total e idempotente; é ela que define a chave sobre
//! a qual as tabelas de correção do módulo [`crate::correcao`] casam.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normaliza um texto categórico.
///
/// Etapas, nesta ordem: decomposição NFD, remoção das marcas combinantes
/// (acentos, til, cedilha decomposta), maiúsculas, colapso de sequências
/// internas de espaços em um único espaço, trim.
pub fn normalizar(texto: &str) -> String {
    let sem_acentos: String = texto.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let maiusculo = sem_acentos.to_uppercase();

    let mut saida = String::with_capacity(maiusculo.len());
    let mut em_espaco = false;
    for c in maiusculo.trim().chars() {
        if c.is_whitespace() {
            em_espaco = true;
            continue;
        }
        if em_espaco && !saida.is_empty() {
            saida.push(' ');
        }
        em_espaco = false;
        saida.push(c);
    }

    saida
}

/// Normaliza um campo opcional; ausência passa adiante sem erro
pub fn normalizar_opcional(texto: Option<&str>) -> Option<String> {
    let texto = texto?;
    let normalizado = normalizar(texto);
    if normalizado.is_empty() {
        None
    } else {
        Some(normalizado)
    }
}
