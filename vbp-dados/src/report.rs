//! Relatório de carga
//!
//! Resumo por ano fonte do que a normalização fez: linhas lidas e
//! correções de grafia aplicadas. Serve para auditar a tabela de
//! correções quando um ano novo entra no dataset.

use vbp::Carga;

/// Imprime o relatório de carga em texto tabulado
pub fn imprimir(carga: &Carga) {
    println!("Ano     Linhas  Corr. município  Corr. cultura");

    let mut total_linhas = 0;
    let mut total_municipio = 0;
    let mut total_cultura = 0;

    for resumo in &carga.anos {
        println!(
            "{:<7} {:<7} {:<16} {}",
            resumo.ano, resumo.linhas, resumo.correcoes_municipio, resumo.correcoes_cultura
        );
        total_linhas += resumo.linhas;
        total_municipio += resumo.correcoes_municipio;
        total_cultura += resumo.correcoes_cultura;
    }

    println!(
        "Total   {:<7} {:<16} {}",
        total_linhas, total_municipio, total_cultura
    );
}
