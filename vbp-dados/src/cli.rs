//! Definição e implementação dos comandos CLI
//!
//! - `exportar`: carrega, filtra e grava o CSV canônico
//! - `resumo`: métricas do dataset e agregados de VBP por safra
//! - `listar`: valores distintos para montar filtros (com busca aproximada
//!   de município)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use tracing::info;
use vbp::limpeza::numero::PoliticaNumerica;
use vbp::limpeza::texto::normalizar;
use vbp::similar;
use vbp::tabela::{self, Filtro};
use vbp::Carga;

use crate::config::Config;
use crate::export;
use crate::report;
use crate::stats;

#[derive(Subcommand)]
pub enum Commands {
    /// Exporta o dataset canônico para CSV (";", UTF-8 com BOM)
    Exportar {
        /// Arquivo CSV de saída
        #[arg(short, long, default_value = "dados-vbp.csv")]
        output: PathBuf,

        /// Restringe a um ou mais municípios (repetível)
        #[arg(long)]
        municipio: Vec<String>,

        /// Restringe a uma cultura
        #[arg(long)]
        cultura: Option<String>,

        /// Primeira safra da faixa (ano inicial, ex: 2015)
        #[arg(long)]
        safra_inicio: Option<u16>,

        /// Última safra da faixa (ano inicial, ex: 2020)
        #[arg(long)]
        safra_fim: Option<u16>,
    },

    /// Mostra métricas do dataset e o VBP agregado por safra
    Resumo {
        /// Emite o resumo como JSON em vez de texto
        #[arg(long)]
        json: bool,
    },

    /// Lista valores distintos de uma dimensão
    Listar {
        /// Dimensão a listar
        #[arg(value_enum)]
        dimensao: Dimensao,

        /// Busca aproximada (só para municípios): mostra o nome mais
        /// parecido com o texto dado
        #[arg(long)]
        busca: Option<String>,
    },
}

/// Dimensões listáveis do dataset
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Dimensao {
    Municipios,
    Culturas,
    Safras,
}

/// Interpreta o nome de uma política numérica vindo da linha de comando
pub fn parse_politica(nome: &str) -> Result<PoliticaNumerica> {
    match nome {
        "zero" => Ok(PoliticaNumerica::Zero),
        "nulo" => Ok(PoliticaNumerica::Nulo),
        "erro" => Ok(PoliticaNumerica::Erro),
        _ => bail!("Unknown numeric policy: {nome}. Use: zero, nulo, erro"),
    }
}

/// Carrega o dataset conforme a configuração
fn carregar(config: &Config) -> Result<Carga> {
    let opcoes = config.opcoes()?;
    let anos = config.anos();

    info!(dados = %config.dados.display(), anos = anos.len(), "Carregando dataset");

    vbp::carregar(&config.dados, &anos, &opcoes)
        .with_context(|| format!("Failed to load dataset from {}", config.dados.display()))
}

/// Executa o comando exportar
pub fn cmd_exportar(
    config: &Config,
    output: &PathBuf,
    municipios: &[String],
    cultura: Option<&str>,
    safra_inicio: Option<u16>,
    safra_fim: Option<u16>,
) -> Result<()> {
    let carga = carregar(config)?;

    // Os nomes do dataset são normalizados; aceitar entrada acentuada
    let filtro = Filtro {
        municipios: municipios.iter().map(|m| normalizar(m)).collect(),
        cultura: cultura.map(normalizar),
        safra_inicio,
        safra_fim,
    };

    let selecionados = tabela::filtrar(&carga.registros, &filtro);
    let linhas = export::csv::exportar(output, selecionados)?;

    println!(
        "{} de {} registros exportados para {}",
        linhas,
        carga.registros.len(),
        output.display()
    );

    Ok(())
}

/// Executa o comando resumo
pub fn cmd_resumo(config: &Config, json: bool) -> Result<()> {
    let carga = carregar(config)?;

    let resumo = stats::resumo(&carga.registros);
    let safras = stats::por_safra(&carga.registros);

    if json {
        let saida = serde_json::json!({
            "resumo": resumo,
            "por_safra": safras,
            "carga": carga.anos,
        });
        println!("{}", serde_json::to_string_pretty(&saida)?);
        return Ok(());
    }

    println!("Registros:  {}", resumo.linhas);
    println!("Municípios: {}", resumo.municipios);
    println!("Culturas:   {}", resumo.culturas);
    println!(
        "Safras:     {} ({} a {})",
        resumo.safras,
        resumo.safra_inicial.as_deref().unwrap_or("-"),
        resumo.safra_final.as_deref().unwrap_or("-"),
    );

    println!();
    println!("Safra    Linhas  VBP total (R$)      VBP médio (R$)   VBP máximo (R$)");
    for safra in &safras {
        println!(
            "{:<8} {:<7} {:<19.2} {:<16.2} {:.2}",
            safra.safra, safra.linhas, safra.vbp_total, safra.vbp_medio, safra.vbp_maximo
        );
    }

    println!();
    report::imprimir(&carga);

    Ok(())
}

/// Executa o comando listar
pub fn cmd_listar(config: &Config, dimensao: Dimensao, busca: Option<&str>) -> Result<()> {
    let carga = carregar(config)?;

    let valores = match dimensao {
        Dimensao::Municipios => tabela::municipios(&carga.registros),
        Dimensao::Culturas => tabela::culturas(&carga.registros),
        Dimensao::Safras => tabela::safras(&carga.registros),
    };

    if let Some(alvo) = busca {
        if !matches!(dimensao, Dimensao::Municipios) {
            bail!("--busca only applies to municipios");
        }

        match similar::melhor_correspondencia(
            valores.iter().map(String::as_str),
            alvo,
            similar::CORTE_PADRAO,
        ) {
            Some(nome) => println!("{nome}"),
            // Abaixo do corte: nenhuma pré-seleção, não é erro
            None => println!("(nenhuma correspondência para {alvo:?})"),
        }
        return Ok(());
    }

    for valor in &valores {
        println!("{valor}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_politica() {
        assert_eq!(parse_politica("zero").unwrap(), PoliticaNumerica::Zero);
        assert_eq!(parse_politica("nulo").unwrap(), PoliticaNumerica::Nulo);
        assert_eq!(parse_politica("erro").unwrap(), PoliticaNumerica::Erro);
        assert!(parse_politica("estrito").is_err());
    }
}
