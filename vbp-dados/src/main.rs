//! Ponto de entrada CLI para vbp-dados

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

// Carregar .env na inicialização
fn load_env() {
    if dotenvy::dotenv().is_err() {
        // Tentar a partir do diretório do binário
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;
mod config;
mod export;
mod report;
mod stats;

use cli::Commands;
use config::Config;

/// Dataset do Valor Bruto da Produção (SEAB/PR): carga, filtros e exportação
#[derive(Parser)]
#[command(name = "vbp-dados")]
#[command(author, version)]
#[command(about = "Normaliza os extratos anuais do VBP e exporta o dataset canônico")]
struct Cli {
    /// Aumentar a verbosidade (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Modo silencioso
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Arquivo de configuração JSON (padrão: preset embutido)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Diretório de dados (sobrepõe a configuração)
    #[arg(long, global = true)]
    dados: Option<PathBuf>,

    /// Política numérica: zero, nulo ou erro (sobrepõe a configuração)
    #[arg(long, global = true)]
    politica: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    load_env();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(caminho) => Config::load(caminho)?,
        None => Config::padrao(),
    };
    if let Some(dados) = cli.dados {
        config.dados = dados;
    }
    if let Some(politica) = &cli.politica {
        config.politica = cli::parse_politica(politica)?;
    }

    match cli.command {
        Commands::Exportar {
            output,
            municipio,
            cultura,
            safra_inicio,
            safra_fim,
        } => cli::cmd_exportar(
            &config,
            &output,
            &municipio,
            cultura.as_deref(),
            safra_inicio,
            safra_fim,
        )?,
        Commands::Resumo { json } => cli::cmd_resumo(&config, json)?,
        Commands::Listar { dimensao, busca } => {
            cli::cmd_listar(&config, dimensao, busca.as_deref())?
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
