//! Tipos de erro do crate vbp

use std::path::PathBuf;

use thiserror::Error;

/// Erros que podem ocorrer durante a carga e normalização dos dados
#[derive(Debug, Error)]
pub enum VbpError {
    /// Erro de I/O ao ler um arquivo fonte
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Arquivo de um ano configurado não encontrado.
    /// A carga exige todos os anos configurados; ausência é fatal.
    #[error("Missing source file for year {ano}: {caminho}")]
    ArquivoAusente { ano: u16, caminho: PathBuf },

    /// Planilha ilegível ou corrompida
    #[error("Failed to read spreadsheet {arquivo}: {motivo}")]
    Planilha { arquivo: String, motivo: String },

    /// Planilha sem linha de cabeçalho
    #[error("Spreadsheet {arquivo} has no header row")]
    SemCabecalho { arquivo: String },

    /// Célula de safra sem nenhuma sequência de 4 dígitos.
    /// Nunca vira zero: um ano sentinela corromperia a ordenação
    /// cronológica em silêncio.
    #[error("Malformed harvest value {valor:?} in {arquivo}, row {linha}")]
    SafraInvalida {
        valor: String,
        arquivo: String,
        linha: usize,
    },

    /// Célula numérica inválida (somente sob a política `Erro`)
    #[error("Invalid numeric value {valor:?} in column {coluna:?}, {arquivo}, row {linha}")]
    NumeroInvalido {
        coluna: String,
        valor: String,
        arquivo: String,
        linha: usize,
    },

    /// Tabela de correções ilegível ou com formato inválido
    #[error("Failed to load correction table: {0}")]
    Correcoes(String),
}

impl VbpError {
    /// Cria um erro de planilha com contexto
    pub fn planilha(arquivo: impl Into<String>, motivo: impl ToString) -> Self {
        Self::Planilha {
            arquivo: arquivo.into(),
            motivo: motivo.to_string(),
        }
    }
}
