//! Extração das planilhas anuais (vbp_<ano>.xlsx)
//!
//! Cada arquivo fonte vira uma [`TabelaBruta`]: cabeçalho + linhas de
//! células tipadas. O conjunto de colunas varia entre anos; a unificação
//! fica a cargo do módulo [`crate::schema`].

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::VbpError;

/// Célula de uma planilha fonte
#[derive(Debug, Clone, PartialEq)]
pub enum Celula {
    /// Célula vazia ou ausente (marcador de valor faltante)
    Vazio,
    /// Texto livre
    Texto(String),
    /// Número de ponto flutuante
    Real(f64),
    /// Número inteiro
    Inteiro(i64),
    /// Booleano
    Booleano(bool),
}

impl Celula {
    /// Indica se a célula é o marcador de valor faltante
    pub fn vazia(&self) -> bool {
        match self {
            Celula::Vazio => true,
            Celula::Texto(t) => t.trim().is_empty(),
            _ => false,
        }
    }

    /// Converte a célula em texto, sem espaços nas pontas.
    /// Reais inteiros (o Excel guarda 2019 como 2019.0) saem sem ".0".
    pub fn como_texto(&self) -> Option<String> {
        match self {
            Celula::Vazio => None,
            Celula::Texto(t) => {
                let t = t.trim();
                if t.is_empty() {
                    None
                } else {
                    Some(t.to_string())
                }
            }
            Celula::Real(f) if f.is_finite() && f.fract() == 0.0 => {
                Some(format!("{}", *f as i64))
            }
            Celula::Real(f) => Some(f.to_string()),
            Celula::Inteiro(i) => Some(i.to_string()),
            Celula::Booleano(b) => Some(b.to_string()),
        }
    }
}

impl From<&Data> for Celula {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Celula::Vazio,
            Data::String(s) => Celula::Texto(s.clone()),
            Data::Float(f) => Celula::Real(*f),
            Data::Int(i) => Celula::Inteiro(*i),
            Data::Bool(b) => Celula::Booleano(*b),
            // Datas não ocorrem nas colunas do VBP; preservar como texto
            outro => Celula::Texto(outro.to_string()),
        }
    }
}

/// Tabela crua de um arquivo fonte, antes da unificação de schema
#[derive(Debug, Clone)]
pub struct TabelaBruta {
    /// Nomes das colunas, na ordem do arquivo
    pub colunas: Vec<String>,

    /// Linhas de dados (sem o cabeçalho)
    pub linhas: Vec<Vec<Celula>>,
}

impl TabelaBruta {
    /// Índice da coluna com o nome dado (comparação exata)
    pub fn indice(&self, coluna: &str) -> Option<usize> {
        self.colunas.iter().position(|c| c == coluna)
    }
}

/// Lê a primeira aba de uma planilha Excel como [`TabelaBruta`].
///
/// A primeira linha é o cabeçalho; linhas seguintes são dados. Linhas
/// inteiramente vazias (comuns no rodapé dos arquivos da SEAB) são
/// descartadas.
///
/// # Errors
///
/// Retorna [`VbpError::Planilha`] se o arquivo for ilegível e
/// [`VbpError::SemCabecalho`] se a aba não tiver linha de cabeçalho.
pub fn ler(caminho: &Path) -> Result<TabelaBruta, VbpError> {
    let arquivo = caminho.display().to_string();

    let mut workbook =
        open_workbook_auto(caminho).map_err(|e| VbpError::planilha(&arquivo, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| VbpError::planilha(&arquivo, "workbook has no sheets"))?
        .map_err(|e| VbpError::planilha(&arquivo, e))?;

    let mut linhas_iter = range.rows();

    let cabecalho = linhas_iter
        .next()
        .ok_or_else(|| VbpError::SemCabecalho {
            arquivo: arquivo.clone(),
        })?;

    let colunas: Vec<String> = cabecalho
        .iter()
        .map(|c| match c {
            Data::String(s) => s.trim().to_string(),
            outro => outro.to_string().trim().to_string(),
        })
        .collect();

    if colunas.iter().all(|c| c.is_empty()) {
        return Err(VbpError::SemCabecalho { arquivo });
    }

    let mut linhas = Vec::new();
    for linha in linhas_iter {
        let celulas: Vec<Celula> = linha.iter().map(Celula::from).collect();
        if celulas.iter().all(Celula::vazia) {
            continue;
        }
        linhas.push(celulas);
    }

    debug!(
        arquivo = %arquivo,
        colunas = colunas.len(),
        linhas = linhas.len(),
        "Planilha lida"
    );

    Ok(TabelaBruta { colunas, linhas })
}
