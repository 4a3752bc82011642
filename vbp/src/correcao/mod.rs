//! Correção de grafias conhecidas
//!
//! Alguns nomes de município e cultura aparecem com grafias erradas em
//! anos específicos dos arquivos fonte. A correção é uma substituição por
//! casamento exato, chaveada sobre a forma já normalizada (ver
//! [`crate::limpeza::texto`]), nunca fuzzy. As tabelas são dados de
//! configuração: um preset embutido cobre os erros conhecidos até hoje, e
//! um arquivo JSON pode substituí-lo quando novos anos trouxerem novos
//! erros.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::VbpError;

/// Tabelas de correção de município e cultura
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Correcoes {
    /// Grafia normalizada errada -> grafia normalizada correta
    #[serde(default)]
    pub municipios: HashMap<String, String>,

    /// Grafia normalizada errada -> grafia normalizada correta
    #[serde(default)]
    pub culturas: HashMap<String, String>,
}

impl Correcoes {
    /// Tabelas padrão, embutidas no binário
    pub fn padrao() -> Self {
        serde_json::from_str(include_str!("padrao.json"))
            .expect("preset de correções embutido inválido")
    }

    /// Carrega tabelas de um arquivo JSON
    pub fn carregar(caminho: &Path) -> Result<Self, VbpError> {
        let conteudo = std::fs::read_to_string(caminho)?;
        serde_json::from_str(&conteudo).map_err(|e| VbpError::Correcoes(e.to_string()))
    }

    /// Corrige um nome de município já normalizado.
    /// Nomes fora da tabela passam sem alteração.
    pub fn corrigir_municipio<'a>(&'a self, nome: &'a str) -> &'a str {
        self.municipios.get(nome).map(String::as_str).unwrap_or(nome)
    }

    /// Corrige um nome de cultura já normalizado
    pub fn corrigir_cultura<'a>(&'a self, nome: &'a str) -> &'a str {
        self.culturas.get(nome).map(String::as_str).unwrap_or(nome)
    }
}
