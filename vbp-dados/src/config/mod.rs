//! Configuração da carga
//!
//! A configuração é dado explícito, não literal espalhado pelo código: um
//! preset embutido cobre o caso comum e um arquivo JSON pode substituí-lo
//! (outro diretório de dados, outros anos, política numérica mais estrita,
//! tabela de correções estendida).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vbp::correcao::Correcoes;
use vbp::limpeza::numero::PoliticaNumerica;
use vbp::Opcoes;

/// Configuração principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Diretório com os arquivos vbp_<ano>.xlsx
    pub dados: PathBuf,

    /// Anos a carregar; ausente = anos padrão do dataset
    #[serde(default)]
    pub anos: Option<Vec<u16>>,

    /// Política para células numéricas ausentes ou ilegíveis
    #[serde(default)]
    pub politica: PoliticaNumerica,

    /// Arquivo JSON com tabelas de correção; ausente = preset embutido
    #[serde(default)]
    pub correcoes: Option<PathBuf>,
}

impl Config {
    /// Configuração padrão embutida
    pub fn padrao() -> Self {
        serde_json::from_str(include_str!("presets/padrao.json"))
            .expect("preset de configuração embutido inválido")
    }

    /// Carrega uma configuração de um arquivo JSON
    pub fn load(path: &Path) -> Result<Self> {
        let conteudo = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&conteudo).context("Failed to parse config JSON")
    }

    /// Anos a carregar, resolvendo o padrão
    pub fn anos(&self) -> Vec<u16> {
        self.anos.clone().unwrap_or_else(vbp::anos_padrao)
    }

    /// Monta as opções de carga da biblioteca
    pub fn opcoes(&self) -> Result<Opcoes> {
        let correcoes = match &self.correcoes {
            Some(caminho) => Correcoes::carregar(caminho)
                .with_context(|| format!("Failed to load corrections: {}", caminho.display()))?,
            None => Correcoes::padrao(),
        };

        Ok(Opcoes {
            politica: self.politica,
            correcoes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_padrao() {
        let config = Config::padrao();
        assert_eq!(config.dados, PathBuf::from("data"));
        assert_eq!(config.anos(), vbp::anos_padrao());
        assert_eq!(config.politica, PoliticaNumerica::Zero);
        assert!(config.correcoes.is_none());
    }

    #[test]
    fn test_parse_minimo() {
        let config: Config = serde_json::from_str(r#"{ "dados": "/tmp/vbp" }"#).unwrap();
        assert_eq!(config.anos(), vbp::anos_padrao());
        assert_eq!(config.politica, PoliticaNumerica::Zero);
    }

    #[test]
    fn test_parse_completo() {
        let config: Config = serde_json::from_str(
            r#"{
                "dados": "extratos",
                "anos": [2019, 2020],
                "politica": "erro",
                "correcoes": "correcoes.json"
            }"#,
        )
        .unwrap();
        assert_eq!(config.anos(), vec![2019, 2020]);
        assert_eq!(config.politica, PoliticaNumerica::Erro);
        assert_eq!(config.correcoes, Some(PathBuf::from("correcoes.json")));
    }

    #[test]
    fn test_opcoes_usa_correcoes_embutidas() {
        let opcoes = Config::padrao().opcoes().unwrap();
        assert_eq!(
            opcoes.correcoes.corrigir_cultura("ALHO PORO"),
            "ALHO PORRO"
        );
    }
}
