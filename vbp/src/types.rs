//! Tipos de dados do crate vbp

use serde::Serialize;

use crate::correcao::Correcoes;
use crate::limpeza::numero::PoliticaNumerica;

/// Registro canônico: uma linha do dataset unificado e limpo.
///
/// Os nomes serializados reproduzem os cabeçalhos das planilhas originais
/// da SEAB/PR, que é o contrato da exportação CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registro {
    /// Rótulo da safra no formato canônico "YYYY-YY" (ex: "2019-20")
    #[serde(rename = "Safra")]
    pub safra: String,

    /// Ano inicial da safra, chave ordenável (ex: 2019)
    #[serde(rename = "Safra_ordem")]
    pub safra_ordem: u16,

    /// Código IBGE do município (texto, repassado sem alteração)
    #[serde(rename = "Código Município")]
    pub codigo_municipio: Option<String>,

    /// Nome do município, maiúsculo, sem acentos, corrigido
    #[serde(rename = "Município")]
    pub municipio: String,

    /// Grupo de classificação (ex: "GRÃOS")
    #[serde(rename = "Grupo")]
    pub grupo: Option<String>,

    /// Subgrupo de classificação
    #[serde(rename = "Subgrupo")]
    pub subgrupo: Option<String>,

    /// Detalhe do subgrupo
    #[serde(rename = "Subg - detalhe")]
    pub subgrupo_detalhe: Option<String>,

    /// Região administrativa da SEAB
    #[serde(rename = "Região")]
    pub regiao: Option<String>,

    /// Código da cultura
    #[serde(rename = "Código Cultura")]
    pub codigo_cultura: Option<String>,

    /// Nome da cultura, maiúsculo, sem acentos, corrigido
    #[serde(rename = "Cultura")]
    pub cultura: String,

    /// Unidade de medida ("ha", "cabeças", "@", ...)
    #[serde(rename = "Unidade")]
    pub unidade: Option<String>,

    /// Área plantada em hectares. Sempre `Some` sob a política `Zero`.
    #[serde(rename = "Área (ha)")]
    pub area_ha: Option<f64>,

    /// Rebanho estático (repassado, coerção leniente)
    #[serde(rename = "Rebanho Estático")]
    pub rebanho: Option<f64>,

    /// Abate / comercialização. Sempre `Some` sob a política `Zero`.
    #[serde(rename = "Abate / Comercialização")]
    pub abate_comercializacao: Option<f64>,

    /// Peso (repassado, coerção leniente)
    #[serde(rename = "Peso")]
    pub peso: Option<f64>,

    /// Volume de produção. Sempre `Some` sob a política `Zero`.
    #[serde(rename = "Produção")]
    pub producao: Option<f64>,

    /// Valor Bruto da Produção em R$. Sempre `Some` sob a política `Zero`.
    #[serde(rename = "VBP")]
    pub vbp: Option<f64>,
}

/// Resultado de uma carga completa
#[derive(Debug)]
pub struct Carga {
    /// Registros canônicos, na ordem dos anos configurados
    pub registros: Vec<Registro>,

    /// Resumo por ano fonte
    pub anos: Vec<ResumoAno>,
}

/// Resumo da carga de um ano fonte
#[derive(Debug, Clone, Serialize)]
pub struct ResumoAno {
    /// Ano do arquivo fonte (ex: 2019 para vbp_2019.xlsx)
    pub ano: u16,

    /// Linhas lidas da planilha
    pub linhas: usize,

    /// Correções de município aplicadas
    pub correcoes_municipio: usize,

    /// Correções de cultura aplicadas
    pub correcoes_cultura: usize,
}

/// Opções da carga
#[derive(Debug, Clone)]
pub struct Opcoes {
    /// Política para células numéricas ausentes ou ilegíveis
    pub politica: PoliticaNumerica,

    /// Tabelas de correção de grafias conhecidas
    pub correcoes: Correcoes,
}

impl Default for Opcoes {
    fn default() -> Self {
        Self {
            politica: PoliticaNumerica::default(),
            correcoes: Correcoes::padrao(),
        }
    }
}
