//! Estatísticas descritivas do dataset
//!
//! Os "números estaduais" do dashboard original: métricas gerais do
//! dataset e agregados de VBP por safra.

use std::collections::BTreeMap;

use serde::Serialize;
use vbp::{tabela, Registro};

/// Métricas gerais do dataset unificado
#[derive(Debug, Clone, Serialize)]
pub struct ResumoDataset {
    /// Total de registros
    pub linhas: usize,

    /// Municípios distintos
    pub municipios: usize,

    /// Culturas distintas
    pub culturas: usize,

    /// Safras distintas
    pub safras: usize,

    /// Primeira safra (rótulo)
    pub safra_inicial: Option<String>,

    /// Última safra (rótulo)
    pub safra_final: Option<String>,
}

/// Agregado de VBP de uma safra
#[derive(Debug, Clone, Serialize)]
pub struct EstatisticaSafra {
    /// Rótulo da safra ("2019-20")
    pub safra: String,

    /// Ano inicial da safra
    pub ordem: u16,

    /// Registros da safra
    pub linhas: usize,

    /// Soma do VBP (R$)
    pub vbp_total: f64,

    /// VBP médio por registro (R$)
    pub vbp_medio: f64,

    /// Maior VBP individual (R$)
    pub vbp_maximo: f64,
}

/// Calcula as métricas gerais do dataset
pub fn resumo(registros: &[Registro]) -> ResumoDataset {
    let safras = tabela::safras(registros);

    ResumoDataset {
        linhas: registros.len(),
        municipios: tabela::municipios(registros).len(),
        culturas: tabela::culturas(registros).len(),
        safras: safras.len(),
        safra_inicial: safras.first().cloned(),
        safra_final: safras.last().cloned(),
    }
}

/// Agrega o VBP por safra, em ordem cronológica.
///
/// Valores ausentes (política `nulo`) não entram na soma nem na média.
pub fn por_safra(registros: &[Registro]) -> Vec<EstatisticaSafra> {
    #[derive(Default)]
    struct Acumulador {
        rotulo: String,
        linhas: usize,
        presentes: usize,
        total: f64,
        maximo: f64,
    }

    let mut grupos: BTreeMap<u16, Acumulador> = BTreeMap::new();

    for registro in registros {
        let grupo = grupos.entry(registro.safra_ordem).or_default();
        if grupo.rotulo.is_empty() {
            grupo.rotulo = registro.safra.clone();
        }
        grupo.linhas += 1;
        if let Some(vbp) = registro.vbp {
            grupo.presentes += 1;
            grupo.total += vbp;
            grupo.maximo = grupo.maximo.max(vbp);
        }
    }

    grupos
        .into_iter()
        .map(|(ordem, grupo)| EstatisticaSafra {
            safra: grupo.rotulo,
            ordem,
            linhas: grupo.linhas,
            vbp_total: grupo.total,
            vbp_medio: if grupo.presentes > 0 {
                grupo.total / grupo.presentes as f64
            } else {
                0.0
            },
            vbp_maximo: grupo.maximo,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registro(municipio: &str, cultura: &str, ordem: u16, vbp: Option<f64>) -> Registro {
        Registro {
            safra: format!("{}-{:02}", ordem, (ordem + 1) % 100),
            safra_ordem: ordem,
            codigo_municipio: None,
            municipio: municipio.to_string(),
            grupo: None,
            subgrupo: None,
            subgrupo_detalhe: None,
            regiao: None,
            codigo_cultura: None,
            cultura: cultura.to_string(),
            unidade: None,
            area_ha: Some(0.0),
            rebanho: None,
            abate_comercializacao: Some(0.0),
            peso: None,
            producao: Some(0.0),
            vbp,
        }
    }

    #[test]
    fn test_resumo_geral() {
        let registros = vec![
            registro("CURITIBA", "SOJA", 2019, Some(10.0)),
            registro("CURITIBA", "MILHO", 2020, Some(20.0)),
            registro("LONDRINA", "SOJA", 2020, Some(30.0)),
        ];

        let r = resumo(&registros);
        assert_eq!(r.linhas, 3);
        assert_eq!(r.municipios, 2);
        assert_eq!(r.culturas, 2);
        assert_eq!(r.safras, 2);
        assert_eq!(r.safra_inicial.as_deref(), Some("2019-20"));
        assert_eq!(r.safra_final.as_deref(), Some("2020-21"));
    }

    #[test]
    fn test_agregado_por_safra() {
        let registros = vec![
            registro("CURITIBA", "SOJA", 2019, Some(10.0)),
            registro("LONDRINA", "SOJA", 2019, Some(30.0)),
            registro("CURITIBA", "MILHO", 2020, Some(5.0)),
        ];

        let safras = por_safra(&registros);
        assert_eq!(safras.len(), 2);

        assert_eq!(safras[0].safra, "2019-20");
        assert_eq!(safras[0].linhas, 2);
        assert_eq!(safras[0].vbp_total, 40.0);
        assert_eq!(safras[0].vbp_medio, 20.0);
        assert_eq!(safras[0].vbp_maximo, 30.0);

        assert_eq!(safras[1].ordem, 2020);
        assert_eq!(safras[1].vbp_total, 5.0);
    }

    #[test]
    fn test_ordem_cronologica() {
        let registros = vec![
            registro("A", "SOJA", 2021, Some(1.0)),
            registro("A", "SOJA", 2013, Some(1.0)),
            registro("A", "SOJA", 2017, Some(1.0)),
        ];
        let ordens: Vec<u16> = por_safra(&registros).iter().map(|e| e.ordem).collect();
        assert_eq!(ordens, vec![2013, 2017, 2021]);
    }

    #[test]
    fn test_nulos_nao_entram_na_media() {
        let registros = vec![
            registro("A", "SOJA", 2019, Some(10.0)),
            registro("A", "MILHO", 2019, None),
        ];
        let safras = por_safra(&registros);
        assert_eq!(safras[0].linhas, 2);
        assert_eq!(safras[0].vbp_medio, 10.0);
    }

    #[test]
    fn test_dataset_vazio() {
        let r = resumo(&[]);
        assert_eq!(r.linhas, 0);
        assert!(r.safra_inicial.is_none());
        assert!(por_safra(&[]).is_empty());
    }
}
