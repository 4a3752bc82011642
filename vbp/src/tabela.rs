//! Consultas sobre o dataset unificado
//!
//! O dataset é imutável depois da carga; os consumidores (dashboard,
//! exportação) só precisam de subconjuntos por predicado de igualdade e
//! faixa, e das listas de valores distintos para montar filtros.

use crate::types::Registro;

/// Parâmetros de filtragem vindos da camada de interface
#[derive(Debug, Clone, Default)]
pub struct Filtro {
    /// Municípios selecionados; vazio significa sem filtro de município
    pub municipios: Vec<String>,

    /// Cultura selecionada, se houver
    pub cultura: Option<String>,

    /// Início da faixa de safras (inclusivo), por `safra_ordem`
    pub safra_inicio: Option<u16>,

    /// Fim da faixa de safras (inclusivo), por `safra_ordem`
    pub safra_fim: Option<u16>,
}

impl Filtro {
    /// Indica se um registro satisfaz o filtro
    pub fn aceita(&self, registro: &Registro) -> bool {
        if !self.municipios.is_empty() && !self.municipios.iter().any(|m| *m == registro.municipio)
        {
            return false;
        }

        if let Some(cultura) = &self.cultura {
            if *cultura != registro.cultura {
                return false;
            }
        }

        if let Some(inicio) = self.safra_inicio {
            if registro.safra_ordem < inicio {
                return false;
            }
        }

        if let Some(fim) = self.safra_fim {
            if registro.safra_ordem > fim {
                return false;
            }
        }

        true
    }
}

/// Subconjunto de registros que satisfazem o filtro, na ordem original
pub fn filtrar<'a>(registros: &'a [Registro], filtro: &Filtro) -> Vec<&'a Registro> {
    registros.iter().filter(|r| filtro.aceita(r)).collect()
}

/// Municípios distintos, ordenados; strings vazias (célula fonte ausente)
/// ficam de fora
pub fn municipios(registros: &[Registro]) -> Vec<String> {
    distintos(registros.iter().map(|r| r.municipio.as_str()))
}

/// Culturas distintas, ordenadas
pub fn culturas(registros: &[Registro]) -> Vec<String> {
    distintos(registros.iter().map(|r| r.cultura.as_str()))
}

/// Rótulos de safra distintos, em ordem cronológica
pub fn safras(registros: &[Registro]) -> Vec<String> {
    let mut pares: Vec<(u16, &str)> = registros
        .iter()
        .map(|r| (r.safra_ordem, r.safra.as_str()))
        .collect();
    pares.sort_unstable();
    pares.dedup();
    pares.into_iter().map(|(_, rotulo)| rotulo.to_string()).collect()
}

fn distintos<'a>(valores: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut lista: Vec<&str> = valores.filter(|v| !v.is_empty()).collect();
    lista.sort_unstable();
    lista.dedup();
    lista.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registro(municipio: &str, cultura: &str, ordem: u16) -> Registro {
        Registro {
            safra: format!("{}-{}", ordem, (ordem + 1) % 100),
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
            vbp: Some(0.0),
        }
    }

    #[test]
    fn test_sem_filtro_aceita_tudo() {
        let registros = vec![
            registro("CURITIBA", "SOJA", 2019),
            registro("LONDRINA", "MILHO", 2020),
        ];
        assert_eq!(filtrar(&registros, &Filtro::default()).len(), 2);
    }

    #[test]
    fn test_filtro_de_municipio() {
        let registros = vec![
            registro("CURITIBA", "SOJA", 2019),
            registro("LONDRINA", "SOJA", 2019),
        ];
        let filtro = Filtro {
            municipios: vec!["CURITIBA".to_string()],
            ..Filtro::default()
        };
        let saida = filtrar(&registros, &filtro);
        assert_eq!(saida.len(), 1);
        assert_eq!(saida[0].municipio, "CURITIBA");
    }

    #[test]
    fn test_faixa_de_safra_inclusiva() {
        let registros: Vec<Registro> = (2013..=2024)
            .map(|ano| registro("TOLEDO", "SOJA", ano))
            .collect();
        let filtro = Filtro {
            safra_inicio: Some(2015),
            safra_fim: Some(2017),
            ..Filtro::default()
        };
        let saida = filtrar(&registros, &filtro);
        assert_eq!(saida.len(), 3);
        assert!(saida
            .iter()
            .all(|r| (2015..=2017).contains(&r.safra_ordem)));
    }

    #[test]
    fn test_filtragem_comuta_com_concatenacao() {
        // Filtrar o concatenado == concatenar os filtrados
        let ano_a: Vec<Registro> = (0..4).map(|i| registro("A", "SOJA", 2013 + i)).collect();
        let ano_b: Vec<Registro> = (0..4).map(|i| registro("B", "MILHO", 2013 + i)).collect();

        let filtro = Filtro {
            safra_inicio: Some(2014),
            safra_fim: Some(2015),
            ..Filtro::default()
        };

        let mut concatenado = ano_a.clone();
        concatenado.extend(ano_b.clone());
        let tudo: Vec<Registro> = filtrar(&concatenado, &filtro)
            .into_iter()
            .cloned()
            .collect();

        let mut por_partes: Vec<Registro> =
            filtrar(&ano_a, &filtro).into_iter().cloned().collect();
        por_partes.extend(filtrar(&ano_b, &filtro).into_iter().cloned());

        assert_eq!(tudo, por_partes);
    }

    #[test]
    fn test_listas_distintas() {
        let registros = vec![
            registro("LONDRINA", "MILHO", 2020),
            registro("CURITIBA", "SOJA", 2019),
            registro("CURITIBA", "SOJA", 2019),
            registro("", "TRIGO", 2021),
        ];

        assert_eq!(municipios(&registros), vec!["CURITIBA", "LONDRINA"]);
        assert_eq!(culturas(&registros), vec!["MILHO", "SOJA", "TRIGO"]);
        assert_eq!(safras(&registros), vec!["2019-20", "2020-21", "2021-22"]);
    }
}
