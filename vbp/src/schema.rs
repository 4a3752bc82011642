//! Unificação de schema
//!
//! As planilhas anuais da SEAB não têm sempre as mesmas colunas: anos
//! antigos omitem campos de classificação, anos novos acrescentam colunas
//! de apresentação. Este módulo projeta qualquer tabela crua sobre o
//! conjunto padrão de colunas, na ordem padrão, para que a presença ou
//! ausência de colunas fique invisível para o resto do pipeline.

use std::collections::HashMap;

use crate::limpeza::texto::normalizar;
use crate::planilha::{Celula, TabelaBruta};

/// Conjunto padrão de colunas, na ordem canônica.
///
/// Reproduz os cabeçalhos dos arquivos fonte ("Subg - detalhe" aparece com
/// quebra de linha embutida em alguns anos; o casamento é feito sobre a
/// forma normalizada, então a variação é absorvida).
pub const COLUNAS_PADRAO: [&str; 18] = [
    "Safra",
    "Código Município",
    "Município",
    "NR",
    "Grupo",
    "Subgrupo",
    "Subg - detalhe",
    "NR Seab",
    "Região",
    "Código Cultura",
    "Cultura",
    "Unidade",
    "Área (ha)",
    "Rebanho Estático",
    "Abate / Comercialização",
    "Peso",
    "Produção",
    "VBP",
];

/// Índices das colunas padrão, para acesso posicional após a unificação
pub(crate) mod col {
    pub const SAFRA: usize = 0;
    pub const CODIGO_MUNICIPIO: usize = 1;
    pub const MUNICIPIO: usize = 2;
    pub const GRUPO: usize = 4;
    pub const SUBGRUPO: usize = 5;
    pub const SUBGRUPO_DETALHE: usize = 6;
    pub const REGIAO: usize = 8;
    pub const CODIGO_CULTURA: usize = 9;
    pub const CULTURA: usize = 10;
    pub const UNIDADE: usize = 11;
    pub const AREA_HA: usize = 12;
    pub const REBANHO: usize = 13;
    pub const ABATE_COMERCIALIZACAO: usize = 14;
    pub const PESO: usize = 15;
    pub const PRODUCAO: usize = 16;
    pub const VBP: usize = 17;
}

/// Chave de casamento de cabeçalho: forma normalizada do nome da coluna.
/// Absorve diferenças de caixa, acentos e espaçamento entre anos.
fn chave(coluna: &str) -> String {
    normalizar(coluna)
}

/// Projeta uma tabela crua sobre [`COLUNAS_PADRAO`].
///
/// Colunas padrão ausentes no arquivo entram como colunas de células
/// vazias; colunas extras do arquivo são descartadas; a ordem final é a
/// canônica. Total sobre qualquer tabela, inclusive sem linhas.
pub fn unificar(tabela: &TabelaBruta) -> TabelaBruta {
    // Mapa forma-normalizada -> índice no arquivo. Em caso de cabeçalho
    // duplicado, vence a primeira ocorrência.
    let mut indices: HashMap<String, usize> = HashMap::new();
    for (i, coluna) in tabela.colunas.iter().enumerate() {
        indices.entry(chave(coluna)).or_insert(i);
    }

    let projecao: Vec<Option<usize>> = COLUNAS_PADRAO
        .iter()
        .map(|c| indices.get(&chave(c)).copied())
        .collect();

    let linhas = tabela
        .linhas
        .iter()
        .map(|linha| {
            projecao
                .iter()
                .map(|origem| match origem {
                    Some(i) => linha.get(*i).cloned().unwrap_or(Celula::Vazio),
                    None => Celula::Vazio,
                })
                .collect()
        })
        .collect();

    TabelaBruta {
        colunas: COLUNAS_PADRAO.iter().map(|c| c.to_string()).collect(),
        linhas,
    }
}
