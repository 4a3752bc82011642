//! Limpeza e derivação
//!
//! Terceira etapa do pipeline: recebe uma tabela já unificada (ver
//! [`crate::schema`]) e produz registros canônicos tipados: números
//! coagidos, chave de safra derivada, nomes normalizados e corrigidos,
//! colunas de apresentação (NR, NR Seab) descartadas.

pub mod numero;
pub mod safra;
pub mod texto;

use crate::planilha::{Celula, TabelaBruta};
use crate::schema::col;
use crate::types::{Opcoes, Registro};
use crate::VbpError;

use numero::PoliticaNumerica;

/// Resultado da limpeza de uma tabela unificada
#[derive(Debug)]
pub struct Limpo {
    /// Registros canônicos, na ordem das linhas fonte
    pub registros: Vec<Registro>,

    /// Correções de município aplicadas
    pub correcoes_municipio: usize,

    /// Correções de cultura aplicadas
    pub correcoes_cultura: usize,
}

/// Limpa uma tabela unificada, produzindo registros canônicos.
///
/// `arquivo` entra apenas nas mensagens de erro. Os números de linha
/// reportados são os da planilha (cabeçalho = linha 1).
///
/// # Errors
///
/// [`VbpError::SafraInvalida`] quando a célula de safra não contém uma
/// sequência de 4 dígitos, e [`VbpError::NumeroInvalido`] sob a política
/// [`PoliticaNumerica::Erro`].
pub fn limpar(tabela: &TabelaBruta, arquivo: &str, opcoes: &Opcoes) -> Result<Limpo, VbpError> {
    let mut registros = Vec::with_capacity(tabela.linhas.len());
    let mut correcoes_municipio = 0;
    let mut correcoes_cultura = 0;

    for (i, linha) in tabela.linhas.iter().enumerate() {
        let numero_linha = i + 2;

        let texto_safra = linha[col::SAFRA].como_texto().unwrap_or_default();
        let chave = safra::derivar(&texto_safra).ok_or_else(|| VbpError::SafraInvalida {
            valor: texto_safra.clone(),
            arquivo: arquivo.to_string(),
            linha: numero_linha,
        })?;

        let municipio = categorico(&linha[col::MUNICIPIO]);
        let municipio_corrigido = opcoes.correcoes.corrigir_municipio(&municipio);
        if municipio_corrigido != municipio {
            correcoes_municipio += 1;
        }

        let cultura = categorico(&linha[col::CULTURA]);
        let cultura_corrigida = opcoes.correcoes.corrigir_cultura(&cultura);
        if cultura_corrigida != cultura {
            correcoes_cultura += 1;
        }

        registros.push(Registro {
            safra: chave.rotulo,
            safra_ordem: chave.ordem,
            codigo_municipio: linha[col::CODIGO_MUNICIPIO].como_texto(),
            municipio: municipio_corrigido.to_string(),
            grupo: linha[col::GRUPO].como_texto(),
            subgrupo: linha[col::SUBGRUPO].como_texto(),
            subgrupo_detalhe: linha[col::SUBGRUPO_DETALHE].como_texto(),
            regiao: linha[col::REGIAO].como_texto(),
            codigo_cultura: linha[col::CODIGO_CULTURA].como_texto(),
            cultura: cultura_corrigida.to_string(),
            unidade: linha[col::UNIDADE].como_texto(),
            area_ha: sob_politica(linha, col::AREA_HA, arquivo, numero_linha, opcoes.politica)?,
            rebanho: numero::coagir(&linha[col::REBANHO]),
            abate_comercializacao: sob_politica(
                linha,
                col::ABATE_COMERCIALIZACAO,
                arquivo,
                numero_linha,
                opcoes.politica,
            )?,
            peso: numero::coagir(&linha[col::PESO]),
            producao: sob_politica(linha, col::PRODUCAO, arquivo, numero_linha, opcoes.politica)?,
            vbp: sob_politica(linha, col::VBP, arquivo, numero_linha, opcoes.politica)?,
        });
    }

    Ok(Limpo {
        registros,
        correcoes_municipio,
        correcoes_cultura,
    })
}

/// Normaliza um campo categórico; célula vazia vira string vazia
fn categorico(celula: &Celula) -> String {
    match celula.como_texto() {
        Some(t) => texto::normalizar(&t),
        None => String::new(),
    }
}

/// Aplica a política de números ausentes a uma célula de valor
fn sob_politica(
    linha: &[Celula],
    indice: usize,
    arquivo: &str,
    numero_linha: usize,
    politica: PoliticaNumerica,
) -> Result<Option<f64>, VbpError> {
    let celula = &linha[indice];

    match (numero::coagir(celula), politica) {
        (Some(v), _) => Ok(Some(v)),
        (None, PoliticaNumerica::Zero) => Ok(Some(0.0)),
        (None, PoliticaNumerica::Nulo) => Ok(None),
        (None, PoliticaNumerica::Erro) => Err(VbpError::NumeroInvalido {
            coluna: crate::schema::COLUNAS_PADRAO[indice].to_string(),
            valor: celula.como_texto().unwrap_or_default(),
            arquivo: arquivo.to_string(),
            linha: numero_linha,
        }),
    }
}
