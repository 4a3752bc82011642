//! # vbp
//!
//! Pipeline de normalização do Valor Bruto da Produção (VBP) da SEAB/PR.
//!
//! Os extratos anuais (`vbp_<ano>.xlsx`) chegam com colunas, unidades,
//! grafias e formatos de safra inconsistentes. Este crate os unifica em um
//! dataset canônico pronto para agregação, em três etapas sequenciais:
//!
//! 1. **Extração** ([`planilha`]): cada arquivo vira uma tabela crua
//! 2. **Unificação de schema** ([`schema`]): projeção sobre as colunas padrão
//! 3. **Limpeza e derivação** ([`limpeza`]): coerção numérica, chave de
//!    safra, normalização de texto, correção de grafias conhecidas
//!
//! A carga é uma função pura dos arquivos de entrada: sem estado mutável
//! compartilhado, sem concorrência interna, mesma saída a cada chamada.
//! Isso permite ao processo servidor memoizá-la externamente.
//!
//! ## Uso
//!
//! ```rust,ignore
//! use std::path::Path;
//! use vbp::{carregar, Opcoes};
//!
//! let carga = carregar(Path::new("data"), &vbp::anos_padrao(), &Opcoes::default())?;
//! println!("{} registros", carga.registros.len());
//!
//! for resumo in &carga.anos {
//!     println!("{}: {} linhas", resumo.ano, resumo.linhas);
//! }
//! ```

pub mod correcao;
pub mod error;
pub mod limpeza;
pub mod planilha;
pub mod schema;
pub mod similar;
pub mod tabela;
pub mod types;

pub use error::VbpError;
pub use types::{Carga, Opcoes, Registro, ResumoAno};

use std::path::{Path, PathBuf};

use tracing::info;

/// Anos fonte publicados e consolidados até hoje.
///
/// O arquivo de 2012 existe no portal da SEAB mas usa outra estrutura de
/// colunas e ficou fora do dataset unificado; inclua-o explicitamente na
/// configuração se precisar dele.
pub fn anos_padrao() -> Vec<u16> {
    (2013..=2024).collect()
}

/// Nome de arquivo convencionado para um ano fonte
pub fn nome_arquivo(ano: u16) -> String {
    format!("vbp_{ano}.xlsx")
}

/// Extrai o ano de um nome de arquivo `vbp_<ano>.xlsx`
pub fn extrair_ano(caminho: &Path) -> Option<u16> {
    let nome = caminho.file_stem()?.to_str()?;
    let resto = nome.strip_prefix("vbp_")?;
    resto.parse().ok()
}

/// Lista os anos disponíveis em um diretório de dados, em ordem crescente
pub fn descobrir_anos(dir: &Path) -> Result<Vec<u16>, VbpError> {
    let mut anos = Vec::new();
    for entrada in std::fs::read_dir(dir)? {
        let caminho = entrada?.path();
        if caminho.extension().is_some_and(|e| e == "xlsx") {
            if let Some(ano) = extrair_ano(&caminho) {
                anos.push(ano);
            }
        }
    }
    anos.sort_unstable();
    anos.dedup();
    Ok(anos)
}

/// Carrega e normaliza os extratos anuais de um diretório de dados.
///
/// Os registros saem na ordem dos anos configurados, cada ano na ordem das
/// linhas do arquivo, sem deduplicação entre anos.
///
/// # Errors
///
/// [`VbpError::ArquivoAusente`] se algum ano configurado não tiver arquivo
/// (a carga exige todos), além dos erros de extração e limpeza.
pub fn carregar(dir: &Path, anos: &[u16], opcoes: &Opcoes) -> Result<Carga, VbpError> {
    // 1. Resolver e validar os arquivos antes de ler qualquer um
    let arquivos: Vec<(u16, PathBuf)> = anos
        .iter()
        .map(|ano| (*ano, dir.join(nome_arquivo(*ano))))
        .collect();

    for (ano, caminho) in &arquivos {
        if !caminho.is_file() {
            return Err(VbpError::ArquivoAusente {
                ano: *ano,
                caminho: caminho.clone(),
            });
        }
    }

    // 2. Extrair, unificar e limpar cada ano, na ordem configurada
    let mut registros = Vec::new();
    let mut resumos = Vec::with_capacity(arquivos.len());

    for (ano, caminho) in &arquivos {
        let bruta = planilha::ler(caminho)?;
        let unificada = schema::unificar(&bruta);
        let nome = nome_arquivo(*ano);
        let limpo = limpeza::limpar(&unificada, &nome, opcoes)?;

        info!(
            ano,
            linhas = limpo.registros.len(),
            correcoes_municipio = limpo.correcoes_municipio,
            correcoes_cultura = limpo.correcoes_cultura,
            "Ano carregado"
        );

        resumos.push(ResumoAno {
            ano: *ano,
            linhas: limpo.registros.len(),
            correcoes_municipio: limpo.correcoes_municipio,
            correcoes_cultura: limpo.correcoes_cultura,
        });
        registros.extend(limpo.registros);
    }

    // 3. O dataset unificado é a concatenação, nada mais
    info!(
        anos = resumos.len(),
        registros = registros.len(),
        "Carga concluída"
    );

    Ok(Carga {
        registros,
        anos: resumos,
    })
}
