//! Exportação CSV do dataset canônico
//!
//! Contrato do arquivo: delimitador ponto-e-vírgula, UTF-8 com BOM (o
//! Excel em pt-BR exige o BOM para detectar o encoding), cabeçalho com os
//! nomes originais das colunas, uma linha por registro, sem coluna de
//! índice.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;
use vbp::Registro;

/// Marca de ordem de bytes UTF-8
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Cabeçalho do CSV, na ordem dos campos de [`Registro`].
/// Escrito explicitamente para que uma exportação sem registros ainda
/// saia com cabeçalho.
const CABECALHO: [&str; 17] = [
    "Safra",
    "Safra_ordem",
    "Código Município",
    "Município",
    "Grupo",
    "Subgrupo",
    "Subg - detalhe",
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

/// Grava os registros em um arquivo CSV
pub fn exportar<'a, I>(caminho: &Path, registros: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Registro>,
{
    let mut arquivo = File::create(caminho)
        .with_context(|| format!("Failed to create output file: {}", caminho.display()))?;

    arquivo.write_all(BOM)?;

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(arquivo);

    writer.write_record(CABECALHO)?;

    let mut linhas = 0;
    for registro in registros {
        writer.serialize(registro)?;
        linhas += 1;
    }
    writer.flush()?;

    info!(caminho = %caminho.display(), linhas, "CSV exportado");

    Ok(linhas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registro() -> Registro {
        Registro {
            safra: "2019-20".to_string(),
            safra_ordem: 2019,
            codigo_municipio: Some("4106902".to_string()),
            municipio: "CURITIBA".to_string(),
            grupo: Some("Grãos".to_string()),
            subgrupo: None,
            subgrupo_detalhe: None,
            regiao: Some("CURITIBA".to_string()),
            codigo_cultura: Some("101".to_string()),
            cultura: "SOJA".to_string(),
            unidade: Some("ha".to_string()),
            area_ha: Some(1.5),
            rebanho: None,
            abate_comercializacao: Some(0.0),
            peso: None,
            producao: Some(4.2),
            vbp: Some(1234.56),
        }
    }

    #[test]
    fn test_bom_e_delimitador() {
        let dir = tempfile::tempdir().unwrap();
        let caminho = dir.path().join("dados-vbp.csv");

        let linhas = exportar(&caminho, [&registro()]).unwrap();
        assert_eq!(linhas, 1);

        let bytes = std::fs::read(&caminho).unwrap();
        assert!(bytes.starts_with(BOM), "deve começar com o BOM UTF-8");

        let conteudo = String::from_utf8(bytes[BOM.len()..].to_vec()).unwrap();
        let mut linhas = conteudo.lines();

        let cabecalho = linhas.next().unwrap();
        assert!(cabecalho.starts_with("Safra;Safra_ordem;"));
        assert!(cabecalho.contains("Município"));
        assert!(cabecalho.contains("Área (ha)") || cabecalho.contains("\"Área (ha)\""));
        assert!(cabecalho.contains("VBP"));

        let dados = linhas.next().unwrap();
        assert!(dados.starts_with("2019-20;2019;"));
        assert!(dados.contains(";CURITIBA;"));
        assert!(dados.contains(";1234.56"));
    }

    #[test]
    fn test_opcionais_ausentes_ficam_vazios() {
        let dir = tempfile::tempdir().unwrap();
        let caminho = dir.path().join("dados-vbp.csv");

        let mut r = registro();
        r.rebanho = None;
        r.vbp = None;
        exportar(&caminho, [&r]).unwrap();

        let conteudo = std::fs::read_to_string(&caminho).unwrap();
        let dados = conteudo.lines().nth(1).unwrap();
        // VBP é a última coluna: linha termina em ';'
        assert!(dados.ends_with(';'));
    }

    #[test]
    fn test_sem_registros_so_cabecalho() {
        let dir = tempfile::tempdir().unwrap();
        let caminho = dir.path().join("vazio.csv");

        let linhas = exportar(&caminho, std::iter::empty::<&Registro>()).unwrap();
        assert_eq!(linhas, 0);

        let conteudo = std::fs::read_to_string(&caminho).unwrap();
        assert_eq!(conteudo.lines().count(), 1);
    }
}
