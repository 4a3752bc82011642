//! Derivação da chave de safra
//!
//! Os arquivos fonte gravam a safra de formas variadas: "2019/20",
//! "2019-20", "201920", às vezes como número. Daqui sai o par canônico
//! (rótulo "YYYY-YY", ordem YYYY). Um único algoritmo (extração por
//! regex da primeira sequência de 4 dígitos) alimenta os dois campos,
//! para que rótulo e ordem nunca divirjam sobre entrada malformada.

use std::sync::OnceLock;

use regex::Regex;

/// Chave canônica de uma safra
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaveSafra {
    /// Rótulo de exibição, "YYYY-YY" quando há ano final, senão "YYYY"
    pub rotulo: String,

    /// Ano inicial da safra; ordena cronologicamente
    pub ordem: u16,
}

fn padrao() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4})(\d{2})?").expect("regex de safra inválida"))
}

/// Deriva a chave de safra de um texto fonte.
///
/// Separadores `/` e `-` são removidos antes da extração, de modo que
/// "2019/20", "2019-20" e "201920" produzem a mesma chave. Retorna `None`
/// quando o texto não contém nenhuma sequência de 4 dígitos; o chamador
/// decide a política (na carga isso é fatal, ver
/// [`crate::VbpError::SafraInvalida`]).
pub fn derivar(texto: &str) -> Option<ChaveSafra> {
    let compacto: String = texto
        .trim()
        .chars()
        .filter(|c| *c != '/' && *c != '-')
        .collect();

    let capturas = padrao().captures(&compacto)?;

    let ano = capturas.get(1)?.as_str();
    let ordem: u16 = ano.parse().ok()?;

    let rotulo = match capturas.get(2) {
        Some(fim) => format!("{}-{}", ano, fim.as_str()),
        None => ano.to_string(),
    };

    Some(ChaveSafra { rotulo, ordem })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chave(rotulo: &str, ordem: u16) -> ChaveSafra {
        ChaveSafra {
            rotulo: rotulo.to_string(),
            ordem,
        }
    }

    #[test]
    fn test_formatos_equivalentes() {
        for entrada in ["2019/20", "2019-20", "201920"] {
            assert_eq!(
                derivar(entrada),
                Some(chave("2019-20", 2019)),
                "entrada {entrada:?}"
            );
        }
    }

    #[test]
    fn test_sem_ano_final() {
        assert_eq!(derivar("2013"), Some(chave("2013", 2013)));
    }

    #[test]
    fn test_com_espacos() {
        assert_eq!(derivar("  2021/22 "), Some(chave("2021-22", 2021)));
    }

    #[test]
    fn test_digitos_no_meio_do_texto() {
        assert_eq!(derivar("Safra 2018/19"), Some(chave("2018-19", 2018)));
    }

    #[test]
    fn test_rotulo_e_ordem_concordam() {
        for entrada in ["2013/14", "2014-15", "201516", "safra 2017/18"] {
            let c = derivar(entrada).unwrap();
            assert_eq!(c.rotulo[..4].parse::<u16>().unwrap(), c.ordem);
        }
    }

    #[test]
    fn test_malformada() {
        assert_eq!(derivar(""), None);
        assert_eq!(derivar("safra"), None);
        assert_eq!(derivar("abc 123"), None);
    }

    #[test]
    fn test_separadores_colapsam_antes_da_extracao() {
        // "19/20" compacta para "1920": quatro dígitos válidos, ainda que
        // o arquivo tenha truncado o ano. A política é do algoritmo único.
        assert_eq!(derivar("19/20"), Some(chave("1920", 1920)));
    }
}
