use crate::app::prompt::Prompter;
use crate::app::BudgetRequest;
use crate::config::cli::ensure_csv_suffix;
use crate::domain::model::{Property, PropertyKind, DEFAULT_FILENAME, MAX_INSTALLMENTS};
use crate::utils::error::Result;
use crate::utils::validation::parse_int;
use std::io::{BufRead, Write};

fn parse_bedrooms(input: &str) -> std::result::Result<u32, String> {
    match parse_int(input)? {
        n @ 1..=2 => Ok(n as u32),
        _ => Err("Somente 1 ou 2.".to_string()),
    }
}

fn parse_parking(input: &str) -> std::result::Result<u32, String> {
    let n = parse_int(input)?;
    if n < 0 {
        return Err("Não pode ser negativo.".to_string());
    }
    u32::try_from(n).map_err(|_| format!("Máximo de {} vagas.", u32::MAX))
}

fn parse_installments(input: &str) -> std::result::Result<u32, String> {
    let n = parse_int(input)?;
    if (1..=MAX_INSTALLMENTS as i64).contains(&n) {
        Ok(n as u32)
    } else {
        Err(format!("Parcelas devem estar entre 1 e {}.", MAX_INSTALLMENTS))
    }
}

fn yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "s" | "sim")
}

/// Walks the user through the questionnaire and returns a validated request.
///
/// `default_filename` replaces the built-in default when the user just presses ENTER.
pub fn collect_request<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_filename: Option<&str>,
) -> Result<BudgetRequest> {
    prompter.say("=== Orçamento Imobiliário - CSV Simples ===\n")?;
    prompter.say("Tipo de imóvel:\n1) Apartamento\n2) Casa\n3) Estúdio")?;
    let kind: PropertyKind = prompter.read_validated("Escolha [1-3]: ", |s| {
        // 選單只接受數字
        match s.trim() {
            "1" | "2" | "3" => s.parse(),
            _ => Err("Opção inválida. Escolha entre: 1, 2, 3.".to_string()),
        }
    })?;

    let property = match kind {
        PropertyKind::Apartment => {
            let rooms = prompter.read_validated("Número de quartos (1 ou 2): ", parse_bedrooms)?;
            let spaces = prompter.read_validated("Vagas de garagem: ", parse_parking)?;
            let children = yes(&prompter.read_line("Há crianças? [s/n]: ")?);
            Property::apartment(rooms, spaces, children)?
        }
        PropertyKind::House => {
            let rooms = prompter.read_validated("Número de quartos (1 ou 2): ", parse_bedrooms)?;
            let spaces = prompter.read_validated("Vagas de garagem: ", parse_parking)?;
            Property::house(rooms, spaces)?
        }
        PropertyKind::Studio => {
            let spaces = prompter.read_validated("Vagas de estacionamento: ", parse_parking)?;
            Property::studio(spaces)
        }
    };

    let installments = prompter.read_validated(
        &format!("Nº de parcelas do contrato [1..{}]: ", MAX_INSTALLMENTS),
        parse_installments,
    )?;

    let default_name = default_filename.unwrap_or(DEFAULT_FILENAME);
    let answer = prompter.read_line(&format!("Nome do arquivo CSV (ENTER = {}): ", default_name))?;
    let file_name = if answer.trim().is_empty() {
        ensure_csv_suffix(default_name)
    } else {
        ensure_csv_suffix(&answer)
    };

    tracing::info!(kind = %kind, installments, file = %file_name, "questionnaire completed");

    Ok(BudgetRequest {
        property,
        installments,
        file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BudgetError;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<BudgetRequest>, String) {
        let mut prompter = Prompter::new(Cursor::new(script.to_string()), Vec::new());
        let result = collect_request(&mut prompter, None);
        let output = String::from_utf8(prompter.into_writer()).unwrap();
        (result, output)
    }

    #[test]
    fn test_apartment_questionnaire() {
        let (result, _) = run("1\n2\n1\nn\n3\ncliente\n");
        let request = result.unwrap();

        assert_eq!(request.property, Property::apartment(2, 1, false).unwrap());
        assert_eq!(request.installments, 3);
        assert_eq!(request.file_name, "cliente.csv");
    }

    #[test]
    fn test_children_answer_accepts_sim() {
        let (result, _) = run("1\n1\n0\nSIM\n1\n\n");
        let request = result.unwrap();
        assert_eq!(request.property, Property::apartment(1, 0, true).unwrap());
        assert_eq!(request.file_name, DEFAULT_FILENAME);
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let (result, output) = run("9\n2\n3\n2\n-1\n0\n6\n0\n5\nx.csv\n");
        let request = result.unwrap();

        assert_eq!(request.property, Property::house(2, 0).unwrap());
        assert_eq!(request.installments, 5);
        assert!(output.contains("Opção inválida. Escolha entre: 1, 2, 3."));
        assert!(output.contains("Somente 1 ou 2."));
        assert!(output.contains("Não pode ser negativo."));
        assert_eq!(output.matches("Parcelas devem estar entre 1 e 5.").count(), 2);
    }

    #[test]
    fn test_studio_skips_bedrooms() {
        let (result, output) = run("3\nquatro\n4\n2\n\n");
        let request = result.unwrap();

        assert_eq!(request.property, Property::studio(4));
        assert!(!output.contains("quartos"));
        assert!(output.contains("Entrada inválida. Digite um número inteiro."));
    }

    #[test]
    fn test_parking_messages() {
        assert_eq!(parse_parking("3"), Ok(3));
        assert_eq!(parse_parking("-1"), Err("Não pode ser negativo.".to_string()));
        assert_eq!(parse_parking("4294967296"), Err("Máximo de 4294967295 vagas.".to_string()));
    }

    #[test]
    fn test_configured_default_filename() {
        let mut prompter = Prompter::new(Cursor::new("3\n0\n1\n\n"), Vec::new());
        let request = collect_request(&mut prompter, Some("padrao")).unwrap();
        assert_eq!(request.file_name, "padrao.csv");
    }

    #[test]
    fn test_truncated_input() {
        let (result, _) = run("2\n1\n");
        assert!(matches!(result, Err(BudgetError::InputClosed { .. })));
    }
}
