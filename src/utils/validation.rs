use crate::utils::error::{BudgetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BudgetError::invalid_input(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(BudgetError::invalid_input(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

/// Apartments and houses come with one or two bedrooms only.
pub fn validate_bedrooms(bedrooms: u32) -> Result<()> {
    if !(1..=2).contains(&bedrooms) {
        return Err(BudgetError::invalid_input("bedrooms", bedrooms, "Somente 1 ou 2."));
    }
    Ok(())
}

/// Parses a whole number the way the prompts expect it: surrounding blanks are ignored,
/// signs are accepted so that negative counts get a range message instead of a parse one.
pub fn parse_int(input: &str) -> std::result::Result<i64, String> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| "Entrada inválida. Digite um número inteiro.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bedrooms() {
        assert!(validate_bedrooms(1).is_ok());
        assert!(validate_bedrooms(2).is_ok());
        assert!(validate_bedrooms(0).is_err());
        assert!(validate_bedrooms(3).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "/tmp/out").is_ok());
        assert!(validate_path("output.directory", "   ").is_err());
        assert!(validate_path("output.directory", "bad\0path").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 3 "), Ok(3));
        assert_eq!(parse_int("-1"), Ok(-1));
        assert!(parse_int("dois").is_err());
        assert!(parse_int("").is_err());
    }
}
