use crate::domain::model::CONTRACT_FEE;
use crate::utils::error::{BudgetError, Result};
use crate::utils::validation::{validate_path, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub contract: Option<ContractConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    pub fee: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub filename: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn contract_fee(&self) -> Decimal {
        self.contract
            .as_ref()
            .and_then(|c| c.fee)
            .unwrap_or(CONTRACT_FEE)
    }

    pub fn output_directory(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.directory.as_deref())
    }

    pub fn output_filename(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.filename.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let fee = self.contract_fee();
        if fee <= Decimal::ZERO {
            return Err(BudgetError::ConfigError {
                message: format!("contract.fee must be positive, got {}", fee),
            });
        }

        if let Some(directory) = self.output_directory() {
            validate_path("output.directory", directory)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[contract]
fee = "1800.00"

[output]
directory = "/tmp/orcamentos"
filename = "cliente"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.contract_fee(), dec!(1800.00));
        assert_eq!(config.output_directory(), Some("/tmp/orcamentos"));
        assert_eq!(config.output_filename(), Some("cliente"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.contract_fee(), CONTRACT_FEE);
        assert_eq!(config.output_directory(), None);
        assert_eq!(config.output_filename(), None);
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[contract]\nfee = \"0\"\n").unwrap();
        assert!(matches!(config.validate(), Err(BudgetError::ConfigError { .. })));

        let config = TomlConfig::from_toml_str("[output]\ndirectory = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[contract\nfee = ");
        assert!(matches!(result, Err(BudgetError::TomlError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nfilename = \"arquivo.csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_filename(), Some("arquivo.csv"));
    }
}
