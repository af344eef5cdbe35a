use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInputValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Parcelas devem estar entre 1 e {max}.")]
    InvalidInstallments { count: u32, max: u32 },

    #[error("Input closed while waiting for {prompt}")]
    InputClosed { prompt: String },
}

impl BudgetError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        BudgetError::InvalidInputValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BudgetError::IoError(e) => format!("Erro ao salvar o arquivo: {}", e),
            BudgetError::CsvError(e) => format!("Erro ao gerar o CSV: {}", e),
            BudgetError::TomlError(e) => format!("Arquivo de configuração inválido: {}", e),
            BudgetError::ConfigError { message } => format!("Configuração inválida: {}", message),
            BudgetError::InvalidInputValue { field, value, reason } => {
                format!("Valor inválido para {}: '{}' ({})", field, value, reason)
            }
            BudgetError::InvalidInstallments { .. } => self.to_string(),
            BudgetError::InputClosed { .. } => "Entrada encerrada antes do fim do questionário.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BudgetError::IoError(_) | BudgetError::CsvError(_) => {
                "Check that the output directory exists and is writable"
            }
            BudgetError::TomlError(_) | BudgetError::ConfigError { .. } => {
                "Fix the configuration file or remove --config to use the defaults"
            }
            BudgetError::InvalidInputValue { .. } | BudgetError::InvalidInstallments { .. } => {
                "Run again with values inside the allowed ranges"
            }
            BudgetError::InputClosed { .. } => {
                "Run interactively or pass --property and --installments"
            }
        }
    }

    /// 依錯誤類型決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            BudgetError::InvalidInputValue { .. } | BudgetError::InvalidInstallments { .. } => 2,
            BudgetError::TomlError(_) | BudgetError::ConfigError { .. } => 3,
            BudgetError::IoError(_) | BudgetError::CsvError(_) => 4,
            BudgetError::InputClosed { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installment_error_names_range() {
        let err = BudgetError::InvalidInstallments { count: 6, max: 5 };
        assert_eq!(err.to_string(), "Parcelas devem estar entre 1 e 5.");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BudgetError = io.into();
        assert!(err.user_friendly_message().contains("denied"));
        assert_eq!(err.exit_code(), 4);
    }
}
