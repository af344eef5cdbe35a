pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::BudgetRequest;
#[cfg(feature = "cli")]
use crate::config::cli::ensure_csv_suffix;
#[cfg(feature = "cli")]
use crate::domain::model::{Property, PropertyKind, DEFAULT_FILENAME};
#[cfg(feature = "cli")]
use crate::utils::error::{BudgetError, Result};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "rental-budget")]
#[command(about = "Orçamento imobiliário: aluguel mensal e parcelas da taxa de contrato em CSV")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Property type (apartment, house, studio); skips the interactive prompts
    #[arg(long)]
    pub property: Option<PropertyKind>,

    /// Bedrooms for apartments and houses (1 or 2)
    #[arg(long, requires = "property")]
    pub bedrooms: Option<u32>,

    /// Parking spaces
    #[arg(long, requires = "property")]
    pub parking: Option<u32>,

    /// The tenant has no children (apartments only)
    #[arg(long, requires = "property")]
    pub no_children: bool,

    /// Number of contract-fee installments (1 to 5)
    #[arg(long, requires = "property")]
    pub installments: Option<u32>,

    /// CSV file name; `.csv` is appended when missing
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory for the CSV file (defaults to the desktop)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn is_interactive(&self) -> bool {
        self.property.is_none()
    }

    /// Builds the request straight from flags. Only meaningful when `--property` was given.
    pub fn to_request(&self, default_filename: Option<&str>) -> Result<BudgetRequest> {
        let kind = self.property.ok_or_else(|| BudgetError::ConfigError {
            message: "--property is required in non-interactive mode".to_string(),
        })?;
        let installments = self.installments.ok_or_else(|| BudgetError::ConfigError {
            message: "--installments is required together with --property".to_string(),
        })?;

        let property = Property::from_parts(
            kind,
            self.bedrooms.unwrap_or(1),
            self.parking.unwrap_or(0),
            !self.no_children,
        )?;

        let file_name = self
            .output
            .as_deref()
            .or(default_filename)
            .unwrap_or(DEFAULT_FILENAME);

        Ok(BudgetRequest {
            property,
            installments,
            file_name: ensure_csv_suffix(file_name),
        })
    }
}
