pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::BudgetRequest;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{budget::Budget, engine::BudgetEngine};
pub use domain::model::{MonthlyLineItem, Property, PropertyKind, CONTRACT_FEE, MAX_INSTALLMENTS};
pub use utils::error::{BudgetError, Result};
