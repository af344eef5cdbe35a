use crate::domain::model::{MonthlyLineItem, DEFAULT_FILENAME};
use crate::domain::ports::ScheduleStorage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

pub const CSV_HEADER: [&str; 4] = ["mes", "aluguel", "parcela_contrato", "total"];

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage rooted at the user's desktop directory.
    pub fn desktop() -> Self {
        Self::new(desktop_dir())
    }
}

impl ScheduleStorage for LocalStorage {
    fn write_schedule(&self, file_name: &str, items: &[MonthlyLineItem]) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        let full_path = self.base_path.join(file_name);

        tracing::debug!("Writing {} rows to {}", items.len(), full_path.display());
        let mut writer = csv::Writer::from_path(&full_path)?;
        writer.write_record(CSV_HEADER)?;
        for item in items {
            writer.write_record([
                item.month.to_string(),
                format!("{:.2}", item.rent),
                format!("{:.2}", item.contract_fee),
                format!("{:.2}", item.total),
            ])?;
        }
        writer.flush()?;

        Ok(full_path)
    }
}

/// Resolves the desktop folder through the platform lookup (known folders on Windows,
/// XDG user dirs on Linux), then `<home>/Desktop`, then the current directory.
pub fn desktop_dir() -> PathBuf {
    resolve_desktop(dirs::desktop_dir(), dirs::home_dir())
}

fn resolve_desktop(desktop: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match (desktop, home) {
        (Some(desktop), _) => desktop,
        (None, Some(home)) => {
            tracing::warn!("No desktop folder registered, using {}", home.join("Desktop").display());
            home.join("Desktop")
        }
        (None, None) => {
            tracing::warn!("No home directory found, writing to the current directory");
            PathBuf::from(".")
        }
    }
}

/// Trims the name, falls back to the default when blank and appends `.csv` when missing.
pub fn ensure_csv_suffix(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    if name.to_lowercase().ends_with(".csv") {
        name.to_string()
    } else {
        format!("{}.csv", name)
    }
}
