use crate::domain::model::MonthlyLineItem;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Destination for a generated schedule.
pub trait ScheduleStorage {
    /// Persists the schedule under `file_name` and returns where it ended up.
    fn write_schedule(&self, file_name: &str, items: &[MonthlyLineItem]) -> Result<PathBuf>;
}
