pub mod budget;
pub mod engine;
pub mod pricing;
pub mod report;

pub use crate::domain::model::{MonthlyLineItem, Property, PropertyKind};
pub use crate::domain::ports::ScheduleStorage;
pub use crate::utils::error::Result;
