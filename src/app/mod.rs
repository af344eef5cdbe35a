// Application layer: the interactive questionnaire that feeds the engine.

pub mod prompt;
pub mod session;

use crate::domain::model::Property;

/// Everything needed for one run, already validated by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetRequest {
    pub property: Property,
    pub installments: u32,
    pub file_name: String,
}
