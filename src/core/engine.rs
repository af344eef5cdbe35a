use crate::app::BudgetRequest;
use crate::core::budget::Budget;
use crate::core::report::render_summary;
use crate::core::{MonthlyLineItem, ScheduleStorage};
use crate::domain::model::CONTRACT_FEE;
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct BudgetOutcome {
    pub budget: Budget,
    pub items: Vec<MonthlyLineItem>,
    pub output_path: PathBuf,
    pub summary: String,
}

pub struct BudgetEngine<S: ScheduleStorage> {
    storage: S,
    contract_fee: Decimal,
}

impl<S: ScheduleStorage> BudgetEngine<S> {
    pub fn new(storage: S) -> Self {
        Self::with_contract_fee(storage, CONTRACT_FEE)
    }

    pub fn with_contract_fee(storage: S, contract_fee: Decimal) -> Self {
        Self {
            storage,
            contract_fee,
        }
    }

    /// Builds the budget, generates the schedule and persists it.
    ///
    /// The summary is only rendered once the file is written, so a failed write never
    /// shows a report for a file that does not exist.
    pub fn run(&self, request: BudgetRequest) -> Result<BudgetOutcome> {
        let budget = Budget::with_contract_fee(request.property, request.installments, self.contract_fee)?;

        tracing::info!(
            "Budget for {} with {} installment(s): rent {}, installment {}",
            budget.property().kind(),
            budget.installments(),
            budget.monthly_rent(),
            budget.installment_amount()
        );
        let drift = budget.rounding_drift();
        if !drift.is_zero() {
            tracing::debug!("Contract fee rounding drift: {}", drift);
        }

        let items = budget.schedule();
        let output_path = self.storage.write_schedule(&request.file_name, &items)?;
        tracing::info!("Schedule written to {}", output_path.display());

        let summary = render_summary(&budget, &items);

        Ok(BudgetOutcome {
            budget,
            items,
            output_path,
            summary,
        })
    }
}
