use crate::core::budget::Budget;
use crate::domain::model::{MonthlyLineItem, SCHEDULE_MONTHS};
use crate::utils::currency::format_brl;
use std::fmt;

const PREVIEW_MONTHS: usize = 3;

/// Console summary of a budget and its schedule.
pub struct Summary<'a> {
    budget: &'a Budget,
    items: &'a [MonthlyLineItem],
}

impl<'a> Summary<'a> {
    pub fn new(budget: &'a Budget, items: &'a [MonthlyLineItem]) -> Self {
        Self { budget, items }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let budget = self.budget;
        let rent = budget.monthly_rent();

        writeln!(f, "--- RESUMO DO ORÇAMENTO ---")?;
        writeln!(f, "Imóvel: {}", budget.property().kind().label())?;
        writeln!(f, "Aluguel mensal: {}", format_brl(rent))?;
        writeln!(
            f,
            "Taxa de contrato: {} em {}x de {}",
            format_brl(budget.contract_fee()),
            budget.installments(),
            format_brl(budget.installment_amount())
        )?;
        writeln!(f, "Total do 1º mês: {}", format_brl(budget.first_month_total()))?;
        if budget.installments() < SCHEDULE_MONTHS {
            writeln!(f, "Total após quitar o contrato: {}", format_brl(rent))?;
        }

        writeln!(f)?;
        writeln!(f, "Prévia ({} primeiros meses):", PREVIEW_MONTHS)?;
        for item in self.items.iter().take(PREVIEW_MONTHS) {
            writeln!(f, "{}", preview_line(item))?;
        }
        Ok(())
    }
}

/// Renders the console summary shown after a schedule is generated.
pub fn render_summary(budget: &Budget, items: &[MonthlyLineItem]) -> String {
    Summary::new(budget, items).to_string()
}

fn preview_line(item: &MonthlyLineItem) -> String {
    let fee = if item.has_contract_fee() {
        format_brl(item.contract_fee)
    } else {
        "—".to_string()
    };
    format!(
        "Mês {:>2}: aluguel={}, parcela={}, total={}",
        item.month,
        format_brl(item.rent),
        fee,
        format_brl(item.total)
    )
}
