use crate::domain::model::{MonthlyLineItem, Property, CONTRACT_FEE, MAX_INSTALLMENTS, SCHEDULE_MONTHS};
use crate::utils::error::{BudgetError, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// A property plus the number of months over which the contract fee is split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    property: Property,
    installments: u32,
    contract_fee: Decimal,
}

impl Budget {
    pub fn new(property: Property, installments: u32) -> Result<Self> {
        Self::with_contract_fee(property, installments, CONTRACT_FEE)
    }

    pub fn with_contract_fee(property: Property, installments: u32, contract_fee: Decimal) -> Result<Self> {
        let budget = Self {
            property,
            installments,
            contract_fee,
        };
        budget.validate()?;
        Ok(budget)
    }

    /// Checks the installment count against `1..=MAX_INSTALLMENTS`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_INSTALLMENTS).contains(&self.installments) {
            return Err(BudgetError::InvalidInstallments {
                count: self.installments,
                max: MAX_INSTALLMENTS,
            });
        }
        Ok(())
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn installments(&self) -> u32 {
        self.installments
    }

    pub fn contract_fee(&self) -> Decimal {
        self.contract_fee
    }

    pub fn monthly_rent(&self) -> Decimal {
        self.property.monthly_rent().round_dp(2)
    }

    /// Each installment is rounded on its own; the cent lost or gained across
    /// all installments (e.g. 3 x 666.67 = 2000.01) is not redistributed.
    pub fn installment_amount(&self) -> Decimal {
        (self.contract_fee / Decimal::from(self.installments)).round_dp(2)
    }

    pub fn schedule(&self) -> Vec<MonthlyLineItem> {
        let rent = self.monthly_rent();
        let installment = self.installment_amount();
        debug!(%rent, %installment, installments = self.installments, "generating schedule");

        (1..=SCHEDULE_MONTHS)
            .map(|month| {
                let fee = if month <= self.installments {
                    installment
                } else {
                    Decimal::ZERO
                };
                MonthlyLineItem::new(month, rent, fee)
            })
            .collect()
    }

    pub fn first_month_total(&self) -> Decimal {
        self.monthly_rent() + self.installment_amount()
    }

    /// What the contract fee actually adds up to after per-installment rounding.
    pub fn charged_contract_fee(&self) -> Decimal {
        self.installment_amount() * Decimal::from(self.installments)
    }

    pub fn rounding_drift(&self) -> Decimal {
        self.charged_contract_fee() - self.contract_fee
    }
}
