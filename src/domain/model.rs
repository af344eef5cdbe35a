use crate::utils::error::{BudgetError, Result};
use crate::utils::validation::validate_bedrooms;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// One-off contract fee, in reais.
pub const CONTRACT_FEE: Decimal = dec!(2000.00);
pub const MAX_INSTALLMENTS: u32 = 5;
pub const SCHEDULE_MONTHS: u32 = 12;
pub const DEFAULT_FILENAME: &str = "parcelas_orcamento.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Apartment,
    House,
    Studio,
}

impl PropertyKind {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyKind::Apartment => "Apartamento",
            PropertyKind::House => "Casa",
            PropertyKind::Studio => "Estúdio",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Apartment => write!(f, "apartment"),
            PropertyKind::House => write!(f, "house"),
            PropertyKind::Studio => write!(f, "studio"),
        }
    }
}

impl FromStr for PropertyKind {
    type Err = String;

    /// Accepts the menu numbers as well as English or Portuguese names.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "apartment" | "apartamento" => Ok(PropertyKind::Apartment),
            "2" | "house" | "casa" => Ok(PropertyKind::House),
            "3" | "studio" | "estudio" | "estúdio" => Ok(PropertyKind::Studio),
            _ => Err("Opção inválida. Escolha entre: 1, 2, 3.".to_string()),
        }
    }
}

/// A rentable property. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Apartment {
        bedrooms: u32,
        parking: u32,
        has_children: bool,
    },
    House {
        bedrooms: u32,
        parking: u32,
    },
    Studio {
        parking: u32,
    },
}

impl Property {
    pub fn apartment(bedrooms: u32, parking: u32, has_children: bool) -> Result<Self> {
        validate_bedrooms(bedrooms)?;
        Ok(Property::Apartment {
            bedrooms,
            parking,
            has_children,
        })
    }

    pub fn house(bedrooms: u32, parking: u32) -> Result<Self> {
        validate_bedrooms(bedrooms)?;
        Ok(Property::House { bedrooms, parking })
    }

    pub fn studio(parking: u32) -> Self {
        Property::Studio { parking }
    }

    /// Builds a property of `kind`, ignoring attributes that kind does not have.
    pub fn from_parts(kind: PropertyKind, bedrooms: u32, parking: u32, has_children: bool) -> Result<Self> {
        match kind {
            PropertyKind::Apartment => Property::apartment(bedrooms, parking, has_children),
            PropertyKind::House => Property::house(bedrooms, parking),
            PropertyKind::Studio => Ok(Property::studio(parking)),
        }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            Property::Apartment { .. } => PropertyKind::Apartment,
            Property::House { .. } => PropertyKind::House,
            Property::Studio { .. } => PropertyKind::Studio,
        }
    }
}

/// One row of the twelve-month schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyLineItem {
    pub month: u32,
    pub rent: Decimal,
    pub contract_fee: Decimal,
    pub total: Decimal,
}

impl MonthlyLineItem {
    pub fn new(month: u32, rent: Decimal, contract_fee: Decimal) -> Self {
        Self {
            month,
            rent,
            contract_fee,
            total: (rent + contract_fee).round_dp(2),
        }
    }

    pub fn has_contract_fee(&self) -> bool {
        !self.contract_fee.is_zero()
    }
}

impl TryFrom<&str> for PropertyKind {
    type Error = BudgetError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
            .map_err(|reason: String| BudgetError::invalid_input("property", s, reason))
    }
}
