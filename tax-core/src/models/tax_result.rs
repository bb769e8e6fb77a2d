use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax owed on one income under one slab table.
///
/// Values are unrounded; rounding to two places is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub income: Decimal,
    pub tax_owed: Decimal,
    pub income_after_tax: Decimal,
}

impl TaxResult {
    pub fn new(
        income: Decimal,
        tax_owed: Decimal,
    ) -> Self {
        Self {
            income,
            tax_owed,
            income_after_tax: income - tax_owed,
        }
    }

    /// Tax as a percentage of income; zero when income is zero.
    pub fn effective_rate_percent(&self) -> Decimal {
        if self.income.is_zero() {
            Decimal::ZERO
        } else {
            self.tax_owed / self.income * Decimal::ONE_HUNDRED
        }
    }
}

/// Tax charged within a single slab for a given income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabCharge {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate_percent: Decimal,
    /// Portion of income falling inside this slab.
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}
