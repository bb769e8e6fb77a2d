use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One income range of a slab table, taxed at a single marginal rate.
///
/// The lower bound is implicit: it is the upper bound of the preceding slab
/// in the table (or zero for the first slab). `upper_bound` of `None` marks
/// the top slab, which has no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub upper_bound: Option<Decimal>,
    pub rate_percent: Decimal,
}

impl TaxSlab {
    /// A slab ending at `upper_bound`.
    pub fn bounded(
        upper_bound: Decimal,
        rate_percent: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate_percent,
        }
    }

    /// The open-ended top slab.
    pub fn unbounded(rate_percent: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate_percent,
        }
    }
}
