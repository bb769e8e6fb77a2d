//! Text rendering of regime comparisons.

use std::fmt::Write;

use tax_core::calculations::common::round_to_paise;
use tax_core::{Regime, RegimeComparison, RegimeTables, SlabCharge, SlabTaxCalculator};

use crate::utils::{format_currency, format_rate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show how much of the income falls into each slab.
    pub breakdown: bool,
}

/// Renders the new regime first, then the old regime, then the difference.
pub fn render_comparison(
    comparison: &RegimeComparison,
    tables: &RegimeTables,
    options: RenderOptions,
) -> String {
    let mut out = String::new();

    for regime in [Regime::New, Regime::Old] {
        let result = comparison.result(regime);
        let _ = writeln!(out, "{} Tax: {}", regime.label(), format_currency(result.tax_owed));
        let _ = writeln!(
            out,
            "Salary After Tax: {}",
            format_currency(result.income_after_tax)
        );
        let _ = writeln!(
            out,
            "Effective Rate: {}",
            format_rate(round_to_paise(result.effective_rate_percent()))
        );

        if options.breakdown {
            let charges =
                SlabTaxCalculator::new(tables.get(regime)).breakdown(&comparison.income);
            for charge in &charges {
                let _ = writeln!(out, "  {}", render_charge(charge));
            }
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Tax Difference: {}",
        format_currency(comparison.tax_difference)
    );
    let _ = match comparison.cheaper_regime() {
        Some(regime) => writeln!(out, "Lower tax under the {}", regime.label()),
        None => writeln!(out, "Both regimes owe the same tax"),
    };

    out
}

fn render_charge(charge: &SlabCharge) -> String {
    let range = match charge.upper_bound {
        Some(upper) => format!(
            "{} to {}",
            format_currency(charge.lower_bound),
            format_currency(upper)
        ),
        None => format!("above {}", format_currency(charge.lower_bound)),
    };

    format!(
        "{range} @ {}: {} on {}",
        format_rate(charge.rate_percent),
        format_currency(charge.tax),
        format_currency(charge.taxable_amount)
    )
}
