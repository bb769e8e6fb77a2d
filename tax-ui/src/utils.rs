use rust_decimal::Decimal;
use tax_core::calculations::common::round_to_paise;

/// Marker prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount as rupees with exactly two decimal places.
pub fn format_currency(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", round_to_paise(amount))
}

/// Formats a percentage rate without trailing zeros (e.g. `5%`, `3.75%`).
pub fn format_rate(rate_percent: Decimal) -> String {
    format!("{}%", rate_percent.normalize())
}
