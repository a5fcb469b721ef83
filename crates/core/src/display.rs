//! Display fallbacks and currency formatting shared by API responses.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown for projects without a name.
pub const UNNAMED_PROJECT: &str = "Unnamed Project";

/// Shown for draw requests whose project could not be joined.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Shown in place of an amount that was never entered.
pub const NO_AMOUNT: &str = "-";

/// Project name, or [`UNNAMED_PROJECT`] when absent or blank.
pub fn project_display_name(name: Option<&str>) -> &str {
    match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => UNNAMED_PROJECT,
    }
}

/// Joined project name on a draw request, or [`UNKNOWN_PROJECT`].
pub fn draw_project_name(name: Option<&str>) -> &str {
    match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => UNKNOWN_PROJECT,
    }
}

/// Format an amount as US dollars with thousands separators and two decimals,
/// e.g. `$1,234.50`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// [`format_usd`] for an optional amount; absent renders as [`NO_AMOUNT`],
/// never as zero.
pub fn format_amount(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| NO_AMOUNT.to_string(), format_usd)
}
