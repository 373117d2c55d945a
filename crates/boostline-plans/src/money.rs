/*!
# Money helpers

Amounts travel through the engine as whole kwanzas (`i64`); these helpers
convert to and from `Decimal` at the presentation edge (CLI display, CSV
payout export, seed-file parsing).
*/

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::errors::{PlanError, PlanResult};

/// Lift a whole-kwanza amount into a `Decimal` for formatting and export.
pub fn to_decimal(amount: i64) -> Decimal {
    Decimal::from(amount)
}

/// Render an amount the way the storefront does: `15 000 Kz`.
pub fn format_kz(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped} Kz")
    } else {
        format!("{grouped} Kz")
    }
}

/// Parse a user-supplied amount (`"1500"`, `"1 500"`, `"1500.00"`) into
/// whole kwanzas. Fractional kwanzas are rejected.
pub fn parse_amount(input: &str) -> PlanResult<i64> {
    let cleaned: String = input
        .trim()
        .trim_end_matches("Kz")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let value: Decimal = cleaned
        .parse()
        .map_err(|_| PlanError::InvalidAmount(input.to_string()))?;

    if value.fract() != Decimal::ZERO {
        return Err(PlanError::InvalidAmount(format!(
            "{input}: fractional kwanzas are not supported"
        )));
    }

    value
        .to_i64()
        .ok_or_else(|| PlanError::InvalidAmount(input.to_string()))
}
