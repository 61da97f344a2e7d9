//! Arithmetic helpers shared by invoice drafts and display code.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Total for one invoice line.
pub fn line_total(quantity: i64, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

/// Formats a monetary amount with two decimal places. Excess precision is
/// truncated, never rounded, so the shown figure is always covered by the
/// stored amount.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.trunc_with_scale(DISPLAY_DECIMAL_PRECISION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(3, dec!(2.50)), dec!(7.50));
        assert_eq!(line_total(0, dec!(99)), Decimal::ZERO);
    }

    #[test]
    fn test_format_amount_truncates_to_two_places() {
        assert_eq!(format_amount(dec!(7.5)), "7.50");
        assert_eq!(format_amount(dec!(7.005)), "7.00");
        assert_eq!(format_amount(dec!(7.999)), "7.99");
        assert_eq!(format_amount(dec!(-3.2)), "-3.20");
    }
}
