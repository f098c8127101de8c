//! Currency rounding.
//!
//! Every amount shown on a payslip goes through [`round_currency`]. The rule
//! compares the fraction left by truncation toward zero against one half,
//! then rounds up or down, which makes it asymmetric for negative amounts.

use rust_decimal::Decimal;

/// The fraction at or above which an amount rounds up.
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds a currency amount to a whole unit.
///
/// With `frac = value - trunc(value)`, the result is `ceil(value)` when
/// `frac >= 0.50` and `floor(value)` otherwise. For negative values `frac`
/// is never positive, so they always round down: `-4.6` and `-4.4` both
/// become `-5`.
///
/// The result is an integral [`Decimal`] with scale zero.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(449, 2)), Decimal::from(4));
/// assert_eq!(round_currency(Decimal::new(450, 2)), Decimal::from(5));
/// assert_eq!(round_currency(Decimal::new(-46, 1)), Decimal::from(-5));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let frac = value - value.trunc();
    let mut rounded = if frac >= HALF {
        value.ceil()
    } else {
        value.floor()
    };
    if rounded.is_zero() {
        return Decimal::ZERO;
    }
    rounded.rescale(0);
    rounded
}

/// Formats an amount as a plain integer after rounding.
///
/// No thousands separators and no currency symbol.
pub fn format_amount(value: Decimal) -> String {
    round_currency(value).to_string()
}

/// Returns the integer value of an amount after rounding.
pub fn rounded_units(value: Decimal) -> i128 {
    round_currency(value).mantissa()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fraction_below_half_rounds_down() {
        assert_eq!(round_currency(dec("4.49")), dec("4"));
        assert_eq!(round_currency(dec("4.4999999")), dec("4"));
    }

    #[test]
    fn test_fraction_at_half_rounds_up() {
        assert_eq!(round_currency(dec("4.50")), dec("5"));
        assert_eq!(round_currency(dec("0.5")), dec("1"));
    }

    #[test]
    fn test_negative_values_truncate_then_floor() {
        // trunc(-4.6) = -4, frac = -0.6 < 0.5, floor(-4.6) = -5
        assert_eq!(round_currency(dec("-4.6")), dec("-5"));
        assert_eq!(round_currency(dec("-4.4")), dec("-5"));
        assert_eq!(round_currency(dec("-0.5")), dec("-1"));
    }

    #[test]
    fn test_whole_values_are_unchanged() {
        assert_eq!(round_currency(dec("10000")), dec("10000"));
        assert_eq!(round_currency(dec("-4")), dec("-4"));
        assert_eq!(round_currency(dec("10000.00")).to_string(), "10000");
    }

    #[test]
    fn test_repeating_fraction_from_proration() {
        // 20000 * 0.5 / 30 * 30 carries a repeating tail
        let basic = (dec("20000") * dec("0.5") / dec("30")) * dec("30");
        assert_eq!(round_currency(basic), dec("10000"));
    }

    #[test]
    fn test_zero_never_displays_negative() {
        let negative_zero = dec("-0.0");
        assert_eq!(format_amount(negative_zero), "0");
        assert_eq!(format_amount(dec("0.3")), "0");
    }

    #[test]
    fn test_format_amount_is_plain_integer() {
        assert_eq!(format_amount(dec("123456.7")), "123457");
        assert_eq!(format_amount(dec("-12.2")), "-13");
    }

    #[test]
    fn test_rounded_units() {
        assert_eq!(rounded_units(dec("18449.5")), 18450);
        assert_eq!(rounded_units(dec("-4.6")), -5);
    }
}
