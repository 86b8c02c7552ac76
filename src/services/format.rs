/// Maximum number of digits printed after the decimal point.
pub const MAX_FRACTION_DIGITS: usize = 4;

/// Format a converted value for display.
///
/// Output is locale-independent (`.` separator, no grouping, never scientific
/// notation) with at most [`MAX_FRACTION_DIGITS`] fractional digits and no
/// trailing zeros: `1.5` rather than `1.5000`, `2` rather than `2.0000`.
///
/// Rounding is round-half-to-even applied to the exact binary value of the
/// `f64`, which is what `{:.4}` does. A value whose digits all round away
/// (including `-0.0`) prints as `0`, never `-0`.
pub fn format_decimal(value: f64) -> String {
    let mut text = format!("{:.*}", MAX_FRACTION_DIGITS, value);

    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }

    if text == "-0" {
        text = "0".to_string();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!(format_decimal(2.0), "2");
        assert_eq!(format_decimal(1000.0), "1000");
        assert_eq!(format_decimal(0.0), "0");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format_decimal(1.5), "1.5");
        assert_eq!(format_decimal(1609.34), "1609.34");
        assert_eq!(format_decimal(0.25), "0.25");
    }

    #[test]
    fn test_rounds_to_four_places() {
        assert_eq!(format_decimal(10.763910761154856), "10.7639");
        assert_eq!(format_decimal(3.280839895013123), "3.2808");
        assert_eq!(format_decimal(0.00006), "0.0001");
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // 0.03125 and 0.09375 are exactly representable, so these are true ties.
        assert_eq!(format_decimal(0.03125), "0.0312");
        assert_eq!(format_decimal(0.09375), "0.0938");
    }

    #[test]
    fn test_tiny_and_negative_zero_print_as_zero() {
        assert_eq!(format_decimal(-0.0), "0");
        assert_eq!(format_decimal(0.00001), "0");
        assert_eq!(format_decimal(-0.00001), "0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_decimal(-1.5), "-1.5");
        assert_eq!(format_decimal(-304.8), "-304.8");
    }

    #[test]
    fn test_large_values_are_not_scientific() {
        assert_eq!(format_decimal(1e15), "1000000000000000");
        assert_eq!(format_decimal(2589975.2356), "2589975.2356");
    }

    #[test]
    fn test_leading_zero_kept() {
        assert_eq!(format_decimal(0.5), "0.5");
    }
}
