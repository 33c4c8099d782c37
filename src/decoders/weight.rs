// Exact decimal scaling of weight fields

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept on every decoded weight
pub const WEIGHT_DECIMALS: u32 = 2;

/// Largest implied-decimal exponent a single digit can carry
const MAX_EXPONENT: u32 = 9;

/// Scale a digit field by 10^-exponent and round to two decimal places
/// Example: ("001250", 3) -> 1.25, ("0150", 2) -> 1.50
///
/// Rounds half away from zero. Returns None for an empty or non-numeric field.
pub fn scale_weight(digits: &str, exponent: u32) -> Option<Decimal> {
    if exponent > MAX_EXPONENT {
        return None;
    }

    let raw = match digits.parse::<i64>() {
        Ok(raw) if digits.bytes().all(|b| b.is_ascii_digit()) => raw,
        _ => {
            tracing::warn!("Ignoring unparseable weight field {:?}", digits);
            return None;
        }
    };

    let mut weight = Decimal::new(raw, exponent)
        .round_dp_with_strategy(WEIGHT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    weight.rescale(WEIGHT_DECIMALS);
    Some(weight)
}

/// Read a single exponent digit
pub fn exponent_digit(field: &str) -> Option<u32> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_scale_weight() {
        assert_eq!(scale_weight("001250", 3), Some(dec("1.25")));
        assert_eq!(scale_weight("0150", 2), Some(dec("1.50")));
        assert_eq!(scale_weight("000125", 1), Some(dec("12.5")));
        assert_eq!(scale_weight("000000", 1), Some(Decimal::ZERO));
        assert_eq!(scale_weight("123456", 0), Some(dec("123456")));
    }

    #[test]
    fn test_scale_weight_two_places() {
        let weight = scale_weight("0150", 2).unwrap();
        assert_eq!(weight.scale(), 2);
        assert_eq!(weight.to_string(), "1.50");

        let weight = scale_weight("000125", 1).unwrap();
        assert_eq!(weight.to_string(), "12.50");
    }

    #[test]
    fn test_scale_weight_rounding() {
        // Exact midpoints round away from zero
        assert_eq!(scale_weight("001235", 4), Some(dec("0.12")));
        assert_eq!(scale_weight("001250", 4), Some(dec("0.13")));
        assert_eq!(scale_weight("001249", 4), Some(dec("0.12")));
        assert_eq!(scale_weight("000004", 3), Some(dec("0.00")));
        assert_eq!(scale_weight("000005", 3), Some(dec("0.01")));
    }

    #[test]
    fn test_scale_weight_no_float_artifacts() {
        // 0.1 + 0.2 style artifacts would show up here with binary floats
        assert_eq!(scale_weight("000030", 2).unwrap().to_string(), "0.30");
        assert_eq!(scale_weight("1005", 3).unwrap().to_string(), "1.01");
    }

    #[test]
    fn test_scale_weight_rejects_bad_fields() {
        assert_eq!(scale_weight("", 2), None);
        assert_eq!(scale_weight("12a4", 2), None);
        assert_eq!(scale_weight("+123", 2), None);
        assert_eq!(scale_weight("0150", 10), None);
    }

    #[test]
    fn test_exponent_digit() {
        assert_eq!(exponent_digit("3"), Some(3));
        assert_eq!(exponent_digit("0"), Some(0));
        assert_eq!(exponent_digit(""), None);
        assert_eq!(exponent_digit("x"), None);
        assert_eq!(exponent_digit("12"), None);
    }
}
