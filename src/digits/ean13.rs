// EAN13 check digit calculation and verification

use super::parser::is_all_digits;

/// Number of data digits covered by the EAN13 checksum
pub const EAN13_DATA_LEN: usize = 12;

/// Total length of an EAN13 code including the check digit
pub const EAN13_LEN: usize = 13;

/// Compute the EAN13 check digit for 12 data digits
/// Example: "400638133393" -> Some('1')
///
/// Digits at even positions weigh 1 and digits at odd positions weigh 3.
/// Returns `None` for anything other than exactly 12 ASCII digits.
pub fn compute_check_digit(input: &str) -> Option<char> {
    if input.len() != EAN13_DATA_LEN || !is_all_digits(input) {
        return None;
    }

    let sum: u32 = input
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit
            } else {
                digit * 3
            }
        })
        .sum();

    char::from_digit((10 - sum % 10) % 10, 10)
}

/// Check that a 13-digit code carries a correct trailing check digit
pub fn is_valid_ean13(input: &str) -> bool {
    if input.len() != EAN13_LEN || !is_all_digits(input) {
        return false;
    }

    let (data, check) = input.split_at(EAN13_DATA_LEN);
    compute_check_digit(data).is_some_and(|expected| check.starts_with(expected))
}
