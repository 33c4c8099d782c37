// Parsers for digit strings using nom
// Scanner input is plain text, so everything here works on &str rather than bytes

use nom::{
    bytes::complete::take,
    combinator::{all_consuming, map_res},
    IResult, Parser,
};
use regex::Regex;

lazy_static::lazy_static! {
    static ref ALL_DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("digit pattern is valid");
}

/// Check that a string is non-empty and made only of ASCII digits
pub fn is_all_digits(input: &str) -> bool {
    ALL_DIGITS.is_match(input)
}

/// Substring with clamped bounds: ranges past the end yield a shorter
/// (possibly empty) string and an inverted range yields "".
/// `end == None` means "to the end of the input".
pub fn clamped_slice(input: &str, start: usize, end: Option<usize>) -> &str {
    let len = input.len();
    let start = start.min(len);
    let end = end.map_or(len, |e| e.min(len));
    input.get(start..end).unwrap_or("")
}

/// Parse exactly two decimal digits
pub fn parse_two_digits(input: &str) -> IResult<&str, u32> {
    map_res(take(2usize), |chunk: &str| {
        if chunk.bytes().all(|b| b.is_ascii_digit()) {
            chunk.parse::<u32>().map_err(|_| ())
        } else {
            Err(())
        }
    })
    .parse(input)
}

/// Parse a YYMMDD string into its (YY, MM, DD) chunks
/// Example: "241105" -> (24, 11, 5)
pub fn parse_yymmdd(input: &str) -> IResult<&str, (u32, u32, u32)> {
    all_consuming((parse_two_digits, parse_two_digits, parse_two_digits)).parse(input)
}

/// Split a six-character date field into (YY, MM, DD)
/// Returns None unless the input is exactly six digits
pub fn date_chunks(input: &str) -> Option<(u32, u32, u32)> {
    if input.len() != 6 {
        return None;
    }
    parse_yymmdd(input).ok().map(|(_, chunks)| chunks)
}
