// Digit-string primitives shared by the classifier and the field decoders

pub mod ean13;
pub mod parser;

pub use ean13::{compute_check_digit, is_valid_ean13, EAN13_DATA_LEN, EAN13_LEN};
pub use parser::{clamped_slice, date_chunks, is_all_digits, parse_yymmdd};
