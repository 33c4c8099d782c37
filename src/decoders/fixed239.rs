// Fixed 22-digit "239" scale labels

use super::scale_label;
use crate::core::layout::FIXED_239;
use crate::core::Fields;
use chrono_tz::Tz;

/// Decode a 22-digit label.
/// The item code goes through an integer round-trip, so leading zeros are dropped.
pub fn extract(barcode: &str, tz: Option<Tz>) -> Fields {
    let mut fields = scale_label::extract(barcode, &FIXED_239, tz);
    fields.item_code = fields.item_code.map(|item| strip_leading_zeros(&item));
    fields
}

fn strip_leading_zeros(item: &str) -> String {
    match item.parse::<u64>() {
        Ok(value) => value.to_string(),
        Err(_) => item.to_string(),
    }
}
