// GTIN-style labels with application identifiers for weight, date and serial
//
// Two field orderings exist. When the marker at positions 16..18 reads "13"
// the packing date comes first and the weight block moves to 28..34;
// otherwise the weight block sits at 20..26 and the date at 28..34.

use super::date::decode_date;
use super::scale_label::serial;
use super::weight::{exponent_digit, scale_weight};
use crate::core::layout::{gtin_layout, GTIN_MARKER, GTIN_REVERSED_MARKER};
use crate::core::Fields;
use chrono_tz::Tz;

/// Whether the label uses the date-first ordering
pub fn is_reversed(barcode: &str) -> bool {
    GTIN_MARKER.slice(barcode) == GTIN_REVERSED_MARKER
}

pub fn extract(barcode: &str, tz: Option<Tz>) -> Fields {
    let reversed = is_reversed(barcode);
    let layout = gtin_layout(reversed);

    let weight_field = layout.weight.slice(barcode);
    let exponent = exponent_digit(layout.weight_exponent.slice(barcode));
    let date = layout.date.slice(barcode);

    tracing::debug!(
        "GTIN {} (reversed={}): weight={} exponent={:?} date={}",
        barcode,
        reversed,
        weight_field,
        exponent,
        date
    );

    let weight = match exponent {
        Some(exponent) => scale_weight(weight_field, exponent),
        None => {
            tracing::warn!("GTIN {} has no weight exponent digit", barcode);
            None
        }
    };

    Fields {
        item_code: Some(layout.item.slice(barcode).to_string()),
        weight,
        date: tz.and_then(|tz| decode_date(date, tz)),
        serial: serial(barcode, layout.serial),
        total_price: None,
    }
}
