// Shared decoding for fixed-position scale labels

use super::date::decode_date;
use super::weight::scale_weight;
use crate::core::{Fields, ScaleLabelLayout, Span};
use chrono_tz::Tz;

/// Slice item, weight, date and serial out of a scale label.
/// The item code is returned exactly as printed.
pub fn extract(barcode: &str, layout: &ScaleLabelLayout, tz: Option<Tz>) -> Fields {
    let item = layout.item.slice(barcode);
    let weight = layout.weight.slice(barcode);
    let date = layout.date.slice(barcode);

    tracing::debug!(
        "Scale label {}: item={} weight={} date={}",
        barcode,
        item,
        weight,
        date
    );

    Fields {
        item_code: Some(item.to_string()),
        weight: scale_weight(weight, layout.weight_scale),
        date: tz.and_then(|tz| decode_date(date, tz)),
        serial: serial(barcode, layout.serial),
        total_price: None,
    }
}

/// Serial runs to the end of the code; an empty tail means there is none
pub fn serial(barcode: &str, span: Span) -> Option<String> {
    let serial = span.slice(barcode);
    (!serial.is_empty()).then(|| serial.to_string())
}
