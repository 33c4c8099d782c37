// Final record assembly with explicit per-field defaults

use crate::core::{BarcodeType, Fields, ScannedResult};
use rust_decimal::Decimal;

/// Weight reported when the encoding has no weight field
pub const DEFAULT_WEIGHT: Decimal = Decimal::ONE;

/// Merge decoded fields into a full record
///
/// Defaults, applied the same way for every encoding:
///
/// | field        | when absent         |
/// |--------------|---------------------|
/// | item code    | the scanned string  |
/// | weight       | 1                   |
/// | date         | absent              |
/// | serial       | absent              |
/// | total price  | absent              |
///
/// Present values are kept as-is, so a zero weight or price stays zero.
pub fn assemble(barcode_type: BarcodeType, barcode: &str, fields: Fields) -> ScannedResult {
    debug_assert!(
        barcode_type.is_recognized() || fields.is_empty(),
        "unrecognised barcode produced fields: {:?}",
        fields
    );

    let Fields {
        item_code,
        weight,
        date,
        serial,
        total_price,
    } = fields;

    ScannedResult::new(
        barcode_type,
        item_code.unwrap_or_else(|| barcode.to_string()),
        barcode.to_string(),
        weight.unwrap_or(DEFAULT_WEIGHT),
        date,
        serial,
        total_price,
    )
}
