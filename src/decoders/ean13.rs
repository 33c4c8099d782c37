// EAN13 family decoders

use crate::core::layout::PRICE_EMBEDDED;
use crate::core::Fields;
use rust_decimal::Decimal;

/// Plain EAN13 codes carry no sub-fields
pub fn extract_plain(_barcode: &str) -> Fields {
    Fields::default()
}

/// Price-embedded EAN13: 5-digit item code and a whole-unit price
pub fn extract_price_embedded(barcode: &str) -> Fields {
    let item = PRICE_EMBEDDED.item.slice(barcode);
    let price = PRICE_EMBEDDED.price.slice(barcode);

    let total_price = match price.parse::<i64>() {
        Ok(value) => Some(Decimal::from(value)),
        Err(e) => {
            tracing::warn!("Ignoring unparseable price field {:?}: {}", price, e);
            None
        }
    };

    Fields {
        item_code: Some(item.to_string()),
        total_price,
        ..Default::default()
    }
}
