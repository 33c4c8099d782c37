// Field decoders, one per barcode encoding
pub mod date;
pub mod ean13;
pub mod ect;
pub mod fixed239;
pub mod gtin;
pub mod scale_label;
pub mod weight;

pub use date::{decode_date, start_of_day};
pub use weight::scale_weight;

use crate::core::{BarcodeType, Fields};
use chrono_tz::Tz;

/// Run the decoder matching a classified barcode
///
/// Dates are only decoded when a time zone is available; without one the
/// date stays absent and every other field is still decoded.
pub fn extract(barcode_type: BarcodeType, barcode: &str, tz: Option<Tz>) -> Fields {
    match barcode_type {
        BarcodeType::None => Fields::default(),
        BarcodeType::Ean13 => ean13::extract_plain(barcode),
        BarcodeType::Ean13Pe => ean13::extract_price_embedded(barcode),
        BarcodeType::Gtin => gtin::extract(barcode, tz),
        BarcodeType::Fixed239 => fixed239::extract(barcode, tz),
        BarcodeType::Ect => ect::extract(barcode, tz),
    }
}
