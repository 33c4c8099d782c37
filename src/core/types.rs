// Barcode classification tags and the decoded scan record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding a scanned string was recognised as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarcodeType {
    /// Not a recognised shape
    #[default]
    None,
    /// Plain EAN13, decoded as an opaque identifier
    Ean13,
    /// EAN13 with a leading `2` carrying item and price
    #[serde(rename = "ean13PE")]
    Ean13Pe,
    /// Application-identifier coded label (item, weight, date, serial)
    Gtin,
    /// Fixed 22-digit scale label
    #[serde(alias = "239")]
    Fixed239,
    /// Variable-length scale label without GTIN markers
    Ect,
}

impl BarcodeType {
    pub const ALL: [BarcodeType; 6] = [
        BarcodeType::None,
        BarcodeType::Ean13,
        BarcodeType::Ean13Pe,
        BarcodeType::Gtin,
        BarcodeType::Fixed239,
        BarcodeType::Ect,
    ];

    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeType::None => "none",
            BarcodeType::Ean13 => "ean13",
            BarcodeType::Ean13Pe => "ean13PE",
            BarcodeType::Gtin => "gtin",
            BarcodeType::Fixed239 => "fixed239",
            BarcodeType::Ect => "ect",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, BarcodeType::None)
    }
}

impl fmt::Display for BarcodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-fields a single decoder managed to pull out of a barcode.
/// Anything left as `None` is filled with its default when the record is assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    pub item_code: Option<String>,
    pub weight: Option<Decimal>,
    pub date: Option<DateTime<Utc>>,
    pub serial: Option<String>,
    pub total_price: Option<Decimal>,
}

impl Fields {
    pub fn is_empty(&self) -> bool {
        *self == Fields::default()
    }
}

/// Decoded barcode record
///
/// Built once per scanned string by the assembler and read-only afterwards.
/// `date_number` always mirrors `date` as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedResult {
    #[serde(rename = "type")]
    barcode_type: BarcodeType,
    item_code: String,
    barcode: String,
    #[serde(with = "rust_decimal::serde::float")]
    weight: Decimal,
    date: Option<DateTime<Utc>>,
    date_number: Option<i64>,
    serial: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    total_price: Option<Decimal>,
}

impl ScannedResult {
    pub(crate) fn new(
        barcode_type: BarcodeType,
        item_code: String,
        barcode: String,
        weight: Decimal,
        date: Option<DateTime<Utc>>,
        serial: Option<String>,
        total_price: Option<Decimal>,
    ) -> Self {
        Self {
            barcode_type,
            item_code,
            barcode,
            weight,
            date,
            date_number: date.map(|d| d.timestamp_millis()),
            serial,
            total_price,
        }
    }

    pub fn barcode_type(&self) -> BarcodeType {
        self.barcode_type
    }

    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    /// The scanned string exactly as it was passed in
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// Weight with two fractional digits; 1 when the encoding has no weight field
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Packing date as the start of that day in the scanning time zone
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn date_number(&self) -> Option<i64> {
        self.date_number
    }

    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    pub fn total_price(&self) -> Option<Decimal> {
        self.total_price
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_barcode_type_names() {
        assert_eq!(BarcodeType::Ean13Pe.to_string(), "ean13PE");
        assert_eq!(BarcodeType::Fixed239.as_str(), "fixed239");
        assert_eq!(BarcodeType::default(), BarcodeType::None);
        assert!(!BarcodeType::None.is_recognized());
        assert!(BarcodeType::Ect.is_recognized());

        for ty in BarcodeType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn test_barcode_type_accepts_legacy_name() {
        let ty: BarcodeType = serde_json::from_str("\"239\"").unwrap();
        assert_eq!(ty, BarcodeType::Fixed239);
    }

    #[test]
    fn test_fields_is_empty() {
        assert!(Fields::default().is_empty());
        let fields = Fields {
            weight: Some(Decimal::ZERO),
            ..Default::default()
        };
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_date_number_follows_date() {
        let date = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        let result = ScannedResult::new(
            BarcodeType::Ect,
            "00012345".to_string(),
            "00012345240229000125777".to_string(),
            Decimal::new(1250, 2),
            Some(date),
            Some("777".to_string()),
            None,
        );
        assert_eq!(result.date_number(), Some(1_709_164_800_000));

        let result = ScannedResult::new(
            BarcodeType::None,
            "abc".to_string(),
            "abc".to_string(),
            Decimal::ONE,
            None,
            None,
            None,
        );
        assert_eq!(result.date_number(), None);
    }

    #[test]
    fn test_json_field_names() {
        let result = ScannedResult::new(
            BarcodeType::Ean13Pe,
            "00123".to_string(),
            "2001234012348".to_string(),
            Decimal::ONE,
            None,
            None,
            Some(Decimal::from(1234)),
        );
        let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(value["type"], "ean13PE");
        assert_eq!(value["itemCode"], "00123");
        assert_eq!(value["barcode"], "2001234012348");
        assert_eq!(value["weight"], 1.0);
        assert_eq!(value["totalPrice"], 1234.0);
        assert!(value["date"].is_null());
        assert!(value["dateNumber"].is_null());
        assert!(value["serial"].is_null());

        let back = ScannedResult::from_json(&result.to_json().unwrap()).unwrap();
        assert_eq!(back, result);
    }
}
