// Barcode classification by length, digit content and marker fields

use crate::core::layout::{
    FIXED_239_LEN, GTIN_MARKER, GTIN_MARKERS, GTIN_PREFIX, GTIN_PREFIXES, PRICE_EMBEDDED_FLAG,
};
use crate::core::BarcodeType;
use crate::digits::{is_all_digits, is_valid_ean13, EAN13_LEN};

/// Decide which encoding a scanned string uses
///
/// Rules are tried in order and the first match wins:
/// 13 digits is the EAN13 family, exactly 22 digits is a "239" label and
/// more than 22 digits is GTIN or ECT depending on the prefix and marker.
/// Anything else, including any non-digit character, is `None`.
pub fn classify(barcode: &str) -> BarcodeType {
    if !is_all_digits(barcode) {
        return BarcodeType::None;
    }

    match barcode.len() {
        EAN13_LEN => {
            if is_price_embedded(barcode) {
                BarcodeType::Ean13Pe
            } else {
                BarcodeType::Ean13
            }
        }
        FIXED_239_LEN => BarcodeType::Fixed239,
        len if len > FIXED_239_LEN => {
            if has_gtin_markers(barcode) {
                BarcodeType::Gtin
            } else {
                BarcodeType::Ect
            }
        }
        _ => BarcodeType::None,
    }
}

/// Leading `2` plus a valid check digit
pub fn is_price_embedded(barcode: &str) -> bool {
    barcode.starts_with(PRICE_EMBEDDED_FLAG) && is_valid_ean13(barcode)
}

fn has_gtin_markers(barcode: &str) -> bool {
    GTIN_PREFIXES.contains(&GTIN_PREFIX.slice(barcode))
        && GTIN_MARKERS.contains(&GTIN_MARKER.slice(barcode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ean13_family() {
        assert_eq!(classify("4006381333931"), BarcodeType::Ean13);
        assert_eq!(classify("1234567890123"), BarcodeType::Ean13);
        assert_eq!(classify("2001234012348"), BarcodeType::Ean13Pe);
        // Leading 2 but a bad check digit
        assert_eq!(classify("2001234012340"), BarcodeType::Ean13);
    }

    #[test]
    fn test_classify_fixed_239() {
        assert_eq!(classify("2390120150240229123456"), BarcodeType::Fixed239);
        assert_eq!(classify("0000000000000000000000"), BarcodeType::Fixed239);
    }

    #[test]
    fn test_classify_22_digits_ignores_gtin_markers() {
        // Prefix 01 and marker 31 would make a longer code GTIN
        let code = "0193123456789012310300";
        assert_eq!(code.len(), 22);
        assert_eq!(classify(code), BarcodeType::Fixed239);
    }

    #[test]
    fn test_classify_gtin() {
        assert_eq!(
            classify("01931234567890123103001250132411052112345"),
            BarcodeType::Gtin
        );
        assert_eq!(
            classify("019312345678901213241105310200456021999"),
            BarcodeType::Gtin
        );
        assert_eq!(
            classify("04931234567890123103001250132411052112345"),
            BarcodeType::Gtin
        );
    }

    #[test]
    fn test_classify_ect() {
        assert_eq!(classify("00012345240301000125777"), BarcodeType::Ect);
        // GTIN prefix without a GTIN marker
        assert_eq!(
            classify("01931234567890129903001250132411052112345"),
            BarcodeType::Ect
        );
        // GTIN marker without a GTIN prefix
        assert_eq!(
            classify("02931234567890123103001250132411052112345"),
            BarcodeType::Ect
        );
    }

    #[test]
    fn test_classify_none() {
        assert_eq!(classify(""), BarcodeType::None);
        assert_eq!(classify("abc"), BarcodeType::None);
        assert_eq!(classify("123456789012"), BarcodeType::None);
        assert_eq!(classify("12345678901234"), BarcodeType::None);
        assert_eq!(classify("123456789012345678901"), BarcodeType::None);
        assert_eq!(classify("400638133393a"), BarcodeType::None);
        assert_eq!(classify("00012345240301000125777 "), BarcodeType::None);
        assert_eq!(classify("0001234524030100012577x"), BarcodeType::None);
    }
}
