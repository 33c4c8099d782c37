// Fixed digit positions for each supported barcode encoding
// All offsets are 0-based; `end` is exclusive and `None` runs to the end of the code

use crate::digits::clamped_slice;

/// A half-open range of digit positions within a barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: Option<usize>,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Open-ended span running from `start` to the end of the code
    pub const fn from(start: usize) -> Self {
        Self { start, end: None }
    }

    pub const fn at(position: usize) -> Self {
        Self::new(position, position + 1)
    }

    /// Cut this span out of a barcode; positions past the end are clamped
    pub fn slice<'a>(&self, barcode: &'a str) -> &'a str {
        clamped_slice(barcode, self.start, self.end)
    }
}

/// Price-embedded EAN13: flag digit, 5-digit item, 5-digit price, check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceEmbeddedLayout {
    pub item: Span,
    pub price: Span,
}

/// One of the two field orderings of a GTIN-style label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GtinLayout {
    pub item: Span,
    pub serial: Span,
    pub date: Span,
    pub weight: Span,
    /// Single digit holding the number of implied decimal places in `weight`
    pub weight_exponent: Span,
}

/// Scale label with item, weight, date and serial at fixed positions.
/// Used by both the 22-digit "239" labels and ECT labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleLabelLayout {
    pub item: Span,
    pub weight: Span,
    pub date: Span,
    pub serial: Span,
    /// Implied decimal places of the weight field
    pub weight_scale: u32,
}

pub const PRICE_EMBEDDED: PriceEmbeddedLayout = PriceEmbeddedLayout {
    item: Span::new(1, 6),
    price: Span::new(6, 11),
};

/// Leading flag digit of a price-embedded EAN13
pub const PRICE_EMBEDDED_FLAG: char = '2';

/// Application identifier prefix positions of a GTIN-style label
pub const GTIN_PREFIX: Span = Span::new(0, 2);
pub const GTIN_PREFIXES: [&str; 2] = ["01", "04"];

/// Marker positions deciding between GTIN and ECT, and between the two GTIN orderings
pub const GTIN_MARKER: Span = Span::new(16, 18);
pub const GTIN_MARKERS: [&str; 2] = ["31", "13"];
pub const GTIN_REVERSED_MARKER: &str = "13";

pub const GTIN_NORMAL: GtinLayout = GtinLayout {
    item: Span::new(2, 16),
    serial: Span::from(36),
    date: Span::new(28, 34),
    weight: Span::new(20, 26),
    weight_exponent: Span::at(19),
};

pub const GTIN_REVERSED: GtinLayout = GtinLayout {
    item: Span::new(2, 16),
    serial: Span::from(36),
    date: Span::new(18, 24),
    weight: Span::new(28, 34),
    weight_exponent: Span::at(27),
};

pub const FIXED_239_LEN: usize = 22;

pub const FIXED_239: ScaleLabelLayout = ScaleLabelLayout {
    item: Span::new(0, 6),
    weight: Span::new(6, 10),
    date: Span::new(10, 16),
    serial: Span::from(16),
    weight_scale: 2,
};

pub const ECT: ScaleLabelLayout = ScaleLabelLayout {
    item: Span::new(0, 8),
    weight: Span::new(14, 20),
    date: Span::new(8, 14),
    serial: Span::from(20),
    weight_scale: 1,
};

/// Select the GTIN field ordering
pub fn gtin_layout(reversed: bool) -> &'static GtinLayout {
    if reversed {
        &GTIN_REVERSED
    } else {
        &GTIN_NORMAL
    }
}
