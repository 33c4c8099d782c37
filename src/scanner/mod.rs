// Scan pipeline: classify -> decode fields -> assemble the record
pub mod assemble;
pub mod classify;

pub use assemble::{assemble, DEFAULT_WEIGHT};
pub use classify::classify;

use crate::config::{self, ScanConfig};
use crate::core::ScannedResult;
use crate::decoders;
use chrono_tz::Tz;

/// Barcode scanner bound to one time zone
///
/// Holds no mutable state, so a single instance can be shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner {
    tz: Tz,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            tz: chrono_tz::Australia::Sydney,
        }
    }
}

impl Scanner {
    /// Create a scanner from a config, validating its time zone up front
    pub fn new(config: &ScanConfig) -> config::Result<Self> {
        Ok(Self {
            tz: config.resolve_time_zone()?,
        })
    }

    pub fn with_time_zone(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    /// Decode one barcode. Never fails: unrecognised input comes back as
    /// `BarcodeType::None` with every field at its default.
    pub fn scan(&self, barcode: &str) -> ScannedResult {
        run(barcode, Some(self.tz))
    }
}

/// Decode a barcode with packing dates interpreted in Australia/Sydney
pub fn scan(barcode: &str) -> ScannedResult {
    Scanner::default().scan(barcode)
}

/// Decode a barcode with packing dates interpreted in the named zone
///
/// An unknown zone name is not fatal: the date is left absent and every
/// other field is decoded as usual.
pub fn scan_with(barcode: &str, time_zone: &str) -> ScannedResult {
    let tz = match config::parse_time_zone(time_zone) {
        Ok(tz) => Some(tz),
        Err(e) => {
            tracing::warn!("{}; packing date will not be decoded", e);
            None
        }
    };
    run(barcode, tz)
}

fn run(barcode: &str, tz: Option<Tz>) -> ScannedResult {
    let barcode_type = classify(barcode);
    tracing::debug!("Classified {:?} as {}", barcode, barcode_type);

    let fields = decoders::extract(barcode_type, barcode, tz);
    assemble(barcode_type, barcode, fields)
}
