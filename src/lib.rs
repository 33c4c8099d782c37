// scale-barcode: decoding of retail scale labels and EAN13-family barcodes

pub mod config;
pub mod core;
pub mod decoders;
pub mod digits;
pub mod scanner;

// Re-export commonly used types
pub use config::{ConfigError, ScanConfig, DEFAULT_TIME_ZONE};
pub use crate::core::{BarcodeType, Fields, ScannedResult};
pub use digits::{compute_check_digit, is_valid_ean13};
pub use scanner::{classify, scan, scan_with, Scanner};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
