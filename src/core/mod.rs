// Core data model: encoding tags, decoded records and the position table
pub mod layout;
pub mod types;

// Re-export commonly used types
pub use layout::{GtinLayout, PriceEmbeddedLayout, ScaleLabelLayout, Span};
pub use types::{BarcodeType, Fields, ScannedResult};
