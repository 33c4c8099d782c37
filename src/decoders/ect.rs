// ECT scale labels: item, date, weight, then a serial running to the end

use super::scale_label;
use crate::core::layout::ECT;
use crate::core::Fields;
use chrono_tz::Tz;

/// Decode an ECT label; the item code keeps its leading zeros
pub fn extract(barcode: &str, tz: Option<Tz>) -> Fields {
    scale_label::extract(barcode, &ECT, tz)
}
