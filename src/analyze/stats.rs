//! Numeric helpers for column statistics

use crate::model::CellValue;

/// Arithmetic mean of the non-missing numeric cells, `None` when there are
/// no such cells.
pub fn mean<'a>(values: impl Iterator<Item = &'a CellValue>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for value in values {
        if let Some(v) = value.as_f64() {
            sum += v;
            count += 1;
        }
    }

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
