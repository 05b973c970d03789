use crate::constants::DATA_UNIT_BYTES;

pub const MEGA_LIMIT: u64 = 1_000_000;

pub const GIBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0;
pub const TEBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0 * 1024.0;

/// Returns the number of bytes covered by `units` smart-log data units.
///
/// This is done in floating point, as a large enough counter will not fit in
/// a [`u64`] once multiplied out.
#[inline]
pub fn units_to_bytes(units: u64) -> f64 {
    units as f64 * DATA_UNIT_BYTES as f64
}

/// Converts bytes to gibibytes. Note the output still gets labelled as "GB".
#[inline]
pub fn bytes_to_gibi(bytes: f64) -> f64 {
    bytes / GIBI_LIMIT_F64
}

/// Converts bytes to tebibytes. Note the output still gets labelled as "TB".
#[inline]
pub fn bytes_to_tebi(bytes: f64) -> f64 {
    bytes / TEBI_LIMIT_F64
}
