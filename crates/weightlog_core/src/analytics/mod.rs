//! Pure derivations over a record sequence.
//!
//! # Responsibility
//! - Turn `&[Record]` into summary metrics, streaks, nutrition averages and
//!   chart-ready series.
//!
//! # Invariants
//! - Every function here is a pure reader of its input slice.
//! - Windows are positional (last N records), never calendar filtered.
//! - Missing or unparsable values degrade to sentinels; nothing panics.

pub mod metrics;
pub mod nutrition;
pub mod recent;
pub mod series;
pub mod streak;

/// Display sentinel for a metric with no contributing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Short positional window (last 7 records).
pub const SHORT_WINDOW: usize = 7;
/// Long positional window (last 30 records).
pub const LONG_WINDOW: usize = 30;

/// Returns the trailing `size` records of `records`.
pub(crate) fn last_window<T>(records: &[T], size: usize) -> &[T] {
    &records[records.len().saturating_sub(size)..]
}

/// Rounds `value` to the number [`format_fixed`] renders.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format_fixed(value, decimals).parse().unwrap_or(value)
}

/// Formats `value` with exactly `decimals` places.
///
/// The exact binary value is rounded to the nearest decimal; exact midpoints
/// round half away from zero. Negative zero renders without a sign.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    let text = if is_exact_midpoint(value, decimals) {
        let factor = 10_f64.powi(decimals as i32);
        format!("{:.*}", precision, (value * factor).round() / factor)
    } else {
        format!("{:.*}", precision, value)
    };
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|byte| matches!(byte, b'0' | b'.')) => {
            unsigned.to_string()
        }
        _ => text,
    }
}

/// Whether `value * 10^decimals` ends in exactly `.5`.
///
/// That holds iff `value * 2^(decimals + 1)` is an odd integer; scaling by a
/// power of two is exact.
fn is_exact_midpoint(value: f64, decimals: u32) -> bool {
    let scaled = value * 2_f64.powi(decimals as i32 + 1);
    scaled.fract() == 0.0 && scaled % 2.0 != 0.0
}

/// Formats an optional value, using `N/A` for `None`.
pub fn format_optional(value: Option<f64>, decimals: u32) -> String {
    value
        .map(|value| format_fixed(value, decimals))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}
