//! Weight summary metrics.

use crate::analytics::{format_fixed, format_optional, last_window, mean, round_to};
use crate::analytics::{LONG_WINDOW, SHORT_WINDOW};
use crate::model::metric::Metric;
use crate::model::record::Record;
use serde::Serialize;

const WEIGHT_DECIMALS: u32 = 1;

/// Weight summary card values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightMetrics {
    /// Most recent valid weight, scanning from the end of the sequence.
    pub current: Option<f64>,
    /// Mean of valid weights among the last 7 records, one decimal.
    pub seven_day_avg: Option<f64>,
    /// Mean of valid weights among the last 30 records, one decimal.
    pub thirty_day_avg: Option<f64>,
    /// Last valid weight minus first valid weight, one decimal.
    pub change: f64,
}

/// String view of [`WeightMetrics`] with `N/A` sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightMetricsDisplay {
    pub current: String,
    pub seven_day_avg: String,
    pub thirty_day_avg: String,
    pub change: String,
}

impl WeightMetrics {
    pub fn display(&self) -> WeightMetricsDisplay {
        WeightMetricsDisplay {
            current: format_optional(self.current, WEIGHT_DECIMALS),
            seven_day_avg: format_optional(self.seven_day_avg, WEIGHT_DECIMALS),
            thirty_day_avg: format_optional(self.thirty_day_avg, WEIGHT_DECIMALS),
            change: format_fixed(self.change, WEIGHT_DECIMALS),
        }
    }
}

/// Computes current weight, 7/30-record averages and net change.
///
/// Records without a valid weight are skipped everywhere. An empty sequence
/// yields `None` for every value and `0.0` change.
pub fn compute_weight_metrics(records: &[Record]) -> WeightMetrics {
    let first = records.iter().find_map(weight_of);
    let last = records.iter().rev().find_map(weight_of);

    let change = match (first, last) {
        (Some(first), Some(last)) => round_to(last - first, WEIGHT_DECIMALS),
        _ => 0.0,
    };

    WeightMetrics {
        current: last,
        seven_day_avg: window_average(records, SHORT_WINDOW),
        thirty_day_avg: window_average(records, LONG_WINDOW),
        change,
    }
}

fn weight_of(record: &Record) -> Option<f64> {
    record.value(Metric::Weight)
}

fn window_average(records: &[Record], size: usize) -> Option<f64> {
    mean(last_window(records, size).iter().filter_map(weight_of))
        .map(|average| round_to(average, WEIGHT_DECIMALS))
}
