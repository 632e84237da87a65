//! Enumerated metric keys and their lookup table.
//!
//! # Responsibility
//! - Replace runtime field-name lookups with a closed set of keys.
//! - Keep per-metric presentation facts (label, unit, rounding) in one table.
//!
//! # Invariants
//! - `METRIC_TABLE` is indexed by `Metric as usize` and lists every variant
//!   exactly once, in declaration order.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One loggable metric of a daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Body weight in pounds.
    Weight,
    /// Daily energy intake.
    Calories,
    /// Protein grams.
    Protein,
    /// Carbohydrate grams.
    Carbs,
    /// Fat grams.
    Fats,
}

/// Static facts about one metric.
pub struct MetricInfo {
    pub metric: Metric,
    /// Wire/header name (`weight`, `calories`, ...).
    pub name: &'static str,
    /// Human-readable label used in chart legends.
    pub label: &'static str,
    /// Display unit, empty for unitless counts.
    pub unit: &'static str,
    /// Plotted values must be strictly positive to count as logged.
    pub requires_positive: bool,
    /// Decimal places used by summary averages.
    pub summary_decimals: u32,
    accessor: fn(&Record) -> Option<&str>,
}

fn weight_raw(record: &Record) -> Option<&str> {
    record.weight.as_deref()
}

fn calories_raw(record: &Record) -> Option<&str> {
    record.calories.as_deref()
}

fn protein_raw(record: &Record) -> Option<&str> {
    record.protein.as_deref()
}

fn carbs_raw(record: &Record) -> Option<&str> {
    record.carbs.as_deref()
}

fn fats_raw(record: &Record) -> Option<&str> {
    record.fats.as_deref()
}

static METRIC_TABLE: [MetricInfo; 5] = [
    MetricInfo {
        metric: Metric::Weight,
        name: "weight",
        label: "Weight",
        unit: "lbs",
        requires_positive: false,
        summary_decimals: 1,
        accessor: weight_raw,
    },
    MetricInfo {
        metric: Metric::Calories,
        name: "calories",
        label: "Calories",
        unit: "",
        requires_positive: true,
        summary_decimals: 0,
        accessor: calories_raw,
    },
    MetricInfo {
        metric: Metric::Protein,
        name: "protein",
        label: "Protein",
        unit: "g",
        requires_positive: true,
        summary_decimals: 1,
        accessor: protein_raw,
    },
    MetricInfo {
        metric: Metric::Carbs,
        name: "carbs",
        label: "Carbs",
        unit: "g",
        requires_positive: true,
        summary_decimals: 1,
        accessor: carbs_raw,
    },
    MetricInfo {
        metric: Metric::Fats,
        name: "fats",
        label: "Fats",
        unit: "g",
        requires_positive: true,
        summary_decimals: 1,
        accessor: fats_raw,
    },
];

impl Metric {
    /// Every metric in declaration order.
    pub const ALL: [Metric; 5] = [
        Metric::Weight,
        Metric::Calories,
        Metric::Protein,
        Metric::Carbs,
        Metric::Fats,
    ];

    /// The four nutrition metrics.
    pub const NUTRITION: [Metric; 4] = [
        Metric::Calories,
        Metric::Protein,
        Metric::Carbs,
        Metric::Fats,
    ];

    pub fn info(self) -> &'static MetricInfo {
        &METRIC_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn unit(self) -> &'static str {
        self.info().unit
    }

    pub fn is_nutrition(self) -> bool {
        self != Metric::Weight
    }

    /// Returns the raw text stored for this metric on `record`.
    pub fn raw(self, record: &Record) -> Option<&str> {
        (self.info().accessor)(record)
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a metric name is not one of the known keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetricError(pub String);

impl Display for UnknownMetricError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown metric `{}`; expected weight|calories|protein|carbs|fats",
            self.0
        )
    }
}

impl Error for UnknownMetricError {}

impl FromStr for Metric {
    type Err = UnknownMetricError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == normalized)
            .ok_or_else(|| UnknownMetricError(value.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Metric, METRIC_TABLE};
    use crate::model::record::Record;

    #[test]
    fn table_is_indexed_by_declaration_order() {
        for metric in Metric::ALL {
            assert_eq!(METRIC_TABLE[metric as usize].metric, metric);
        }
    }

    #[test]
    fn accessor_reads_matching_field() {
        let record = Record::on("2024-01-01")
            .with(Metric::Weight, "150")
            .with(Metric::Carbs, "210");
        assert_eq!(Metric::Weight.raw(&record), Some("150"));
        assert_eq!(Metric::Carbs.raw(&record), Some("210"));
        assert_eq!(Metric::Fats.raw(&record), None);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Protein".parse::<Metric>(), Ok(Metric::Protein));
        assert_eq!(" fats ".parse::<Metric>(), Ok(Metric::Fats));
        let err = "sugar".parse::<Metric>().unwrap_err();
        assert!(err.to_string().contains("sugar"));
    }

    #[test]
    fn only_weight_allows_non_positive_plot_values() {
        assert!(!Metric::Weight.info().requires_positive);
        assert!(Metric::NUTRITION
            .iter()
            .all(|metric| metric.info().requires_positive));
    }
}
