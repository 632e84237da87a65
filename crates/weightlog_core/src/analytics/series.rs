//! Chart-ready time series for one metric.
//!
//! # Responsibility
//! - Produce index-aligned labels, daily values, rolling averages and weekend
//!   markers for a charting surface.
//!
//! # Invariants
//! - Every output vector has exactly `records.len()` entries.
//! - Gaps are `None`, never `0.0`, so charts do not plot false dips.
//! - Nutrition values count only when strictly positive; weight only needs to
//!   parse.

use crate::analytics::{mean, LONG_WINDOW, SHORT_WINDOW};
use crate::model::metric::Metric;
use crate::model::record::Record;
use chrono::{Datelike, Weekday};
use serde::Serialize;

const LABEL_FORMAT: &str = "%b %-d, %Y";

/// Index-aligned series for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub metric: Metric,
    pub labels: Vec<String>,
    pub daily: Vec<Option<f64>>,
    pub rolling_avg_7: Vec<Option<f64>>,
    pub rolling_avg_30: Vec<Option<f64>>,
    pub weekend_flags: Vec<bool>,
}

/// Legend texts for the three plotted lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetLabels {
    pub daily: String,
    pub rolling_avg_7: String,
    pub rolling_avg_30: String,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn dataset_labels(&self) -> DatasetLabels {
        let label = self.metric.label();
        let suffix = match self.metric.unit() {
            "" => String::new(),
            unit => format!(" ({unit})"),
        };
        DatasetLabels {
            daily: format!("Daily {label}{suffix}"),
            rolling_avg_7: format!("7-Day Average {label}{suffix}"),
            rolling_avg_30: format!("30-Day Average {label}{suffix}"),
        }
    }
}

/// Builds the chart series of `metric` over `records`.
pub fn build_time_series(records: &[Record], metric: Metric) -> TimeSeries {
    let daily: Vec<Option<f64>> = records
        .iter()
        .map(|record| plotted_value(record, metric))
        .collect();

    TimeSeries {
        metric,
        labels: records.iter().map(chart_label).collect(),
        rolling_avg_7: rolling_average(&daily, SHORT_WINDOW),
        rolling_avg_30: rolling_average(&daily, LONG_WINDOW),
        weekend_flags: records.iter().map(is_weekend).collect(),
        daily,
    }
}

/// Value plotted for `record`, or `None` for a gap.
pub fn plotted_value(record: &Record, metric: Metric) -> Option<f64> {
    let value = record.value(metric)?;
    if metric.info().requires_positive && value <= 0.0 {
        return None;
    }
    Some(value)
}

/// `Jan 5, 2024` for parsable dates, the raw date text otherwise.
pub fn chart_label(record: &Record) -> String {
    match record.calendar_date() {
        Some(date) => date.format(LABEL_FORMAT).to_string(),
        None => record.date.clone().unwrap_or_default(),
    }
}

/// Whether the record's date falls on Saturday or Sunday.
pub fn is_weekend(record: &Record) -> bool {
    record
        .calendar_date()
        .is_some_and(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
}

fn rolling_average(daily: &[Option<f64>], size: usize) -> Vec<Option<f64>> {
    daily
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_ref()?;
            let start = (index + 1).saturating_sub(size);
            mean(daily[start..=index].iter().flatten().copied())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_time_series, chart_label, is_weekend, rolling_average};
    use crate::model::metric::Metric;
    use crate::model::record::Record;

    #[test]
    fn empty_sequence_yields_empty_series() {
        let series = build_time_series(&[], Metric::Weight);
        assert!(series.is_empty());
        assert!(series.rolling_avg_30.is_empty());
    }

    #[test]
    fn labels_format_or_pass_through() {
        assert_eq!(chart_label(&Record::on("2024-01-05")), "Jan 5, 2024");
        assert_eq!(chart_label(&Record::on("someday")), "someday");
        assert_eq!(chart_label(&Record::default()), "");
    }

    #[test]
    fn weekend_flags_follow_calendar() {
        // 2024-06-01 is a Saturday.
        assert!(is_weekend(&Record::on("2024-06-01")));
        assert!(is_weekend(&Record::on("2024-06-02")));
        for weekday in 3..=7 {
            assert!(!is_weekend(&Record::on(format!("2024-06-{weekday:02}"))));
        }
        assert!(!is_weekend(&Record::on("garbage")));
    }

    #[test]
    fn invalid_weight_is_a_gap_everywhere() {
        let records = vec![
            Record::on("2024-01-01").with(Metric::Weight, "150"),
            Record::on("2024-01-02").with(Metric::Weight, ""),
            Record::on("2024-01-03").with(Metric::Weight, "abc"),
            Record::on("2024-01-04").with(Metric::Weight, "154"),
        ];
        let series = build_time_series(&records, Metric::Weight);
        assert_eq!(series.daily, vec![Some(150.0), None, None, Some(154.0)]);
        assert_eq!(
            series.rolling_avg_7,
            vec![Some(150.0), None, None, Some(152.0)]
        );
        assert_eq!(series.rolling_avg_30, series.rolling_avg_7);
    }

    #[test]
    fn nutrition_requires_positive_values_but_weight_does_not() {
        let records = vec![
            Record::on("2024-01-01")
                .with(Metric::Weight, "0")
                .with(Metric::Calories, "0"),
            Record::on("2024-01-02")
                .with(Metric::Weight, "-3")
                .with(Metric::Calories, "-10"),
        ];
        let weight = build_time_series(&records, Metric::Weight);
        assert_eq!(weight.daily, vec![Some(0.0), Some(-3.0)]);
        let calories = build_time_series(&records, Metric::Calories);
        assert_eq!(calories.daily, vec![None, None]);
        assert_eq!(calories.rolling_avg_7, vec![None, None]);
    }

    #[test]
    fn rolling_window_is_trailing_and_bounded() {
        let daily: Vec<Option<f64>> = (1..=9).map(|n| Some(f64::from(n))).collect();
        let averages = rolling_average(&daily, 7);
        assert_eq!(averages[0], Some(1.0));
        assert_eq!(averages[6], Some(4.0));
        // Index 8 averages values 3..=9.
        assert_eq!(averages[8], Some(6.0));
    }

    #[test]
    fn dataset_labels_include_units() {
        let protein = build_time_series(&[], Metric::Protein).dataset_labels();
        assert_eq!(protein.daily, "Daily Protein (g)");
        assert_eq!(protein.rolling_avg_30, "30-Day Average Protein (g)");
        let calories = build_time_series(&[], Metric::Calories).dataset_labels();
        assert_eq!(calories.rolling_avg_7, "7-Day Average Calories");
    }

    #[test]
    fn outputs_are_index_aligned() {
        let records: Vec<Record> = (1..=40)
            .map(|n| {
                Record::on(format!("2024-03-{:02}", (n % 28) + 1)).with(Metric::Fats, "50")
            })
            .collect();
        let series = build_time_series(&records, Metric::Fats);
        assert_eq!(series.len(), 40);
        assert_eq!(series.daily.len(), 40);
        assert_eq!(series.rolling_avg_7.len(), 40);
        assert_eq!(series.rolling_avg_30.len(), 40);
        assert_eq!(series.weekend_flags.len(), 40);
        assert_eq!(series, build_time_series(&records, Metric::Fats));
    }
}
