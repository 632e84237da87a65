//! Newest-first rows for the recent entries table.

use crate::model::metric::Metric;
use crate::model::record::Record;
use serde::Serialize;

const SHORT_LABEL_FORMAT: &str = "%b %-d";
const INVALID_DATE_LABEL: &str = "Invalid Date";

/// One table row. Values are raw text; `None` renders as a dash downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentEntry {
    pub date_label: String,
    pub weight: Option<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fats: Option<String>,
    pub has_nutrition: bool,
}

/// Returns the last `count` records, newest first.
pub fn recent_entries(records: &[Record], count: usize) -> Vec<RecentEntry> {
    records
        .iter()
        .rev()
        .take(count)
        .map(|record| RecentEntry {
            date_label: short_date_label(record),
            weight: text(record, Metric::Weight),
            calories: text(record, Metric::Calories),
            protein: text(record, Metric::Protein),
            carbs: text(record, Metric::Carbs),
            fats: text(record, Metric::Fats),
            has_nutrition: record.has_nutrition(),
        })
        .collect()
}

fn short_date_label(record: &Record) -> String {
    record
        .calendar_date()
        .map(|date| date.format(SHORT_LABEL_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE_LABEL.to_string())
}

fn text(record: &Record, metric: Metric) -> Option<String> {
    metric.raw(record).map(str::to_string)
}
