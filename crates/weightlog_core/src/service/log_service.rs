//! Record log use-case service.
//!
//! # Responsibility
//! - Own the record sequence: wholesale replace on import, append on entry.
//! - Assemble dashboard snapshots from the pure derivation layer.
//!
//! # Invariants
//! - A failed import leaves the previous sequence untouched.
//! - Derivations only ever see `&[Record]`; the service is the sole writer.
//! - Log events carry counts and status only, never record contents.

use crate::analytics::metrics::{compute_weight_metrics, WeightMetrics};
use crate::analytics::nutrition::{
    compute_nutrition_averages, nutrition_encouragement, NutritionAverages,
};
use crate::analytics::recent::{recent_entries, RecentEntry};
use crate::analytics::series::{build_time_series, TimeSeries};
use crate::analytics::streak::compute_entry_streak;
use crate::import::{import_records_from_path, parse_records_csv, ImportResult};
use crate::model::metric::Metric;
use crate::model::record::{EntryValidationError, NewEntry, Record};
use log::{info, warn};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Default number of rows in the recent entries table.
pub const RECENT_DEFAULT_COUNT: usize = 7;
/// Largest selectable recent entries table.
pub const RECENT_MAX_COUNT: usize = 14;

/// Everything a dashboard renders for one record sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub entry_count: usize,
    pub streak: u32,
    pub weight_metrics: WeightMetrics,
    pub nutrition: Option<NutritionAverages>,
    pub encouragement: &'static str,
    pub weight_series: TimeSeries,
    pub nutrition_series: TimeSeries,
    pub recent: Vec<RecentEntry>,
}

/// In-memory owner of the record sequence.
#[derive(Debug, Clone, Default)]
pub struct RecordLog {
    records: Vec<Record>,
}

impl RecordLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the whole sequence and returns the new length.
    pub fn replace_all(&mut self, records: Vec<Record>) -> usize {
        let previous = self.records.len();
        self.records = records;
        info!(
            "event=records_replace module=service status=ok previous={} count={}",
            previous,
            self.records.len()
        );
        self.records.len()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    /// Parses CSV from `reader` and replaces the sequence with it.
    ///
    /// On error the current sequence is kept.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> ImportResult<usize> {
        let records = parse_records_csv(reader).map_err(|err| {
            warn!("event=records_import module=service status=error source=reader error={err}");
            err
        })?;
        Ok(self.replace_all(records))
    }

    /// Imports a CSV file and replaces the sequence with it.
    ///
    /// On error the current sequence is kept.
    pub fn import_path(&mut self, path: impl AsRef<Path>) -> ImportResult<usize> {
        let records = import_records_from_path(path)?;
        Ok(self.replace_all(records))
    }

    /// Validates a manual entry and appends it.
    ///
    /// # Errors
    /// - Returns the entry validation error unchanged; nothing is appended.
    pub fn append_entry(&mut self, entry: NewEntry) -> Result<&Record, EntryValidationError> {
        let record = entry.into_record().map_err(|err| {
            warn!("event=entry_append module=service status=rejected error={err}");
            err
        })?;
        self.records.push(record);
        info!(
            "event=entry_append module=service status=ok count={}",
            self.records.len()
        );
        Ok(&self.records[self.records.len() - 1])
    }

    /// Computes every dashboard derivation for the current sequence.
    ///
    /// `nutrition_metric` selects the nutrition chart; `Metric::Weight` falls
    /// back to calories. `recent_count` is normalized with
    /// [`normalize_recent_count`].
    pub fn dashboard(
        &self,
        nutrition_metric: Metric,
        recent_count: Option<usize>,
    ) -> DashboardSnapshot {
        let records = self.records();
        let nutrition_metric = if nutrition_metric.is_nutrition() {
            nutrition_metric
        } else {
            Metric::Calories
        };
        let nutrition = compute_nutrition_averages(records);

        DashboardSnapshot {
            entry_count: records.len(),
            streak: compute_entry_streak(records),
            weight_metrics: compute_weight_metrics(records),
            encouragement: nutrition_encouragement(nutrition.as_ref()),
            nutrition,
            weight_series: build_time_series(records, Metric::Weight),
            nutrition_series: build_time_series(records, nutrition_metric),
            recent: recent_entries(records, normalize_recent_count(recent_count)),
        }
    }
}

/// Normalizes the recent entries table size.
///
/// `None` and `0` select the default; larger values are capped.
pub fn normalize_recent_count(count: Option<usize>) -> usize {
    match count {
        None | Some(0) => RECENT_DEFAULT_COUNT,
        Some(value) if value > RECENT_MAX_COUNT => RECENT_MAX_COUNT,
        Some(value) => value,
    }
}
