//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the process-wide record log the UI reads and writes.
//! - Flatten core results into display-ready envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A poisoned record log lock is recovered, never propagated.
//! - Return values are UTF-8 strings with stable meaning.

use log::{info, warn};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use weightlog_core::{
    build_time_series, compute_entry_streak, compute_nutrition_averages, compute_weight_metrics,
    core_version as core_version_inner, init_logging as init_logging_inner,
    normalize_recent_count, nutrition_encouragement, ping as ping_inner, recent_entries, Metric,
    NewEntry, NutritionWindow, RecentEntry, RecordLog, TimeSeries,
};

/// Environment variable naming the CSV read by [`log_import_default`].
pub const IMPORT_PATH_ENV: &str = "WEIGHTLOG_IMPORT_PATH";

static RECORD_LOG: OnceLock<Mutex<RecordLog>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for commands that change the record log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Record count after the call (unchanged on failure).
    pub record_count: u32,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl LogActionResponse {
    fn success(message: impl Into<String>, record_count: usize) -> Self {
        Self {
            ok: true,
            record_count: to_u32(record_count),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>, record_count: usize) -> Self {
        Self {
            ok: false,
            record_count: to_u32(record_count),
            message: message.into(),
        }
    }
}

/// Nutrition card values for one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionCard {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub entry_count: u32,
}

/// One row of the recent entries table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntryItem {
    pub date_label: String,
    pub weight: Option<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fats: Option<String>,
    pub has_nutrition: bool,
}

/// Dashboard cards, nutrition summary and recent entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub entry_count: u32,
    pub streak: u32,
    pub current_weight: String,
    pub seven_day_avg: String,
    pub thirty_day_avg: String,
    pub weight_change: String,
    /// `None` when no nutrition has been logged.
    pub nutrition_seven_day: Option<NutritionCard>,
    pub nutrition_thirty_day: Option<NutritionCard>,
    pub encouragement: String,
    pub recent: Vec<RecentEntryItem>,
    /// Effective applied recent entries count.
    pub applied_recent_count: u32,
}

/// Chart series for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesView {
    pub ok: bool,
    pub metric: String,
    pub labels: Vec<String>,
    pub daily: Vec<Option<f64>>,
    pub rolling_avg_7: Vec<Option<f64>>,
    pub rolling_avg_30: Vec<Option<f64>>,
    pub weekend_flags: Vec<bool>,
    pub daily_label: String,
    pub rolling_avg_7_label: String,
    pub rolling_avg_30_label: String,
    pub message: String,
}

/// Replaces the record log with the rows of a CSV file.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - On failure the previous records are kept.
#[flutter_rust_bridge::frb(sync)]
pub fn log_import_csv(path: String) -> LogActionResponse {
    with_record_log(|log| import_into(log, PathBuf::from(path.trim())))
}

/// Imports the CSV named by `WEIGHTLOG_IMPORT_PATH`.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics; reports a failure when the variable is unset.
#[flutter_rust_bridge::frb(sync)]
pub fn log_import_default() -> LogActionResponse {
    let path = resolve_default_import_path();
    with_record_log(|log| import_default_into(log, path))
}

/// Appends one manually entered day.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Date and weight are required; nutrition values are optional.
/// - Never panics; validation failures leave the log unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn log_add_entry(
    date: String,
    weight: String,
    calories: Option<String>,
    protein: Option<String>,
    carbs: Option<String>,
    fats: Option<String>,
) -> LogActionResponse {
    let entry = NewEntry {
        date,
        weight,
        calories,
        protein,
        carbs,
        fats,
    };
    with_record_log(|log| add_entry_into(log, entry))
}

/// Drops every record.
#[flutter_rust_bridge::frb(sync)]
pub fn log_clear() -> LogActionResponse {
    with_record_log(clear_into)
}

/// Summarizes the record log for the dashboard tab.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - `recent_count`: `None`/0 selects 7, values above 14 are capped.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_summary(recent_count: Option<u32>) -> DashboardView {
    with_record_log(|log| summarize(log, recent_count))
}

/// Builds chart series for `metric` (`weight|calories|protein|carbs|fats`).
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown metrics return `ok = false` with empty vectors.
#[flutter_rust_bridge::frb(sync)]
pub fn metric_series(metric: String) -> SeriesView {
    with_record_log(|log| series_for(log, metric))
}

fn with_record_log<T>(f: impl FnOnce(&mut RecordLog) -> T) -> T {
    let mut guard = lock_record_log();
    f(&mut *guard)
}

fn lock_record_log() -> MutexGuard<'static, RecordLog> {
    RECORD_LOG
        .get_or_init(|| Mutex::new(RecordLog::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn resolve_default_import_path() -> Option<PathBuf> {
    std::env::var(IMPORT_PATH_ENV)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}

fn import_into(log: &mut RecordLog, path: PathBuf) -> LogActionResponse {
    match log.import_path(&path) {
        Ok(count) => {
            info!("event=ffi_call module=ffi op=log_import_csv status=ok count={count}");
            LogActionResponse::success(format!("Imported {count} record(s)."), count)
        }
        Err(err) => {
            warn!("event=ffi_call module=ffi op=log_import_csv status=error error={err}");
            LogActionResponse::failure(format!("log_import_csv failed: {err}"), log.len())
        }
    }
}

fn import_default_into(log: &mut RecordLog, path: Option<PathBuf>) -> LogActionResponse {
    match path {
        Some(path) => import_into(log, path),
        None => {
            warn!("event=ffi_call module=ffi op=log_import_default status=error error=env_unset");
            LogActionResponse::failure(
                format!("log_import_default failed: {IMPORT_PATH_ENV} is not set"),
                log.len(),
            )
        }
    }
}

fn add_entry_into(log: &mut RecordLog, entry: NewEntry) -> LogActionResponse {
    match log.append_entry(entry) {
        Ok(_) => {
            info!("event=ffi_call module=ffi op=log_add_entry status=ok count={}", log.len());
            LogActionResponse::success("Entry added.", log.len())
        }
        Err(err) => {
            warn!("event=ffi_call module=ffi op=log_add_entry status=rejected error={err}");
            LogActionResponse::failure(format!("log_add_entry failed: {err}"), log.len())
        }
    }
}

fn clear_into(log: &mut RecordLog) -> LogActionResponse {
    let previous = log.len();
    log.clear();
    info!("event=ffi_call module=ffi op=log_clear status=ok previous={previous}");
    LogActionResponse::success("Records cleared.", log.len())
}

fn summarize(log: &RecordLog, recent_count: Option<u32>) -> DashboardView {
    let records = log.records();
    let applied = normalize_recent_count(recent_count.map(|count| count as usize));
    let weight = compute_weight_metrics(records).display();
    let nutrition = compute_nutrition_averages(records);

    DashboardView {
        entry_count: to_u32(records.len()),
        streak: compute_entry_streak(records),
        current_weight: weight.current,
        seven_day_avg: weight.seven_day_avg,
        thirty_day_avg: weight.thirty_day_avg,
        weight_change: weight.change,
        nutrition_seven_day: nutrition
            .as_ref()
            .map(|averages| to_nutrition_card(&averages.seven_day)),
        nutrition_thirty_day: nutrition
            .as_ref()
            .map(|averages| to_nutrition_card(&averages.thirty_day)),
        encouragement: nutrition_encouragement(nutrition.as_ref()).to_string(),
        recent: recent_entries(records, applied)
            .into_iter()
            .map(to_recent_item)
            .collect(),
        applied_recent_count: to_u32(applied),
    }
}

fn series_for(log: &RecordLog, metric: String) -> SeriesView {
    match metric.parse::<Metric>() {
        Ok(metric) => to_series_view(&build_time_series(log.records(), metric)),
        Err(err) => SeriesView {
            ok: false,
            metric,
            labels: Vec::new(),
            daily: Vec::new(),
            rolling_avg_7: Vec::new(),
            rolling_avg_30: Vec::new(),
            weekend_flags: Vec::new(),
            daily_label: String::new(),
            rolling_avg_7_label: String::new(),
            rolling_avg_30_label: String::new(),
            message: format!("metric_series failed: {err}"),
        },
    }
}

fn to_nutrition_card(window: &NutritionWindow) -> NutritionCard {
    let display = window.display();
    NutritionCard {
        calories: display.calories,
        protein: display.protein,
        carbs: display.carbs,
        fats: display.fats,
        entry_count: to_u32(display.entry_count),
    }
}

fn to_recent_item(entry: RecentEntry) -> RecentEntryItem {
    RecentEntryItem {
        date_label: entry.date_label,
        weight: entry.weight,
        calories: entry.calories,
        protein: entry.protein,
        carbs: entry.carbs,
        fats: entry.fats,
        has_nutrition: entry.has_nutrition,
    }
}

fn to_series_view(series: &TimeSeries) -> SeriesView {
    let labels = series.dataset_labels();
    SeriesView {
        ok: true,
        metric: series.metric.name().to_string(),
        labels: series.labels.clone(),
        daily: series.daily.clone(),
        rolling_avg_7: series.rolling_avg_7.clone(),
        rolling_avg_30: series.rolling_avg_30.clone(),
        weekend_flags: series.weekend_flags.clone(),
        daily_label: labels.daily,
        rolling_avg_7_label: labels.rolling_avg_7,
        rolling_avg_30_label: labels.rolling_avg_30,
        message: format!("{} point(s).", series.len()),
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
