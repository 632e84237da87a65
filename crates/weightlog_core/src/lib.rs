//! Core domain logic for weightlog.
//! This crate is the single source of truth for record semantics and every
//! dashboard derivation.

pub mod analytics;
pub mod import;
pub mod logging;
pub mod model;
pub mod service;

pub use analytics::metrics::{compute_weight_metrics, WeightMetrics, WeightMetricsDisplay};
pub use analytics::nutrition::{
    compute_nutrition_averages, nutrition_encouragement, NutritionAverages, NutritionWindow,
    NutritionWindowDisplay,
};
pub use analytics::recent::{recent_entries, RecentEntry};
pub use analytics::series::{build_time_series, DatasetLabels, TimeSeries};
pub use analytics::streak::compute_entry_streak;
pub use analytics::{format_fixed, format_optional, NOT_AVAILABLE};
pub use import::{import_records_from_path, parse_records_csv, ImportError, ImportResult};
pub use logging::{
    default_log_level, init_logging, log_dir_from_env, logging_status, LoggingConfig,
};
pub use model::metric::{Metric, UnknownMetricError};
pub use model::record::{EntryValidationError, NewEntry, Record};
pub use service::log_service::{normalize_recent_count, DashboardSnapshot, RecordLog};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
