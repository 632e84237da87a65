use std::io::Write;
use tempfile::NamedTempFile;
use weightlog_core::{import_records_from_path, ImportError, Metric, NewEntry, RecordLog};

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn import_from_path_keeps_file_order_and_raw_text() {
    let file = csv_file(
        "\u{feff}Date,Weight,Calories,Notes\n\
         2024-03-02,150.5,abc,late dinner\n\
         2024-03-01, 151 ,,\n",
    );

    let records = import_records_from_path(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date.as_deref(), Some("2024-03-02"));
    assert_eq!(records[0].calories.as_deref(), Some("abc"));
    assert_eq!(records[0].value(Metric::Calories), None);
    assert_eq!(records[1].weight.as_deref(), Some("151"));
    assert_eq!(records[1].calories, None);
    assert_eq!(records[1].protein, None);
}

#[test]
fn import_missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = import_records_from_path(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, ImportError::Io(_)));
}

#[test]
fn import_empty_file_reports_empty() {
    let file = csv_file("");
    let err = import_records_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::EmptyFile));
}

#[test]
fn record_log_import_replaces_sequence() {
    let first = csv_file("date,weight\n2024-01-01,150\n2024-01-02,151\n");
    let second = csv_file("date,weight,protein\n2024-02-01,149,120\n");

    let mut log = RecordLog::new();
    assert_eq!(log.import_path(first.path()).unwrap(), 2);
    assert_eq!(log.import_path(second.path()).unwrap(), 1);
    assert_eq!(log.records()[0].date.as_deref(), Some("2024-02-01"));

    let snapshot = log.dashboard(Metric::Protein, None);
    assert_eq!(snapshot.entry_count, 1);
    assert_eq!(snapshot.nutrition_series.daily, vec![Some(120.0)]);
}

#[test]
fn record_log_keeps_records_when_import_fails() {
    let good = csv_file("date,weight\n2024-01-01,150\n");
    let bad = csv_file("weight,calories\n150,2000\n");

    let mut log = RecordLog::new();
    log.import_path(good.path()).unwrap();
    let err = log.import_path(bad.path()).unwrap_err();

    assert!(matches!(err, ImportError::MissingColumn("date")));
    assert_eq!(log.len(), 1);
}

#[test]
fn manual_entries_extend_imported_history() {
    let file = csv_file("date,weight\n2024-01-01,150\n2024-01-02,151\n");
    let mut log = RecordLog::new();
    log.import_path(file.path()).unwrap();

    let mut entry = NewEntry::new("2024-01-03", "150.4");
    entry.calories = Some("1900".to_string());
    log.append_entry(entry).unwrap();

    let snapshot = log.dashboard(Metric::Calories, None);
    assert_eq!(snapshot.entry_count, 3);
    assert_eq!(snapshot.streak, 3);
    assert_eq!(snapshot.weight_metrics.display().change, "0.4");
    assert_eq!(snapshot.recent[0].date_label, "Jan 3");
    assert!(snapshot.recent[0].has_nutrition);
    assert!(log.append_entry(NewEntry::new("2024-01-04", "")).is_err());
    assert_eq!(log.len(), 3);
}
