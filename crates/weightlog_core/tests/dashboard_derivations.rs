use weightlog_core::{
    build_time_series, compute_entry_streak, compute_nutrition_averages, compute_weight_metrics,
    parse_records_csv, Metric, Record, RecordLog,
};

const TWO_WEEKS_CSV: &str = "\
date,weight,calories,protein,carbs,fats
2024-06-01,182.4,2300,150,220,70
2024-06-02,182.0,2500,140,260,80
2024-06-03,181.6,,,,
2024-06-04,181.8,2100,160,180,65
2024-06-05,,2000,155,,
2024-06-06,181.0,,,,
2024-06-07,180.6,2200,150,200,70
2024-06-08,180.9,2600,130,280,90
2024-06-09,180.2,,,,
2024-06-10,179.8,2050,165,190,60
2024-06-11,abc,,,,
2024-06-12,179.4,1950,170,170,55
2024-06-13,179.5,,,,
2024-06-14,179.0,2100,160,200,65
";

fn two_weeks() -> Vec<Record> {
    parse_records_csv(TWO_WEEKS_CSV.as_bytes()).unwrap()
}

#[test]
fn empty_sequence_sentinels() {
    let display = compute_weight_metrics(&[]).display();
    assert_eq!(display.current, "N/A");
    assert_eq!(display.seven_day_avg, "N/A");
    assert_eq!(display.thirty_day_avg, "N/A");
    assert_eq!(display.change, "0.0");
    assert_eq!(compute_entry_streak(&[]), 0);
    assert_eq!(compute_nutrition_averages(&[]), None);
}

#[test]
fn weight_metrics_over_imported_history() {
    let records = two_weeks();
    let display = compute_weight_metrics(&records).display();

    assert_eq!(display.current, "179.0");
    // Last 7 records: 180.9, 180.2, 179.8, (abc), 179.4, 179.5, 179.0
    assert_eq!(display.seven_day_avg, "179.8");
    assert_eq!(display.change, "-3.4");
}

#[test]
fn streak_spans_full_history() {
    assert_eq!(compute_entry_streak(&two_weeks()), 14);
}

#[test]
fn nutrition_averages_over_imported_history() {
    let records = two_weeks();
    let averages = compute_nutrition_averages(&records).unwrap();

    let seven = averages.seven_day.display();
    assert_eq!(seven.entry_count, 4);
    // (2600 + 2050 + 1950 + 2100) / 4
    assert_eq!(seven.calories, "2175");
    // (130 + 165 + 170 + 160) / 4
    assert_eq!(seven.protein, "156.3");

    let thirty = averages.thirty_day.display();
    assert_eq!(thirty.entry_count, 9);
    // Record 2024-06-05 has no carbs and contributes zero: 1700 / 9
    assert_eq!(thirty.carbs, "188.9");
}

#[test]
fn weight_series_marks_gaps_and_weekends() {
    let records = two_weeks();
    let series = build_time_series(&records, Metric::Weight);

    assert_eq!(series.labels[0], "Jun 1, 2024");
    assert_eq!(series.daily[4], None);
    assert_eq!(series.rolling_avg_7[4], None);
    assert_eq!(series.daily[10], None);
    // 2024-06-01/02 and 06-08/09 are weekends.
    let weekends: Vec<usize> = series
        .weekend_flags
        .iter()
        .enumerate()
        .filter(|(_, flag)| **flag)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(weekends, vec![0, 1, 7, 8]);
}

#[test]
fn nutrition_series_skips_missing_days() {
    let records = two_weeks();
    let series = build_time_series(&records, Metric::Calories);

    assert_eq!(series.daily[2], None);
    assert_eq!(series.rolling_avg_7[2], None);
    assert_eq!(series.rolling_avg_7[3], Some((2300.0 + 2500.0 + 2100.0) / 3.0));
}

#[test]
fn derivations_are_idempotent() {
    let records = two_weeks();
    let log = RecordLog::from_records(records.clone());

    assert_eq!(
        compute_weight_metrics(&records),
        compute_weight_metrics(&records)
    );
    assert_eq!(compute_entry_streak(&records), compute_entry_streak(&records));
    assert_eq!(
        compute_nutrition_averages(&records),
        compute_nutrition_averages(&records)
    );
    assert_eq!(
        build_time_series(&records, Metric::Protein),
        build_time_series(&records, Metric::Protein)
    );
    assert_eq!(
        log.dashboard(Metric::Carbs, None),
        log.dashboard(Metric::Carbs, None)
    );
    assert_eq!(log.records(), records.as_slice());
}

#[test]
fn dashboard_snapshot_serializes_for_shells() {
    let log = RecordLog::from_records(two_weeks());
    let snapshot = log.dashboard(Metric::Protein, Some(3));

    assert_eq!(snapshot.recent.len(), 3);
    assert_eq!(snapshot.recent[0].date_label, "Jun 14");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["entry_count"], 14);
    assert_eq!(json["streak"], 14);
    assert_eq!(json["nutrition_series"]["metric"], "protein");
    assert_eq!(json["weight_metrics"]["current"], 179.0);
    assert!(json["weight_series"]["daily"][4].is_null());
}
