//! Command-line dashboard for weightlog.
//!
//! # Responsibility
//! - Import a CSV export and print the dashboard derived by core.
//! - Keep the core crate usable without the Flutter/FFI runtime.
//!
//! Usage:
//! ```bash
//! weightlog data.csv
//! weightlog data.csv --metric protein --recent 14
//! weightlog data.csv --json
//! ```

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use weightlog_core::{
    default_log_level, init_logging, log_dir_from_env, DashboardSnapshot, Metric, RecordLog,
    TimeSeries, NOT_AVAILABLE,
};

#[derive(Parser)]
#[command(
    name = "weightlog",
    version,
    about = "Summarize daily weight and nutrition logs from a CSV export"
)]
struct Cli {
    /// CSV file with a `date,weight,calories,protein,carbs,fats` header row
    csv: PathBuf,

    /// Nutrition metric charted below the weight series
    #[arg(long, default_value = "calories")]
    metric: Metric,

    /// Rows in the recent entries table (7 by default, at most 14)
    #[arg(long)]
    recent: Option<usize>,

    /// Print the full dashboard snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute log directory (defaults to $WEIGHTLOG_LOG_DIR; logging stays off if unset)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.clone().or_else(log_dir_from_env) {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("weightlog: logging disabled: {err}");
        }
    }

    info!(
        "event=cli_run module=cli status=start metric={} json={}",
        cli.metric, cli.json
    );
    let mut log = RecordLog::new();
    if let Err(err) = log.import_path(&cli.csv) {
        error!("event=cli_run module=cli status=error error={err}");
        eprintln!("weightlog: failed to import `{}`: {err}", cli.csv.display());
        return ExitCode::FAILURE;
    }

    let snapshot = log.dashboard(cli.metric, cli.recent);
    if cli.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("weightlog: failed to encode snapshot: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_dashboard(&snapshot);
    }
    info!(
        "event=cli_run module=cli status=ok count={} streak={}",
        snapshot.entry_count, snapshot.streak
    );
    ExitCode::SUCCESS
}

fn print_dashboard(snapshot: &DashboardSnapshot) {
    let weight = snapshot.weight_metrics.display();
    println!(
        "Logged {} {} and {} {} in a row.",
        snapshot.entry_count,
        plural(snapshot.entry_count, "entry", "entries"),
        snapshot.streak,
        plural(snapshot.streak as usize, "day", "days")
    );
    println!();
    println!("Current weight   {}", with_unit(&weight.current, "lbs"));
    println!("7-day average    {}", with_unit(&weight.seven_day_avg, "lbs"));
    println!("30-day average   {}", with_unit(&weight.thirty_day_avg, "lbs"));
    println!("Total change     {} lbs", weight.change);
    println!();

    match &snapshot.nutrition {
        Some(nutrition) => {
            let windows = [
                ("7-day", &nutrition.seven_day),
                ("30-day", &nutrition.thirty_day),
            ];
            for (title, window) in windows {
                let display = window.display();
                println!(
                    "{title} nutrition ({} logged): {} kcal, {}g protein, {}g carbs, {}g fats",
                    display.entry_count,
                    display.calories,
                    display.protein,
                    display.carbs,
                    display.fats
                );
            }
        }
        None => println!("No nutrition logged yet."),
    }
    println!("{}", snapshot.encouragement);
    println!();

    println!("Recent entries");
    for entry in &snapshot.recent {
        println!(
            "  {:<8} {:>7}  kcal {:>5}  P {:>5}  C {:>5}  F {:>5}",
            entry.date_label,
            cell(&entry.weight),
            cell(&entry.calories),
            cell(&entry.protein),
            cell(&entry.carbs),
            cell(&entry.fats)
        );
    }
    println!();

    print_series(&snapshot.weight_series);
    println!();
    print_series(&snapshot.nutrition_series);
}

fn print_series(series: &TimeSeries) {
    let labels = series.dataset_labels();
    println!(
        "{:<14} {:>10} {:>10} {:>10}",
        "Date", "Daily", "7-day", "30-day"
    );
    println!(
        "{} / {} / {}",
        labels.daily, labels.rolling_avg_7, labels.rolling_avg_30
    );
    for index in 0..series.len() {
        let marker = if series.weekend_flags[index] { "*" } else { " " };
        println!(
            "{:<13}{marker} {:>10} {:>10} {:>10}",
            series.labels[index],
            point(series.daily[index]),
            point(series.rolling_avg_7[index]),
            point(series.rolling_avg_30[index])
        );
    }
}

fn point(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn with_unit(value: &str, unit: &str) -> String {
    if value == NOT_AVAILABLE {
        value.to_string()
    } else {
        format!("{value} {unit}")
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
