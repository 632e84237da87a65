//! Nutrition averages over positional windows.
//!
//! # Invariants
//! - Only records with at least one nutrition field present count toward a
//!   window's `entry_count`.
//! - Inside that subset a record missing a given field contributes `0` to
//!   that field's sum; the denominator is always `entry_count`.

use crate::analytics::{format_fixed, last_window, round_to, LONG_WINDOW, SHORT_WINDOW};
use crate::model::metric::Metric;
use crate::model::record::Record;
use serde::Serialize;

const NO_DATA_MESSAGE: &str =
    "Ready to start tracking nutrition? Even logging a few days helps spot patterns! 🌟";
const FANTASTIC_MESSAGE: &str =
    "Fantastic nutrition tracking! You're building awesome habits! 💪";
const CONSISTENT_MESSAGE: &str = "Great job staying consistent with nutrition! Keep it up! 🎯";
const STARTED_MESSAGE: &str =
    "Nice start on nutrition tracking! Every entry helps you understand your patterns better! 📊";

const FANTASTIC_MIN_ENTRIES: usize = 5;
const CONSISTENT_MIN_ENTRIES: usize = 3;

/// Averages for one positional window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionWindow {
    /// Rounded to whole calories.
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    /// Records in the window with any nutrition field present.
    pub entry_count: usize,
}

/// String view of [`NutritionWindow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionWindowDisplay {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub entry_count: usize,
}

impl NutritionWindow {
    /// Returns the average stored for a nutrition metric.
    ///
    /// `Metric::Weight` is not part of a nutrition window and reads as `0.0`.
    pub fn average(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Calories => self.calories,
            Metric::Protein => self.protein,
            Metric::Carbs => self.carbs,
            Metric::Fats => self.fats,
            Metric::Weight => 0.0,
        }
    }

    pub fn display(&self) -> NutritionWindowDisplay {
        let text =
            |metric: Metric| format_fixed(self.average(metric), metric.info().summary_decimals);
        NutritionWindowDisplay {
            calories: text(Metric::Calories),
            protein: text(Metric::Protein),
            carbs: text(Metric::Carbs),
            fats: text(Metric::Fats),
            entry_count: self.entry_count,
        }
    }
}

/// Seven- and thirty-record nutrition averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionAverages {
    pub seven_day: NutritionWindow,
    pub thirty_day: NutritionWindow,
}

/// Computes nutrition averages for the last 7 and last 30 records.
///
/// Returns `None` only when neither window holds a nutrition-bearing record.
pub fn compute_nutrition_averages(records: &[Record]) -> Option<NutritionAverages> {
    let seven_day = window_averages(last_window(records, SHORT_WINDOW));
    let thirty_day = window_averages(last_window(records, LONG_WINDOW));

    if seven_day.entry_count == 0 && thirty_day.entry_count == 0 {
        return None;
    }
    Some(NutritionAverages {
        seven_day,
        thirty_day,
    })
}

fn window_averages(window: &[Record]) -> NutritionWindow {
    let logged: Vec<&Record> = window
        .iter()
        .filter(|record| record.has_nutrition())
        .collect();
    let entry_count = logged.len();
    if entry_count == 0 {
        return NutritionWindow::default();
    }

    let average = |metric: Metric| {
        let sum: f64 = logged
            .iter()
            .map(|record| record.value(metric).unwrap_or(0.0))
            .sum();
        round_to(sum / entry_count as f64, metric.info().summary_decimals)
    };

    NutritionWindow {
        calories: average(Metric::Calories),
        protein: average(Metric::Protein),
        carbs: average(Metric::Carbs),
        fats: average(Metric::Fats),
        entry_count,
    }
}

/// Picks the encouragement line shown above the nutrition cards.
pub fn nutrition_encouragement(averages: Option<&NutritionAverages>) -> &'static str {
    match averages.map(|averages| averages.seven_day.entry_count) {
        None => NO_DATA_MESSAGE,
        Some(count) if count >= FANTASTIC_MIN_ENTRIES => FANTASTIC_MESSAGE,
        Some(count) if count >= CONSISTENT_MIN_ENTRIES => CONSISTENT_MESSAGE,
        Some(_) => STARTED_MESSAGE,
    }
}
