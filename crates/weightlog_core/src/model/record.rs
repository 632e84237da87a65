//! Daily record domain model.
//!
//! # Responsibility
//! - Define the record shared by import, manual entry and derivations.
//! - Validate manual entries before they join the record sequence.
//!
//! # Invariants
//! - Fields hold text exactly as imported (trimmed); `None` means absent.
//! - A record never coerces missing or unparsable text to zero.
//! - Manual entries always carry a parsable date and a numeric weight.

use crate::model::metric::Metric;
use crate::model::value::{non_empty, parse_calendar_date, parse_numeric};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One logged day.
///
/// Dates are not required to be unique or chronological; derivations read
/// the sequence in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Calendar date text, normally `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Body weight in pounds.
    pub weight: Option<String>,
    pub calories: Option<String>,
    /// Grams.
    pub protein: Option<String>,
    /// Grams.
    pub carbs: Option<String>,
    /// Grams.
    pub fats: Option<String>,
}

impl Record {
    /// Creates a record for `date` with every metric absent.
    pub fn on(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Builder-style setter used by import paths and fixtures.
    pub fn with(mut self, metric: Metric, value: impl Into<String>) -> Self {
        self.set(metric, Some(value.into()));
        self
    }

    /// Stores `value` for `metric`; empty text is stored as `None`.
    pub fn set(&mut self, metric: Metric, value: Option<String>) {
        let value = value.and_then(|raw| non_empty(Some(raw.as_str())).map(str::to_string));
        let slot = match metric {
            Metric::Weight => &mut self.weight,
            Metric::Calories => &mut self.calories,
            Metric::Protein => &mut self.protein,
            Metric::Carbs => &mut self.carbs,
            Metric::Fats => &mut self.fats,
        };
        *slot = value;
    }

    /// Non-empty date text.
    pub fn date_text(&self) -> Option<&str> {
        non_empty(self.date.as_deref())
    }

    /// Parsed calendar date, `None` when missing or unparsable.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(self.date.as_deref())
    }

    /// Whether `metric` carries any text, parsable or not.
    pub fn has_text(&self, metric: Metric) -> bool {
        non_empty(metric.raw(self)).is_some()
    }

    /// Parsed finite value of `metric`.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        parse_numeric(metric.raw(self))
    }

    /// Whether any nutrition field carries text.
    pub fn has_nutrition(&self) -> bool {
        Metric::NUTRITION
            .iter()
            .any(|metric| self.has_text(*metric))
    }
}

/// Manual entry submitted from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub date: String,
    pub weight: String,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fats: Option<String>,
}

impl NewEntry {
    pub fn new(date: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            weight: weight.into(),
            ..Self::default()
        }
    }

    /// Checks entry invariants without consuming the entry.
    ///
    /// # Errors
    /// - `MissingDate` / `InvalidDate` when the date is blank or unparsable.
    /// - `MissingWeight` when the weight is blank.
    /// - `InvalidNumber` when weight or a provided nutrition value is not
    ///   numeric.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        let date = non_empty(Some(self.date.as_str())).ok_or(EntryValidationError::MissingDate)?;
        if parse_calendar_date(Some(date)).is_none() {
            return Err(EntryValidationError::InvalidDate(date.to_string()));
        }

        let weight =
            non_empty(Some(self.weight.as_str())).ok_or(EntryValidationError::MissingWeight)?;
        require_numeric(Metric::Weight, weight)?;

        for (metric, raw) in self.nutrition_fields() {
            if let Some(value) = non_empty(raw) {
                require_numeric(metric, value)?;
            }
        }
        Ok(())
    }

    /// Validates and converts the entry into a record.
    pub fn into_record(self) -> Result<Record, EntryValidationError> {
        self.validate()?;
        let mut record = Record::on(self.date.trim());
        record.set(Metric::Weight, Some(self.weight));
        record.set(Metric::Calories, self.calories);
        record.set(Metric::Protein, self.protein);
        record.set(Metric::Carbs, self.carbs);
        record.set(Metric::Fats, self.fats);
        Ok(record)
    }

    fn nutrition_fields(&self) -> [(Metric, Option<&str>); 4] {
        [
            (Metric::Calories, self.calories.as_deref()),
            (Metric::Protein, self.protein.as_deref()),
            (Metric::Carbs, self.carbs.as_deref()),
            (Metric::Fats, self.fats.as_deref()),
        ]
    }
}

fn require_numeric(metric: Metric, value: &str) -> Result<(), EntryValidationError> {
    match parse_numeric(Some(value)) {
        Some(_) => Ok(()),
        None => Err(EntryValidationError::InvalidNumber {
            metric,
            value: value.to_string(),
        }),
    }
}

/// Manual entry validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingDate,
    InvalidDate(String),
    MissingWeight,
    InvalidNumber { metric: Metric, value: String },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDate => write!(f, "entry date is required"),
            Self::InvalidDate(value) => write!(f, "entry date is invalid: `{value}`"),
            Self::MissingWeight => write!(f, "entry weight is required"),
            Self::InvalidNumber { metric, value } => {
                write!(f, "entry {metric} must be numeric, got `{value}`")
            }
        }
    }
}

impl Error for EntryValidationError {}
