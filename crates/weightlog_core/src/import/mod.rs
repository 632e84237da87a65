//! Spreadsheet import entry points.
//!
//! # Responsibility
//! - Parse delimited text with a header row into the record model.
//! - Keep file/format concerns out of the derivation layer.
//!
//! # Invariants
//! - Imported rows keep file order; nothing is sorted or deduplicated.
//! - Import never coerces cell text; validity is decided by derivations.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod csv_records;

pub use csv_records::{import_records_from_path, parse_records_csv};

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// Input had no header row.
    EmptyFile,
    /// Header row lacks a required column.
    MissingColumn(&'static str),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Csv(err) => write!(f, "{err}"),
            Self::EmptyFile => write!(f, "import file is empty"),
            Self::MissingColumn(name) => {
                write!(f, "import header is missing required column `{name}`")
            }
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::EmptyFile => None,
            Self::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
