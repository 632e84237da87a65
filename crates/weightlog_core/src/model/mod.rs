//! Record model for daily weight and nutrition logs.
//!
//! # Responsibility
//! - Define the canonical shape of one logged day.
//! - Map every loggable metric to its accessor, label and unit.
//! - Own the numeric/date validity predicates shared by derivations.
//!
//! # Invariants
//! - Record fields keep raw text; absent and empty text both mean "no data".
//! - Unparsable values are never coerced to zero by model helpers.

pub mod metric;
pub mod record;
pub mod value;
