//! Consecutive-day entry streak.

use crate::model::record::Record;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Counts consecutive calendar days ending at the most recent logged date.
///
/// Distinct dates are used, so several records on one day count once.
/// Records with a missing or unparsable date are left out before any date
/// arithmetic; a sequence with no usable date yields `0`.
pub fn compute_entry_streak(records: &[Record]) -> u32 {
    let dates: BTreeSet<NaiveDate> = records
        .iter()
        .filter_map(Record::calendar_date)
        .collect();

    let mut newest_first = dates.iter().rev();
    let Some(mut later) = newest_first.next() else {
        return 0;
    };

    let mut streak = 1;
    for earlier in newest_first {
        if later.signed_duration_since(*earlier).num_days() != 1 {
            break;
        }
        streak += 1;
        later = earlier;
    }
    streak
}
