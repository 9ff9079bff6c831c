//! Mutation timestamps.

use chrono::{DateTime, Duration, Utc};

/// Timestamp to record for a mutation of a record last touched at `previous`.
///
/// Always strictly later than `previous`, even when the wall clock has not
/// advanced past it (or went backwards).
pub fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    let floor = previous + Duration::microseconds(1);
    if now > floor {
        now
    } else {
        floor
    }
}
