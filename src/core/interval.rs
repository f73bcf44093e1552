use chrono::{Local, NaiveDate};

/// Check whether a placement is active at the reference date
///
/// A placement is active when it has no end date (open-ended) or its end date
/// has not passed yet. Both sides are `NaiveDate`, so the comparison is at
/// day granularity; timestamp and timezone noise is shed before the data
/// reaches this function.
#[inline]
pub fn is_active(end_date: Option<NaiveDate>, reference: NaiveDate) -> bool {
    match end_date {
        None => true,
        Some(end) => end >= reference,
    }
}

/// Today in local time, truncated to the day. Default reference date for
/// availability computations.
#[inline]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
