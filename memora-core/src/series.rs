use chrono::{Days, NaiveDate};

use crate::{Error, InternalResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `count` consecutive calendar days, oldest first, with `end` as the last one
pub fn trailing_days(end: NaiveDate, count: u64) -> InternalResult<Vec<NaiveDate>> {
    (0..count)
        .rev()
        .map(|offset| days_before(end, offset))
        .collect()
}

pub fn days_before(date: NaiveDate, days: u64) -> InternalResult<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or_else(|| Error::internal(format!("date out of range: {} minus {} days", date, days)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
