use crate::errors::{AppError, AppResult};
use crate::models::file_event::TIME_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a CLI time bound: a full "YYYY-MM-DD HH:MM:SS" timestamp, or a
/// bare date expanded to the start (`end_of_day = false`) or the end of
/// that day.
pub fn parse_bound(s: &str, end_of_day: bool) -> AppResult<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, TIME_FORMAT) {
        return Ok(dt);
    }
    if let Some(d) = parse_date(s) {
        let dt = if end_of_day {
            d.and_hms_opt(23, 59, 59)
        } else {
            d.and_hms_opt(0, 0, 0)
        };
        return Ok(dt.expect("fixed time of day is always valid"));
    }
    Err(AppError::InvalidDate(s.to_string()))
}
