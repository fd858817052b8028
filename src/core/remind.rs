//! Next-business-day reminder: due-date computation and the non-interactive
//! reminder mode wired to an OS-level daily scheduler.

use crate::db::queries::get_due_tasks;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use rusqlite::Connection;

/// The next weekday after `from`, at `hour`:00:00. Saturdays and Sundays
/// are skipped.
pub fn next_business_day(from: NaiveDateTime, hour: u32) -> NaiveDateTime {
    let mut day = from.date() + Duration::days(1);
    while matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        day = day + Duration::days(1);
    }
    day.and_hms_opt(hour.min(23), 0, 0)
        .expect("whole hour is always valid")
}

/// Reminder mode: read today's due pending tasks and emit one toast.
/// Intended to be invoked by a daily scheduler, no interactive window.
pub fn run_reminder(conn: &Connection) -> AppResult<()> {
    let tasks = get_due_tasks(conn, date::today())?;
    if tasks.is_empty() {
        messages::toast("오늘의 미처리건", "미처리건이 없습니다. 좋은 하루!");
    } else {
        let body = tasks
            .iter()
            .map(|t| t.task_text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        messages::toast("오늘의 미처리건", &body);
    }
    Ok(())
}
