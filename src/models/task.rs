use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Done,
}

impl TaskStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// A memo item persisted with a due date, awaiting resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub task_text: String,
    pub due_date: NaiveDate,    // ⇔ tasks.due_date (TEXT "YYYY-MM-DD")
    pub status: TaskStatus,
    pub created_at: String,     // ⇔ tasks.created_at (TEXT, second resolution)
}
