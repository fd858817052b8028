use serde::Serialize;

/// Classification of a filesystem change.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    Created,
    Modified,
    Moved,
    Deleted,
}

impl EventType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::Created => "created",
            EventType::Modified => "modified",
            EventType::Moved => "moved",
            EventType::Deleted => "deleted",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "created" => Some(EventType::Created),
            "modified" => Some(EventType::Modified),
            "moved" => Some(EventType::Moved),
            "deleted" => Some(EventType::Deleted),
            _ => None,
        }
    }

}
