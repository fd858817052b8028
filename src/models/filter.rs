use super::event_type::EventType;
use chrono::NaiveDateTime;

/// Structured query filter consumed by `db::queries::search_events`.
///
/// Produced either from the explicit CLI flags, from the natural-language
/// translator, or from merging the two (`core::query::merge_filters`).
/// Empty fields mean "no restriction". A single-element `extensions` list is
/// the exact-match case; a longer list matches rows whose `ext` is a member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub keyword: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub event_types: Vec<EventType>,
    pub extensions: Vec<String>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
            && self.start.is_none()
            && self.end.is_none()
            && self.event_types.is_empty()
            && self.extensions.is_empty()
    }
}
