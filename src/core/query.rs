//! Query construction: merging explicit filter fields with the output of
//! the natural-language translator.

use crate::models::filter::EventFilter;

/// Explicit fields take precedence; an empty explicit field falls back to
/// the NLQ-derived one. The keyword is the exception: both keywords are
/// kept, space-joined, when both are present.
pub fn merge_filters(explicit: EventFilter, nlq: EventFilter) -> EventFilter {
    let keyword = [explicit.keyword, nlq.keyword]
        .into_iter()
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    EventFilter {
        keyword,
        start: explicit.start.or(nlq.start),
        end: explicit.end.or(nlq.end),
        event_types: if explicit.event_types.is_empty() {
            nlq.event_types
        } else {
            explicit.event_types
        },
        extensions: if explicit.extensions.is_empty() {
            nlq.extensions
        } else {
            explicit.extensions
        },
    }
}
