use fwlogger::core::query::merge_filters;
use fwlogger::models::event_type::EventType;
use fwlogger::models::filter::EventFilter;

mod common;
use common::parse_time;

#[test]
fn test_explicit_fields_win() {
    let explicit = EventFilter {
        keyword: String::new(),
        start: Some(parse_time("2025-01-01 00:00:00")),
        end: None,
        event_types: vec![EventType::Created],
        extensions: vec![".txt".to_string()],
    };
    let nlq = EventFilter {
        keyword: String::new(),
        start: Some(parse_time("2024-06-01 00:00:00")),
        end: Some(parse_time("2024-06-30 23:59:59")),
        event_types: vec![EventType::Deleted],
        extensions: vec![".pdf".to_string()],
    };

    let merged = merge_filters(explicit, nlq);
    assert_eq!(merged.start, Some(parse_time("2025-01-01 00:00:00")));
    assert_eq!(merged.end, Some(parse_time("2024-06-30 23:59:59")));
    assert_eq!(merged.event_types, vec![EventType::Created]);
    assert_eq!(merged.extensions, vec![".txt".to_string()]);
}

#[test]
fn test_empty_explicit_falls_back_to_nlq() {
    let nlq = EventFilter {
        keyword: "보고서".to_string(),
        start: Some(parse_time("2024-06-01 00:00:00")),
        end: None,
        event_types: vec![EventType::Deleted],
        extensions: vec![".xlsx".to_string()],
    };

    let merged = merge_filters(EventFilter::default(), nlq.clone());
    assert_eq!(merged, nlq);
}

#[test]
fn test_keywords_are_joined() {
    let explicit = EventFilter {
        keyword: "결산".to_string(),
        ..Default::default()
    };
    let nlq = EventFilter {
        keyword: "보고서".to_string(),
        ..Default::default()
    };

    let merged = merge_filters(explicit, nlq);
    assert_eq!(merged.keyword, "결산 보고서");
}

#[test]
fn test_merging_two_empty_filters_is_empty() {
    let merged = merge_filters(EventFilter::default(), EventFilter::default());
    assert!(merged.is_empty());
}
