use chrono::NaiveDate;
use fwlogger::core::nlq::translate_at;
use fwlogger::models::event_type::EventType;

mod common;
use common::parse_time;

/// Wednesday, mid-month, mid-year: makes every relative phrase distinct.
fn fixed_now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 15)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

#[test]
fn test_empty_input_yields_empty_filter() {
    let f = translate_at("", fixed_now());
    assert!(f.is_empty());
    let f = translate_at("   ", fixed_now());
    assert!(f.is_empty());
}

#[test]
fn test_today_deleted_xlsx() {
    let f = translate_at("오늘 삭제 xlsx", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-05-15 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-05-15 23:59:59")));
    assert_eq!(f.event_types, vec![EventType::Deleted]);
    assert!(f.extensions.iter().any(|e| e == ".xlsx"));
    assert_eq!(f.keyword, "");
}

#[test]
fn test_yesterday_range() {
    let f = translate_at("어제 수정된 파일", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-05-14 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-05-14 23:59:59")));
    assert_eq!(f.event_types, vec![EventType::Modified]);
}

#[test]
fn test_this_week_starts_monday() {
    let f = translate_at("이번주", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-05-13 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-05-19 23:59:59")));
}

#[test]
fn test_last_week_range() {
    let f = translate_at("지난주 삭제", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-05-06 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-05-12 23:59:59")));
    assert_eq!(f.event_types, vec![EventType::Deleted]);
}

#[test]
fn test_this_month_range() {
    let f = translate_at("이번달", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-05-01 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-05-31 23:59:59")));
}

#[test]
fn test_last_month_range() {
    let f = translate_at("지난달 생성", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-04-01 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-04-30 23:59:59")));
}

#[test]
fn test_last_month_across_year_boundary() {
    let january = NaiveDate::from_ymd_opt(2024, 1, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let f = translate_at("지난달", january);
    assert_eq!(f.start, Some(parse_time("2023-12-01 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2023-12-31 23:59:59")));
}

#[test]
fn test_relative_phrase_survives_inner_whitespace() {
    let f = translate_at("이번 주 수정", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-05-13 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-05-19 23:59:59")));
}

#[test]
fn test_explicit_tilde_range() {
    let f = translate_at("2024-01-01 ~ 2024-01-31 엑셀", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-01-01 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-01-31 23:59:59")));
    assert_eq!(f.extensions, vec![".xls".to_string(), ".xlsx".to_string()]);
}

#[test]
fn test_single_literal_date() {
    let f = translate_at("2024-03-09 생성", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-03-09 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-03-09 23:59:59")));
    assert_eq!(f.event_types, vec![EventType::Created]);
}

#[test]
fn test_first_matching_date_rule_wins() {
    // "오늘" outranks the literal date; only one range rule ever applies
    let f = translate_at("오늘 2024-01-01", fixed_now());
    assert_eq!(f.start, Some(parse_time("2024-05-15 00:00:00")));
    assert_eq!(f.end, Some(parse_time("2024-05-15 23:59:59")));
}

#[test]
fn test_event_type_synonyms_and_dedup() {
    let f = translate_at("만들고 추가한 것", fixed_now());
    assert_eq!(f.event_types, vec![EventType::Created]);

    let f = translate_at("이동 또는 옮기거나 제거", fixed_now());
    assert_eq!(f.event_types, vec![EventType::Moved, EventType::Deleted]);
}

#[test]
fn test_extension_synonyms() {
    let f = translate_at("이미지 파일", fixed_now());
    assert_eq!(
        f.extensions,
        vec![".png".to_string(), ".jpg".to_string(), ".jpeg".to_string()]
    );

    let f = translate_at("한글 문서", fixed_now());
    assert_eq!(f.extensions, vec![".hwp".to_string()]);
}

#[test]
fn test_dot_token_extension_is_lowercased() {
    let f = translate_at("어제 .PDF", fixed_now());
    assert_eq!(f.extensions, vec![".pdf".to_string()]);
}

#[test]
fn test_bare_extension_name_without_dot() {
    let f = translate_at("pptx 변경", fixed_now());
    assert_eq!(f.extensions, vec![".pptx".to_string()]);
    assert_eq!(f.event_types, vec![EventType::Modified]);
}

#[test]
fn test_residual_keyword_keeps_unclaimed_tokens() {
    let f = translate_at("오늘 생성 보고서", fixed_now());
    assert_eq!(f.keyword, "보고서");
    assert_eq!(f.event_types, vec![EventType::Created]);
}

#[test]
fn test_stop_words_dropped_from_keyword() {
    let f = translate_at("지난주 파일 중 결산 포함", fixed_now());
    assert_eq!(f.keyword, "결산");
}

#[test]
fn test_no_date_cue_leaves_bounds_empty() {
    let f = translate_at("삭제 엑셀", fixed_now());
    assert_eq!(f.start, None);
    assert_eq!(f.end, None);
    assert_eq!(f.event_types, vec![EventType::Deleted]);
}
