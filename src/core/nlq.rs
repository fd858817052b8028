//! Natural-language filter translator.
//!
//! Turns a short free-text phrase ("지난주 삭제 xlsx") into a structured
//! [`EventFilter`]. This is substring and token matching over fixed tables,
//! not linguistic parsing: the rule lists below are ordered slices so the
//! priority between competing cues stays explicit. The translator never
//! fails; unrecognized input degrades to an empty or partial filter.

use crate::models::event_type::EventType;
use crate::models::filter::EventFilter;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};

/// Surface token → canonical event type, checked as substrings in this
/// order. A token may appear anywhere in the input; first appearance wins
/// the position in the result, duplicates are suppressed.
const EVENT_TOKENS: &[(&str, EventType)] = &[
    ("생성", EventType::Created),
    ("만들", EventType::Created),
    ("추가", EventType::Created),
    ("수정", EventType::Modified),
    ("변경", EventType::Modified),
    ("이동", EventType::Moved),
    ("옮기", EventType::Moved),
    ("삭제", EventType::Deleted),
    ("없어지", EventType::Deleted),
    ("제거", EventType::Deleted),
];

/// Synonym → extension(s) table, matched as substrings of the lowercased
/// input (Korean is agglutinative, so "엑셀로" still means Excel).
const EXT_SYNONYMS: &[(&str, &[&str])] = &[
    ("워드", &[".doc", ".docx"]),
    ("엑셀", &[".xls", ".xlsx"]),
    ("한글", &[".hwp"]),
    ("파워포인트", &[".ppt", ".pptx"]),
    ("파포", &[".ppt", ".pptx"]),
    ("pdf", &[".pdf"]),
    ("텍스트", &[".txt"]),
    ("이미지", &[".png", ".jpg", ".jpeg"]),
    ("사진", &[".png", ".jpg", ".jpeg"]),
];

/// Bare extension names, matched only as whole tokens ("xlsx" means .xlsx,
/// but "xlsx" inside another word does not).
const EXT_NAMES: &[&str] = &[
    "doc", "docx", "xls", "xlsx", "hwp", "ppt", "pptx", "pdf", "txt", "png", "jpg", "jpeg",
];

/// Pure stop-words dropped from the residual keyword.
const DROP_WORDS: &[&str] = &[
    "오늘", "어제", "이번", "지난", "이번주", "지난주", "이번달", "지난달", "파일", "확장자",
    "중", "포함",
];

/// Longest dot-token still treated as an extension literal.
const EXT_TOKEN_MAX: usize = 6;

/// Translate a phrase against the current local clock.
pub fn translate(text: &str) -> EventFilter {
    translate_at(text, Local::now().naive_local())
}

/// Deterministic variant: all relative date phrases resolve against `now`.
pub fn translate_at(text: &str, now: NaiveDateTime) -> EventFilter {
    let text = text.trim();
    if text.is_empty() {
        return EventFilter::default();
    }

    let (start, end) = resolve_date_range(text, now);

    let mut event_types = Vec::new();
    for (surface, etype) in EVENT_TOKENS {
        if text.contains(*surface) && !event_types.contains(etype) {
            event_types.push(*etype);
        }
    }

    let lowered = text.to_lowercase();
    let mut extensions: Vec<String> = Vec::new();
    for tok in tokens(text) {
        let tok_lower = tok.to_lowercase();
        let ext = if tok.starts_with('.') && tok.chars().count() <= EXT_TOKEN_MAX {
            tok_lower
        } else if EXT_NAMES.contains(&tok_lower.as_str()) {
            format!(".{tok_lower}")
        } else {
            continue;
        };
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }
    for (key, exts) in EXT_SYNONYMS {
        if lowered.contains(*key) {
            for ext in exts.iter().copied() {
                if !extensions.iter().any(|e| e.as_str() == ext) {
                    extensions.push(ext.to_string());
                }
            }
        }
    }

    // Residual keyword: whatever the three passes above did not claim.
    let mut keywords: Vec<&str> = Vec::new();
    for tok in tokens(text) {
        if DROP_WORDS.contains(&tok) || tok.starts_with('.') {
            continue;
        }
        if EVENT_TOKENS.iter().any(|(surface, _)| tok.contains(*surface)) {
            continue;
        }
        let tok_lower = tok.to_lowercase();
        if EXT_SYNONYMS.iter().any(|(key, _)| *key == tok_lower)
            || EXT_NAMES.contains(&tok_lower.as_str())
        {
            continue;
        }
        keywords.push(tok);
    }

    EventFilter {
        keyword: keywords.join(" "),
        start,
        end,
        event_types,
        extensions,
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Ordered date-range rules; only the first match applies. Relative phrases
/// are checked against the whitespace-stripped text, the `A~B` range and the
/// literal-date scan against the raw text.
fn resolve_date_range(
    text: &str,
    now: NaiveDateTime,
) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
    let squeezed: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let d0 = start_of_day(now.date());
    let day = Duration::days(1);
    let sec = Duration::seconds(1);

    if squeezed.contains("오늘") {
        return (Some(d0), Some(d0 + day - sec));
    }
    if squeezed.contains("어제") {
        return (Some(d0 - day), Some(d0 - sec));
    }
    if squeezed.contains("이번주") {
        let s = d0 - Duration::days(i64::from(now.date().weekday().num_days_from_monday()));
        return (Some(s), Some(s + Duration::days(7) - sec));
    }
    if squeezed.contains("지난주") {
        let s = d0 - Duration::days(i64::from(now.date().weekday().num_days_from_monday()) + 7);
        return (Some(s), Some(s + Duration::days(7) - sec));
    }
    if squeezed.contains("이번달") {
        let first = first_of_month(now.date());
        let next = first_of_next_month(now.date());
        return (Some(start_of_day(first)), Some(start_of_day(next) - sec));
    }
    if squeezed.contains("지난달") {
        let last_prev = first_of_month(now.date()).pred_opt().unwrap_or(now.date());
        let first_prev = first_of_month(last_prev);
        return (
            Some(start_of_day(first_prev)),
            Some(start_of_day(last_prev) + day - sec),
        );
    }
    if let Some((a, b)) = text.split_once('~')
        && let (Some(s), Some(e)) = (parse_date_prefix(a), parse_date_prefix(b))
    {
        return (Some(start_of_day(s)), Some(start_of_day(e) + day - sec));
    }
    for tok in text.split_whitespace() {
        if let Some(d) = parse_date_shaped(tok) {
            return (Some(start_of_day(d)), Some(start_of_day(d) + day - sec));
        }
    }
    (None, None)
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is always valid")
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 is always valid")
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).expect("january 1 is always valid")
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            .expect("day 1 of next month is always valid")
    }
}

/// First 10 characters of the trimmed side of an `A~B` range, parsed as a
/// calendar date.
fn parse_date_prefix(s: &str) -> Option<NaiveDate> {
    let prefix: String = s.trim().chars().take(10).collect();
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok()
}

/// A whitespace-delimited token shaped like `YYYY-MM-DD` (dashes at
/// positions 4 and 7), possibly with trailing characters.
fn parse_date_shaped(tok: &str) -> Option<NaiveDate> {
    let chars: Vec<char> = tok.chars().collect();
    if chars.len() >= 10 && chars[4] == '-' && chars[7] == '-' {
        let prefix: String = chars[..10].iter().collect();
        return NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok();
    }
    None
}
