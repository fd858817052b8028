//! Memo segmenter: splits free text into discrete items on blank-line
//! boundaries. Items are transient; only user-selected ones become tasks.

use crate::models::memo_item::MemoItem;

const TITLE_CAP: usize = 120;
const DETAILS_CAP: usize = 500;

/// Split on blank lines, trim each block, drop wholly-blank blocks and
/// assign 1-based indices in block order. The title is the block's first
/// line, details are the remaining lines joined with single spaces; both are
/// capped at a fixed character count.
pub fn parse_memo(text: &str) -> Vec<MemoItem> {
    let normalized = text.replace("\r\n", "\n");
    let mut out = Vec::new();
    let mut index = 0;

    for block in normalized.trim().split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        index += 1;

        let mut lines = block.lines();
        let title: String = lines.next().unwrap_or("").chars().take(TITLE_CAP).collect();
        let details: String = lines
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(DETAILS_CAP)
            .collect();

        out.push(MemoItem {
            index,
            title,
            details,
        });
    }
    out
}

/// One bullet line per item, or a fixed "no content" message.
pub fn summarize_memo(text: &str) -> String {
    let items = parse_memo(text);
    if items.is_empty() {
        return "(메모가 비어 있습니다)".to_string();
    }
    let mut lines = vec!["오늘 메모 요약:".to_string()];
    for item in &items {
        lines.push(format!("- #{}: {}", item.index, item.title));
    }
    lines.join("\n")
}
