//! List passes: item lines and `<ul>` grouping.

use regex::Regex;
use std::sync::LazyLock;

/// Opening tag for a run of list items.
pub const LIST_OPEN: &str = r#"<ul class="list-disc ml-5 mb-2">"#;

/// Closing tag for a run of list items.
pub const LIST_CLOSE: &str = "</ul>";

/// Marker a line must contain to belong to a list run.
const ITEM_MARKER: &str = "<li>";

// CRLF mode anchors `^` after `\r` and `\n`. U+2028 and U+2029 also end a
// line; the regex crate has no such anchor, so they are matched by the
// prefix group and written back. Item content stops at the next terminator.
static BULLET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)(^|[\x{2028}\x{2029}])• ([^\r\n\x{2028}\x{2029}]*)")
        .expect("bullet pattern is valid")
});

static NUMBERED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)(^|[\x{2028}\x{2029}])[0-9]+\. ([^\r\n\x{2028}\x{2029}]*)")
        .expect("numbered pattern is valid")
});

/// Turns lines starting with `• ` into `<li>` items.
pub fn render_bullet_items(text: &str) -> String {
    BULLET_PATTERN
        .replace_all(text, "${1}<li>${2}</li>")
        .into_owned()
}

/// Turns lines starting with `<digits>. ` into `<li>` items, dropping the number.
pub fn render_numbered_items(text: &str) -> String {
    NUMBERED_PATTERN
        .replace_all(text, "${1}<li>${2}</li>")
        .into_owned()
}

/// Position of the line scanner relative to a list run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    OutsideList,
    InsideList,
}

/// Wraps every run of consecutive item lines in a single `<ul>`.
///
/// A line belongs to a run when it contains `<li>` anywhere. The closing
/// tag goes on the last line of the run, so the line count is unchanged.
pub fn wrap_list_items(text: &str) -> String {
    if !text.contains(ITEM_MARKER) {
        return text.to_string();
    }

    let mut lines: Vec<String> = text.split('\n').map(String::from).collect();
    let mut state = ListState::OutsideList;

    for index in 0..lines.len() {
        let is_item = lines[index].contains(ITEM_MARKER);

        state = match (state, is_item) {
            (ListState::OutsideList, true) => {
                lines[index].insert_str(0, LIST_OPEN);
                ListState::InsideList
            }
            (ListState::InsideList, false) => {
                // InsideList is only reachable after an item line, so index >= 1
                lines[index - 1].push_str(LIST_CLOSE);
                ListState::OutsideList
            }
            (current, _) => current,
        };
    }

    if state == ListState::InsideList
        && let Some(last) = lines.last_mut()
    {
        last.push_str(LIST_CLOSE);
    }

    lines.join("\n")
}
