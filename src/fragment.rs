use tower_lsp::lsp_types::Position;

use crate::lineindex::LineIndex;

/// Lines of context kept on each side of the cursor when slicing a fragment.
pub const FRAGMENT_WINDOW_LINES: u32 = 20;

/// A bounded window of document text around the cursor. `before` ends exactly
/// at the cursor offset and `after` begins exactly there.
#[derive(Debug, Clone)]
pub struct Fragment<'a> {
    pub before: &'a str,
    pub after: &'a str,
}

pub fn extract_fragment<'a>(
    text: &'a str,
    index: &LineIndex,
    position: &Position,
    max_lines: u32,
) -> Fragment<'a> {
    let cursor = floor_char_boundary(text, index.clamped_offset(position));
    let start_line = position.line.saturating_sub(max_lines);
    let start = index.line_start(start_line).unwrap_or(0).min(cursor);
    let end_line = position.line.saturating_add(max_lines);
    let end = index
        .line_start(end_line)
        .unwrap_or(text.len())
        .max(cursor);

    Fragment {
        before: &text[start..cursor],
        after: &text[cursor..end],
    }
}

fn floor_char_boundary(text: &str, mut offset: usize) -> usize {
    offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Whether the cursor sits inside an open tag's attribute area: the last `<`
/// in the window must come strictly after both the last `>` and the last `/`.
/// Windowed and tolerant of malformed markup outside the window.
pub fn is_in_open_tag(before: &str) -> bool {
    let last_lt = before.rfind('<').map(|i| i as isize).unwrap_or(-1);
    let last_gt = before.rfind('>').map(|i| i as isize).unwrap_or(-1);
    let last_slash = before.rfind('/').map(|i| i as isize).unwrap_or(-1);
    last_lt > last_gt && last_lt > last_slash
}

/// Double-quote parity over the fragment. A deliberate approximation: it is
/// only correct while the window does not cut through an odd number of
/// balanced quoted regions, and escaped quotes are not honored.
pub fn in_quoted_value(before: &str) -> bool {
    before.matches('"').count() % 2 == 1
}

/// Reconstructs the unterminated expression the user is typing: everything
/// after the last quote in `before`, joined with everything in `after` up to
/// the next quote or the end of the window.
pub fn live_snippet(before: &str, after: &str) -> String {
    let head = match before.rfind('"') {
        Some(idx) => &before[idx + 1..],
        None => before,
    };
    let tail = match after.find('"') {
        Some(idx) => &after[..idx],
        None => after,
    };
    format!("{head}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment<'a>(text: &'a str, line: u32, character: u32) -> Fragment<'a> {
        let index = LineIndex::new(text);
        extract_fragment(text, &index, &Position::new(line, character), 2)
    }

    #[test]
    fn splits_exactly_at_the_cursor() {
        let frag = fragment("ab\ncd\nef", 1, 1);
        assert_eq!(frag.before, "ab\nc");
        assert_eq!(frag.after, "d\nef");
    }

    #[test]
    fn window_truncates_to_available_lines() {
        let text = "1\n2\n3\n4\n5\n6\n7";
        let frag = fragment(text, 3, 0);
        assert_eq!(frag.before, "2\n3\n");
        assert_eq!(frag.after, "4\n5\n");

        let frag = fragment(text, 0, 0);
        assert_eq!(frag.before, "");
        let frag = fragment(text, 6, 1);
        assert_eq!(frag.after, "");
    }

    #[test]
    fn open_tag_detection() {
        assert!(is_in_open_tag("<div "));
        assert!(is_in_open_tag("<p>text</p>\n<div x-"));
        assert!(!is_in_open_tag("<div>text"));
        assert!(!is_in_open_tag("</div"));
        assert!(!is_in_open_tag("plain text"));
    }

    #[test]
    fn quote_parity() {
        assert!(!in_quoted_value("<div x-"));
        assert!(in_quoted_value("<div x-text=\"cou"));
        assert!(!in_quoted_value("<div x-data=\"{}\" x-"));
    }

    #[test]
    fn snippet_joins_across_the_cursor() {
        assert_eq!(live_snippet("<span x-text=\"cou", "\"></span>"), "cou");
        assert_eq!(live_snippet("<span x-text=\"a + ", "b\">"), "a + b");
        assert_eq!(live_snippet("no quotes ", "at all"), "no quotes at all");
    }
}
