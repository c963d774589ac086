//! Plain-text fitting helpers: word wrap, tail ellipsis, single-line truncation.
//!
//! Widths are terminal columns as ratatui measures them, so wide glyphs count twice.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to text that was cut short.
pub const ELLIPSIS: char = '…';

/// Longest prefix of `text` that fits in `width` columns.
fn prefix_within(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[..index];
        }
    }
    text
}

/// Greedy word wrap. Words wider than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for mut word in text.split_whitespace() {
        // Hard-split words that can never fit on a line of their own.
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut cut = prefix_within(word, width).len();
            if cut == 0 {
                // A single glyph wider than the line still has to go somewhere.
                cut = word.chars().next().map_or(word.len(), char::len_utf8);
            }
            let (head, rest) = word.split_at(cut);
            lines.push(head.to_string());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }

        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Keep at most `max_lines` lines, marking the last kept line with an ellipsis when
/// anything was dropped.
pub fn ellipsize(mut lines: Vec<String>, max_lines: usize, width: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let mut cut = prefix_within(last, width.saturating_sub(1)).to_string();
        cut.push(ELLIPSIS);
        *last = cut;
    }
    lines
}

/// Fit a single line into `width` columns, ending with an ellipsis if shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut = prefix_within(text, width - 1).to_string();
    cut.push(ELLIPSIS);
    cut
}
