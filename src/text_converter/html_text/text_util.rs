//! Whitespace and word-wrap helpers shared by the builder and walker.

use std::borrow::Cow;

use textwrap::{Options as TextWrapOptions, WordSeparator, WrapAlgorithm};

/// Characters collapsed as whitespace outside preformatted blocks.
///
/// Non-breaking space is deliberately absent so `&nbsp;` survives.
#[inline]
pub(crate) fn is_html_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{000C}' | '\u{200B}')
}

/// Append `text` to `buffer`, collapsing each whitespace run into one space.
///
/// A run is never emitted directly after existing trailing whitespace in the
/// buffer, so adjacent text nodes compose without doubled spaces.
pub(crate) fn push_collapsed(buffer: &mut String, text: &str) {
    let mut pending_space = false;
    for c in text.chars() {
        if is_html_whitespace(c) {
            pending_space = true;
            continue;
        }
        if pending_space && !buffer.is_empty() && !buffer.ends_with([' ', '\n']) {
            buffer.push(' ');
        }
        pending_space = false;
        buffer.push(c);
    }
    if pending_space && !buffer.is_empty() && !buffer.ends_with([' ', '\n']) {
        buffer.push(' ');
    }
}

/// Greedy word wrap of one logical line.
///
/// Words are separated by single spaces (the line is already collapsed).
/// Widths are display columns, so wide (CJK) characters count double.
/// Words longer than `width` get a line of their own and are never split.
pub(crate) fn wrap_line(line: &str, width: Option<usize>, out: &mut Vec<String>) {
    let line = line.trim_matches(' ');

    let Some(width) = width else {
        let words: Vec<&str> = line.split(' ').filter(|w| !w.is_empty()).collect();
        out.push(words.join(" "));
        return;
    };

    let options = TextWrapOptions::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    out.extend(textwrap::wrap(line, options).into_iter().map(Cow::into_owned));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_collapsed_merges_runs() {
        let mut buf = String::new();
        push_collapsed(&mut buf, "  hello \n\t world  ");
        assert_eq!(buf, "hello world ");
    }

    #[test]
    fn test_push_collapsed_keeps_nbsp() {
        let mut buf = String::new();
        push_collapsed(&mut buf, "a\u{a0}b");
        assert_eq!(buf, "a\u{a0}b");
    }

    #[test]
    fn test_push_collapsed_no_double_space_across_nodes() {
        let mut buf = String::from("foo ");
        push_collapsed(&mut buf, " bar");
        assert_eq!(buf, "foo bar");
    }

    #[test]
    fn test_wrap_line() {
        let mut out = Vec::new();
        wrap_line("aaa bbb ccc ddd", Some(7), &mut out);
        assert_eq!(out, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_wrap_line_long_word_not_split() {
        let mut out = Vec::new();
        wrap_line("a https://example.com/very/long/path b", Some(10), &mut out);
        assert_eq!(out, vec!["a", "https://example.com/very/long/path", "b"]);
    }

    #[test]
    fn test_wrap_line_counts_display_columns() {
        let line = vec!["漢字漢字"; 10].join(" ");
        let mut out = Vec::new();
        wrap_line(&line, Some(20), &mut out);
        // Each word is 8 columns wide, so two fit in 20 but three do not
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|wrapped| wrapped == "漢字漢字 漢字漢字"));
        for wrapped in &out {
            assert!(textwrap::core::display_width(wrapped) <= 20);
        }
    }

    #[test]
    fn test_wrap_line_empty() {
        let mut out = Vec::new();
        wrap_line("", Some(10), &mut out);
        assert_eq!(out, vec![""]);
    }

    #[test]
    fn test_wrap_line_disabled() {
        let mut out = Vec::new();
        wrap_line(" a  b ", None, &mut out);
        assert_eq!(out, vec!["a b"]);
    }
}
