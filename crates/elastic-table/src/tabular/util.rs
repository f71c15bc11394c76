//! Text measurement, padding and word wrapping.
//!
//! Widths are terminal display columns, not bytes or chars: CJK characters
//! and most emoji count as two columns, combining marks as zero.

use console::{measure_text_width, pad_str, Alignment, AnsiCodeIterator};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string.
///
/// This is a thin wrapper around `console::measure_text_width`, which
/// handles wide and zero-width characters and ignores ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use elastic_table::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Returns the display width of a cell, which may span several lines.
///
/// Explicit newlines split the cell; the widest line wins.
///
/// ```rust
/// use elastic_table::cell_width;
///
/// assert_eq!(cell_width("short\nmuch longer"), 11);
/// ```
pub fn cell_width(s: &str) -> usize {
    s.split('\n')
        .map(|line| display_width(line.trim_end_matches('\r')))
        .max()
        .unwrap_or(0)
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Strings already wider than `width` are returned unchanged.
///
/// ```rust
/// use elastic_table::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Word-wraps text so every line fits within `max_width` display columns.
///
/// Lines break at whitespace. A word wider than `max_width` is broken
/// mid-word. Explicit newlines always start a new line. The whitespace run a
/// line breaks at is replaced by the break; all other text, whitespace
/// included, is kept as written.
///
/// The result always has at least one line, even for empty input. A
/// `max_width` of zero is treated as one.
///
/// A single character wider than `max_width` (a CJK character in a
/// one-column field) is placed on its own line and overflows it. ANSI escape
/// sequences take no width and are never split.
///
/// ```rust
/// use elastic_table::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
/// assert_eq!(wrap("a  b", 10), vec!["a  b"]);
/// assert_eq!(wrap("", 10), vec![""]);
/// ```
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    let mut lines = Vec::new();
    for line in text.split('\n') {
        LineWrapper::new(width, &mut lines).fill(line.trim_end_matches('\r'));
    }
    lines
}

/// Splits a line into alternating runs of whitespace and non-whitespace.
///
/// Yields `(run, is_whitespace)`.
fn runs(line: &str) -> impl Iterator<Item = (&str, bool)> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() != space)
            .map_or(rest.len(), |(i, _)| i);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some((run, space))
    })
}

/// Fills lines for one newline-free line of text.
struct LineWrapper<'a> {
    width: usize,
    out: &'a mut Vec<String>,
    start: usize,
    current: String,
    current_width: usize,
}

impl<'a> LineWrapper<'a> {
    fn new(width: usize, out: &'a mut Vec<String>) -> Self {
        let start = out.len();
        LineWrapper {
            width,
            out,
            start,
            current: String::new(),
            current_width: 0,
        }
    }

    /// Appends at least one line to `out`.
    fn fill(mut self, line: &str) {
        let mut pending: Option<&str> = None;

        for (run, space) in runs(line) {
            if space {
                if self.current.is_empty() {
                    // Leading whitespace is content.
                    self.push_broken(run);
                } else {
                    pending = Some(run);
                }
                continue;
            }

            let word_width = display_width(run);
            let separator = pending.take().unwrap_or("");
            let separator_width = display_width(separator);

            if !self.current.is_empty() {
                if self.current_width + separator_width + word_width <= self.width {
                    self.push(separator, separator_width);
                    self.push(run, word_width);
                    continue;
                }
                // The separator is consumed by the break.
                self.break_line();
            }

            if word_width <= self.width {
                self.push(run, word_width);
            } else {
                self.push_broken(run);
            }
        }

        if let Some(trailing) = pending {
            self.push_broken(trailing);
        }
        if !self.current.is_empty() || self.out.len() == self.start {
            self.out.push(self.current);
        }
    }

    fn push(&mut self, text: &str, width: usize) {
        self.current.push_str(text);
        self.current_width += width;
    }

    fn break_line(&mut self) {
        self.out.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    /// Appends `text` character by character, breaking whenever the line is
    /// full. The trailing fragment stays open so following words can join it.
    fn push_broken(&mut self, text: &str) {
        for (part, is_ansi) in AnsiCodeIterator::new(text) {
            if is_ansi {
                self.current.push_str(part);
                continue;
            }
            for c in part.chars() {
                let char_width = c.width().unwrap_or(0);
                if self.current_width > 0 && self.current_width + char_width > self.width {
                    self.break_line();
                }
                self.current.push(c);
                self.current_width += char_width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- display_width tests ---

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width(" "), 1);
    }

    #[test]
    fn display_width_unicode() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("café"), 4);
    }

    #[test]
    fn display_width_ignores_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
    }

    // --- cell_width tests ---

    #[test]
    fn cell_width_single_line() {
        assert_eq!(cell_width("hello"), 5);
        assert_eq!(cell_width(""), 0);
    }

    #[test]
    fn cell_width_multi_line_takes_widest() {
        assert_eq!(cell_width("ab\nabcdef\nabc"), 6);
        assert_eq!(cell_width("abc\r\nab"), 3);
    }

    // --- pad_right tests ---

    #[test]
    fn pad_right_pads_to_width() {
        assert_eq!(pad_right("", 3), "   ");
        assert_eq!(pad_right("ab", 4), "ab  ");
    }

    #[test]
    fn pad_right_wide_chars() {
        let padded = pad_right("日本", 5);
        assert_eq!(padded, "日本 ");
        assert_eq!(display_width(&padded), 5);
    }

    #[test]
    fn pad_right_never_truncates() {
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    // --- wrap tests ---

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("hello", 10), vec!["hello"]);
        assert_eq!(wrap("hello", 5), vec!["hello"]);
    }

    #[test]
    fn wrap_breaks_at_whitespace() {
        assert_eq!(
            wrap("a very long biography text", 11),
            vec!["a very long", "biography", "text"]
        );
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(wrap("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn wrap_fragment_joins_next_word() {
        assert_eq!(wrap("abcdef g", 4), vec!["abcd", "ef g"]);
    }

    #[test]
    fn wrap_empty_text_yields_one_line() {
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn wrap_honours_newlines() {
        assert_eq!(wrap("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_keeps_whitespace_runs() {
        assert_eq!(wrap("a  b\tc", 40), vec!["a  b\tc"]);
        assert_eq!(wrap("x    y", 6), vec!["x    y"]);
        assert_eq!(wrap("  indented", 10), vec!["  indented"]);
        assert_eq!(wrap("   ", 5), vec!["   "]);
    }

    #[test]
    fn wrap_drops_only_the_run_at_a_break() {
        assert_eq!(wrap("ab   cd  ef", 6), vec!["ab", "cd  ef"]);
        assert_eq!(wrap("ab ", 2), vec!["ab", " "]);
    }

    #[test]
    fn wrap_breaks_long_leading_whitespace() {
        assert_eq!(wrap("   x", 3), vec!["   ", "x"]);
    }

    #[test]
    fn wrap_never_splits_ansi_sequences() {
        let lines = wrap("\x1b[31mabcdef\x1b[0m", 3);
        assert_eq!(lines, vec!["\x1b[31mabc", "def\x1b[0m"]);
        for line in &lines {
            assert_eq!(display_width(line), 3);
        }
    }

    #[test]
    fn wrap_cjk_by_display_width() {
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn wrap_zero_width_behaves_as_one() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn wrap_wide_char_in_narrow_field_overflows_alone() {
        assert_eq!(wrap("日本", 1), vec!["日", "本"]);
    }

    #[test]
    fn wrap_lines_respect_width() {
        let text = "the quick brown fox jumps over the extraordinarily lazy dog";
        for width in 1..20 {
            for line in wrap(text, width) {
                assert!(display_width(&line) <= width, "{:?} at {}", line, width);
            }
        }
    }
}
