//! Multi-line row rendering.
//!
//! A logical row becomes as many physical lines as its tallest wrapped cell.
//! Shorter cells are padded with blank fields on the extra lines.

use std::io::{self, Write};

use super::util::{pad_right, wrap};

/// Renders rows against a fixed set of column widths.
///
/// # Example
///
/// ```rust
/// use elastic_table::RowRenderer;
///
/// let widths = [2, 5];
/// let renderer = RowRenderer::new(&widths);
/// let out = renderer.format_row(&["Al", "aaa bbb"], "|", " ");
/// assert_eq!(out, " Al | aaa   \n    | bbb   \n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RowRenderer<'a> {
    widths: &'a [usize],
}

impl<'a> RowRenderer<'a> {
    pub fn new(widths: &'a [usize]) -> Self {
        RowRenderer { widths }
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    /// Writes one logical row and returns how many physical lines it took.
    ///
    /// Every field is `padding + content + padding`, left-justified to its
    /// column width. Fields are joined by `border`; the last field ends the
    /// line. Cells beyond the column count are ignored and missing cells
    /// render blank.
    pub fn render_row<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        cells: &[S],
        border: &str,
        padding: &str,
    ) -> io::Result<usize> {
        let wrapped: Vec<Vec<String>> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let text = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
                wrap(text, width)
            })
            .collect();

        let subrows = wrapped.iter().map(Vec::len).max().unwrap_or(0);
        let last = self.widths.len().saturating_sub(1);

        let mut line = String::new();
        for sub in 0..subrows {
            line.clear();
            for (i, (&width, lines)) in self.widths.iter().zip(&wrapped).enumerate() {
                let text = lines.get(sub).map(String::as_str).unwrap_or("");
                line.push_str(padding);
                line.push_str(&pad_right(text, width));
                line.push_str(padding);
                if i < last {
                    line.push_str(border);
                } else {
                    line.push('\n');
                }
            }
            out.write_all(line.as_bytes())?;
        }

        Ok(subrows)
    }

    /// Renders one logical row into a string.
    pub fn format_row<S: AsRef<str>>(&self, cells: &[S], border: &str, padding: &str) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render_row(&mut buf, cells, border, padding);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Cells for a divider row: `fill` repeated to each column's width.
    ///
    /// `fill` is expected to be a single-column character.
    pub fn divider_cells(&self, fill: char) -> Vec<String> {
        self.widths
            .iter()
            .map(|&width| std::iter::repeat(fill).take(width).collect())
            .collect()
    }
}
