//! The table model: header, rows and column statistics.
//!
//! # Example
//!
//! ```rust
//! use elastic_table::{Table, TableStyle};
//!
//! let mut table = Table::new(["Name", "Status"])
//!     .style(TableStyle::unicode())
//!     .width(40);
//!
//! table.add_row(["Alice", "Active"]).unwrap();
//! table.add_row(["Bob", "Pending"]).unwrap();
//!
//! // Write to any io::Write sink
//! let mut out = Vec::new();
//! table.render(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), table.render_to_string());
//! ```

use std::io::Write;

use tracing::debug;

use super::optimize::{optimize, Fit, WidthPlan};
use super::render::RowRenderer;
use super::stats::ColumnTracker;
use super::style::TableStyle;
use crate::error::Result;
use crate::terminal::terminal_width;

/// A table of text cells that wraps its columns to fit the output width.
///
/// Rendering never mutates the table: every call plans widths afresh from
/// the recorded statistics, so repeated renders of an unchanged table are
/// byte-identical.
#[derive(Clone, Debug)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    columns: ColumnTracker,
    style: TableStyle,
    width: Option<usize>,
}

impl Table {
    /// Create a table with one column per header entry.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(header: I) -> Self {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        let columns = ColumnTracker::from_header(&header);
        Table {
            header,
            rows: Vec::new(),
            columns,
            style: TableStyle::default(),
            width: None,
        }
    }

    /// Render into a fixed number of display columns instead of asking the
    /// terminal.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the padding, border and divider glyphs.
    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a row.
    ///
    /// The row must have exactly one cell per header column; otherwise it is
    /// rejected with [`TableError::RowShapeMismatch`](crate::TableError) and
    /// the table is left unchanged.
    pub fn add_row<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, row: I) -> Result<()> {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        self.columns.observe_row(&row)?;
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Width statistics per column.
    pub fn columns(&self) -> &ColumnTracker {
        &self.columns
    }

    pub fn get_style(&self) -> &TableStyle {
        &self.style
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The width the table renders into: the configured width, or the
    /// terminal's.
    pub fn available_width(&self) -> usize {
        self.width.unwrap_or_else(terminal_width)
    }

    /// Plan column widths for the current contents and available width.
    pub fn plan(&self) -> WidthPlan {
        self.plan_for(self.available_width())
    }

    /// Plan column widths for an explicit available width.
    pub fn plan_for(&self, available: usize) -> WidthPlan {
        optimize(&self.columns.bounds(), available, self.style.margin())
    }

    /// Write the header, a divider and every row to `out`.
    ///
    /// Returns how the table fit. [`Fit::Tight`] and [`Fit::OverBudget`] are
    /// not errors: the table is still written, only wider than requested.
    pub fn render<W: Write>(&self, mut out: W) -> Result<Fit> {
        let plan = self.plan();
        let style = &self.style;
        let renderer = RowRenderer::new(&plan.widths);

        let mut lines = renderer.render_row(&mut out, &self.header, &style.border, &style.padding)?;

        let divider = renderer.divider_cells(style.divider);
        let (divider_padding, divider_border) = style.divider_frame();
        lines += renderer.render_row(&mut out, &divider, &divider_border, &divider_padding)?;

        for row in &self.rows {
            lines += renderer.render_row(&mut out, row, &style.border, &style.padding)?;
        }
        out.flush()?;

        debug!(rows = self.rows.len(), lines, fit = ?plan.fit, "rendered table");
        Ok(plan.fit)
    }

    /// Render the whole table into a string.
    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
