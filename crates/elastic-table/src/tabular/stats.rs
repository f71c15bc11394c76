//! Per-column content width statistics.

use serde::{Deserialize, Serialize};

use super::util::cell_width;
use crate::error::{Result, TableError};

/// The narrowest and widest content seen in a column, in display columns.
///
/// `max` is the column's *natural* width: the width at which nothing wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBounds {
    pub min: usize,
    pub max: usize,
}

impl ColumnBounds {
    pub fn new(min: usize, max: usize) -> Self {
        ColumnBounds { min, max }
    }
}

/// Running width statistics for one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnStats {
    min: usize,
    max: usize,
}

impl ColumnStats {
    /// Seeds the statistics from the column's header text.
    pub fn seeded(header: &str) -> Self {
        let width = cell_width(header);
        ColumnStats {
            min: width,
            max: width,
        }
    }

    /// Records one more cell. Statistics only ever widen.
    pub fn observe(&mut self, text: &str) {
        let width = cell_width(text);
        self.min = self.min.min(width);
        self.max = self.max.max(width);
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn bounds(&self) -> ColumnBounds {
        ColumnBounds::new(self.min, self.max)
    }
}

/// Width statistics for every column of a table, index-aligned to the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnTracker {
    columns: Vec<ColumnStats>,
    rows_seen: usize,
}

impl ColumnTracker {
    /// Creates one column per header entry.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Self {
        ColumnTracker {
            columns: header.iter().map(|h| ColumnStats::seeded(h.as_ref())).collect(),
            rows_seen: 0,
        }
    }

    /// Folds a row into the statistics.
    ///
    /// A row whose length differs from the column count is rejected with
    /// [`TableError::RowShapeMismatch`] and leaves the statistics untouched.
    pub fn observe_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowShapeMismatch {
                row: self.rows_seen,
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        for (stats, cell) in self.columns.iter_mut().zip(row) {
            stats.observe(cell.as_ref());
        }
        self.rows_seen += 1;
        Ok(())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnStats> {
        self.columns.get(index)
    }

    /// The `(min, max)` pair of every column, in column order.
    pub fn bounds(&self) -> Vec<ColumnBounds> {
        self.columns.iter().map(ColumnStats::bounds).collect()
    }
}
