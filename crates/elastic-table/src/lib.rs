//! # Elastic Table - Terminal Tables That Fit
//!
//! `elastic-table` renders rows of text into a bordered, left-justified table
//! whose columns shrink to the available terminal width by wrapping their
//! content onto extra lines. The widest columns give up space first.
//!
//! ## Core Concepts
//!
//! - [`Table`]: header, rows and per-column width statistics
//! - [`optimize`]: pure function turning column bounds and a width budget into
//!   a [`WidthPlan`]
//! - [`Fit`]: how the plan relates to the budget (natural, narrowed, over budget, tight)
//! - [`TableStyle`]: padding, border and divider glyphs
//!
//! ## Quick Start
//!
//! ```rust
//! use elastic_table::Table;
//!
//! let mut table = Table::new(["A", "B"]).width(80);
//! table.add_row(["hello", "world"]).unwrap();
//!
//! let out = table.render_to_string();
//! assert_eq!(out, " A     | B     \n-------+-------\n hello | world \n");
//! ```
//!
//! ## Narrow Terminals
//!
//! When the natural widths do not fit, long columns wrap:
//!
//! ```rust
//! use elastic_table::{Fit, Table};
//!
//! let mut table = Table::new(["Name", "Bio"]).width(30);
//! table
//!     .add_row(["Al", "a very long biography text exceeding the narrow budget"])
//!     .unwrap();
//!
//! let plan = table.plan();
//! assert_eq!(plan.fit, Fit::Narrowed);
//! assert_eq!(plan.widths[0], 4);
//! assert!(table.render_to_string().lines().count() > 3);
//! ```
//!
//! ## Width Source
//!
//! Without an explicit [`Table::width`], the table asks [`terminal_width`],
//! which falls back to the `COLUMNS` environment variable and then to
//! [`DEFAULT_TERMINAL_WIDTH`] when stdout is not a terminal.

mod error;
pub mod tabular;
mod terminal;

pub use error::{Result, TableError};

pub use tabular::{
    cell_width, display_width, optimize, pad_right, wrap, ColumnBounds, ColumnStats,
    ColumnTracker, Fit, RowRenderer, Table, TableStyle, WidthPlan,
};

pub use terminal::{terminal_width, DEFAULT_TERMINAL_WIDTH};
