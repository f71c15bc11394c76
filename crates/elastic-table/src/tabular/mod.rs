//! Width-optimized, wrapping tables for the terminal.
//!
//! Every column keeps the narrowest and widest content width it has seen.
//! At render time those bounds and the available width feed [`optimize`],
//! which returns a fresh [`WidthPlan`]; the [`RowRenderer`] then wraps every
//! cell to its planned width.
//!
//! ## Layout
//!
//! Each column occupies `padding + content + padding` followed by a border
//! glyph (or the end of the line for the last column). With the default
//! [`TableStyle`] that overhead, the *margin*, is three columns:
//!
//! ```text
//!  Name | Bio
//! ------+---------------------
//!  Al   | a very long
//!       | biography text
//! ```
//!
//! ## Fit Outcomes
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | [`Fit::Natural`] | Every column at its widest content, no wrapping |
//! | [`Fit::Narrowed`] | Wide columns wrapped until the table fits |
//! | [`Fit::OverBudget`] | Narrowing got stuck; still wider than the budget |
//! | [`Fit::Tight`] | Even minimum widths overflow; rendered at minimums |
//!
//! ## Utility Functions
//!
//! ```rust
//! use elastic_table::tabular::{display_width, pad_right, wrap};
//!
//! let lines = wrap("hello world foo bar", 11);
//! assert_eq!(lines, vec!["hello world", "foo bar"]);
//!
//! let padded = pad_right("日本", 6);
//! assert_eq!(display_width(&padded), 6);
//! ```

mod optimize;
mod render;
mod stats;
mod style;
mod table;
mod util;

pub use optimize::{optimize, Fit, WidthPlan};
pub use render::RowRenderer;
pub use stats::{ColumnBounds, ColumnStats, ColumnTracker};
pub use style::TableStyle;
pub use table::Table;

pub use util::{cell_width, display_width, pad_right, wrap};
