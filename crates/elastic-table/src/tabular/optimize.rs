//! Column width optimization.
//!
//! [`optimize`] decides how wide every column is rendered. Its inputs are the
//! per-column [`ColumnBounds`] and the available width; its output is a fresh
//! [`WidthPlan`]. Nothing is cached or written back, so planning the same
//! bounds twice always yields the same plan.
//!
//! # Algorithm
//!
//! With `n` columns the content budget is `T = available - n * margin`.
//!
//! 1. If the minimum widths already reach `T`, every column is rendered at its
//!    minimum and the table overflows ([`Fit::Tight`]).
//! 2. If the natural (maximum) widths fit, nothing wraps ([`Fit::Natural`]).
//! 3. Otherwise columns are visited widest first. A column gives up width by
//!    taking one more line, `width = ceil(max / height)`, provided it stays at
//!    least as wide as the next column in that order. After every change the
//!    scan restarts from the widest column.
//! 4. Whatever slack remains (positive or negative) is shared out in
//!    proportion to current widths, and each width is clamped back up to its
//!    minimum.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::stats::ColumnBounds;

/// How a [`WidthPlan`] relates to the width budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    /// Every column at its natural width; nothing wraps.
    Natural,
    /// Some columns wrap, and the table fits the budget.
    Narrowed,
    /// No further narrowing was possible; the table is wider than the budget.
    OverBudget,
    /// Minimum widths alone exceed the budget; columns sit at their minimums.
    Tight,
}

impl Fit {
    /// Whether the planned table fits inside the available width.
    pub fn fits(self) -> bool {
        matches!(self, Fit::Natural | Fit::Narrowed)
    }
}

/// Final display width for every column, in column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthPlan {
    /// Content width per column, excluding padding and border. Always >= 1.
    pub widths: Vec<usize>,
    /// Lines the widest cell of each column needs at its planned width.
    /// Word wrapping can need more. Always >= 1.
    pub heights: Vec<usize>,
    /// Content budget `T`: available width minus per-column margins.
    /// Negative when the margins alone exceed the available width.
    pub budget: isize,
    /// Which case of the optimization produced this plan.
    pub fit: Fit,
}

impl WidthPlan {
    fn new(bounds: &[ColumnBounds], widths: Vec<usize>, budget: isize, fit: Fit) -> Self {
        let heights = bounds
            .iter()
            .zip(&widths)
            .map(|(b, &w)| b.max.div_ceil(w).max(1))
            .collect();
        WidthPlan {
            widths,
            heights,
            budget,
            fit,
        }
    }

    /// Sum of all column widths.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Width of a column, if it exists.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Plans column widths for `bounds` within `available` display columns.
///
/// `margin` is the fixed per-column overhead (padding on both sides plus a
/// border glyph).
///
/// # Example
///
/// ```rust
/// use elastic_table::{optimize, ColumnBounds, Fit};
///
/// let bounds = [ColumnBounds::new(2, 4), ColumnBounds::new(3, 54)];
/// let plan = optimize(&bounds, 30, 3);
///
/// assert_eq!(plan.fit, Fit::Narrowed);
/// assert_eq!(plan.widths, vec![4, 19]);
/// assert_eq!(plan.heights, vec![1, 3]);
/// ```
pub fn optimize(bounds: &[ColumnBounds], available: usize, margin: usize) -> WidthPlan {
    let count = bounds.len();
    let budget = available as isize - (count * margin) as isize;

    if bounds.is_empty() {
        return WidthPlan::new(bounds, Vec::new(), budget, Fit::Natural);
    }

    let min_total: usize = bounds.iter().map(|b| b.min).sum();
    let max_total: usize = bounds.iter().map(|b| b.max).sum();

    let plan = if min_total as isize >= budget {
        let widths = bounds.iter().map(|b| b.min.max(1)).collect();
        WidthPlan::new(bounds, widths, budget, Fit::Tight)
    } else if max_total as isize <= budget {
        let widths = bounds.iter().map(|b| b.max.max(1)).collect();
        WidthPlan::new(bounds, widths, budget, Fit::Natural)
    } else {
        narrow(bounds, budget, max_total)
    };

    debug!(
        columns = count,
        available,
        budget,
        min_total,
        max_total,
        fit = ?plan.fit,
        "planned column widths"
    );
    plan
}

/// Wraps the widest columns until the table fits or nothing can move, then
/// shares out the remaining slack.
fn narrow(bounds: &[ColumnBounds], budget: isize, max_total: usize) -> WidthPlan {
    let mut widths: Vec<usize> = bounds.iter().map(|b| b.max).collect();
    let mut heights = vec![1; bounds.len()];
    let mut running = max_total;

    // Stable: equal natural widths keep their column order.
    let mut order: Vec<usize> = (0..bounds.len()).collect();
    order.sort_by_key(|&i| Reverse(bounds[i].max));

    // Every applied step shrinks the total by at least one column.
    let cap = max_total;
    let mut steps = 0;
    while running as isize > budget && steps < cap {
        let Some((column, width, height)) = next_step(bounds, &order, &widths, &heights) else {
            break;
        };
        trace!(column, width, height, "narrowing column");
        running -= widths[column] - width;
        widths[column] = width;
        heights[column] = height;
        steps += 1;
    }

    distribute_slack(bounds, &mut widths, budget, running);

    let total: usize = widths.iter().sum();
    let fit = if total as isize <= budget {
        Fit::Narrowed
    } else {
        Fit::OverBudget
    };
    WidthPlan::new(bounds, widths, budget, fit)
}

/// Finds the first column, widest first, that can take another line.
///
/// Returns `(column, new_width, new_height)`.
fn next_step(
    bounds: &[ColumnBounds],
    order: &[usize],
    widths: &[usize],
    heights: &[usize],
) -> Option<(usize, usize, usize)> {
    order.windows(2).find_map(|pair| {
        let (current, next) = (pair[0], pair[1]);
        let (width, height) = narrower(bounds[current].max, widths[current], heights[current])?;
        (width >= widths[next]).then_some((current, width, height))
    })
}

/// The smallest height above `height` whose wrapped width is below `width`.
fn narrower(natural: usize, width: usize, height: usize) -> Option<(usize, usize)> {
    (height + 1..=natural)
        .map(|h| (natural.div_ceil(h), h))
        .find(|&(w, _)| w < width)
}

/// Adds `floor(slack * width / running)` to every width, then clamps each
/// width to at least its column minimum and at least one.
fn distribute_slack(bounds: &[ColumnBounds], widths: &mut [usize], budget: isize, running: usize) {
    if running == 0 {
        return;
    }
    let slack = budget - running as isize;
    let running = running as isize;

    for (width, b) in widths.iter_mut().zip(bounds) {
        let share = (slack * *width as isize).div_euclid(running);
        let adjusted = (*width as isize + share).max(0) as usize;
        *width = adjusted.max(b.min).max(1);
    }
}
