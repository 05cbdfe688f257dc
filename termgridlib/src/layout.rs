//! Dimension measurement and width-budgeted column slicing.

use crate::cell::Cell;

/// Per-column widths and per-row heights of an analyzed grid, margin
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimensions {
    /// One entry per column: widest cell in the column plus margin
    pub column_widths: Vec<usize>,
    /// One entry per row: tallest cell in the row plus margin
    pub row_heights: Vec<usize>,
}

impl Dimensions {
    /// Measure the grid in a single pass.
    ///
    /// Each entry is a running maximum, so the result does not depend on
    /// iteration order.
    pub fn measure(grid: &[Vec<Cell>], margin: usize) -> Self {
        let columns = grid.first().map(|row| row.len()).unwrap_or(0);
        let mut column_widths = vec![0; columns];
        let mut row_heights = vec![0; grid.len()];
        for (row_index, row) in grid.iter().enumerate() {
            for (column_index, cell) in row.iter().enumerate() {
                column_widths[column_index] =
                    column_widths[column_index].max(cell.width + margin);
                row_heights[row_index] = row_heights[row_index].max(cell.height + margin);
            }
        }
        Dimensions {
            column_widths,
            row_heights,
        }
    }
}

/// Resolved width budget for slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthBudget {
    /// No limit; the table renders as a single page
    Unbounded,
    /// Total column width per page
    Columns(usize),
}

/// A contiguous column range rendered as one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    /// First column of the range, inclusive
    pub start: usize,
    /// End of the range, exclusive
    pub finish: usize,
    /// Width of each column in the range
    pub column_widths: Vec<usize>,
}

/// Partition the columns so no slice's total width exceeds the budget.
///
/// Columns are scanned left to right; a slice closes when the next column
/// would push its total strictly over the budget and it already holds at
/// least one column. A single column wider than the whole budget therefore
/// still gets its own slice rather than being dropped. The slices partition
/// `0..column_widths.len()` in order, none empty.
///
/// Callers guarantee at least one column; zero columns is rejected upstream
/// as a configuration error.
pub fn slice_columns(column_widths: &[usize], budget: WidthBudget) -> Vec<Slice> {
    let budget = match budget {
        WidthBudget::Unbounded => {
            return vec![Slice {
                start: 0,
                finish: column_widths.len(),
                column_widths: column_widths.to_vec(),
            }];
        }
        WidthBudget::Columns(budget) => budget,
    };

    let mut slices = Vec::new();
    let mut start = 0;
    let mut accumulator = 0;
    for (column, &width) in column_widths.iter().enumerate() {
        if accumulator + width > budget && column > start {
            slices.push(Slice {
                start,
                finish: column,
                column_widths: column_widths[start..column].to_vec(),
            });
            start = column;
            accumulator = 0;
        }
        accumulator += width;
    }
    slices.push(Slice {
        start,
        finish: column_widths.len(),
        column_widths: column_widths[start..].to_vec(),
    });
    slices
}
