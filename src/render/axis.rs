//! Gradient positions aligned with visible ink.
//!
//! Positions are spread evenly over the columns (and rows) that actually
//! contain ink, so blank spacing columns don't squeeze the visible gradient.

use std::collections::HashMap;

use crate::types::{BoundingBox, Direction, PixelGrid};

/// Ordered indices of the columns and rows holding at least one lit pixel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilledAxes {
    pub cols: Vec<usize>,
    pub rows: Vec<usize>,
}

impl FilledAxes {
    pub fn of(grid: &PixelGrid) -> Self {
        Self {
            cols: (0..grid.width()).filter(|&x| grid.column_has_ink(x)).collect(),
            rows: (0..grid.height()).filter(|&y| grid.row_has_ink(y)).collect(),
        }
    }
}

/// Maps grid coordinates to gradient positions.
#[derive(Debug, Clone)]
pub struct AxisMap {
    bbox: BoundingBox,
    axes: FilledAxes,
    col_t: HashMap<usize, f64>,
    row_t: HashMap<usize, f64>,
}

impl AxisMap {
    /// Build the map for a grid, or `None` if the grid has no ink.
    pub fn new(grid: &PixelGrid) -> Option<Self> {
        let bbox = grid.bounding_box()?;
        let axes = FilledAxes::of(grid);
        let col_t = spread(&axes.cols);
        let row_t = spread(&axes.rows);
        Some(Self {
            bbox,
            axes,
            col_t,
            row_t,
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn filled_axes(&self) -> &FilledAxes {
        &self.axes
    }

    /// Horizontal position of column `x`.
    pub fn t_x(&self, x: usize) -> f64 {
        self.col_t
            .get(&x)
            .copied()
            .unwrap_or_else(|| linear(x, self.bbox.min_x, self.bbox.max_x))
    }

    /// Vertical position of row `y`.
    pub fn t_y(&self, y: usize) -> f64 {
        self.row_t
            .get(&y)
            .copied()
            .unwrap_or_else(|| linear(y, self.bbox.min_y, self.bbox.max_y))
    }

    /// Gradient position of cell `(x, y)` along `direction`, clamped to `[0, 1]`.
    pub fn t_at(&self, x: usize, y: usize, direction: Direction) -> f64 {
        let t = match direction {
            Direction::Horizontal => self.t_x(x),
            Direction::Vertical => self.t_y(y),
            Direction::Diagonal => 0.5 * (self.t_x(x) + self.t_y(y)),
        };
        t.clamp(0.0, 1.0)
    }
}

/// k-th of n entries maps to k / max(1, n - 1).
fn spread(indices: &[usize]) -> HashMap<usize, f64> {
    let total = indices.len().saturating_sub(1).max(1) as f64;
    indices
        .iter()
        .enumerate()
        .map(|(k, &index)| (index, k as f64 / total))
        .collect()
}

/// Position of `coord` within `[min, max]` for coordinates without ink.
fn linear(coord: usize, min: usize, max: usize) -> f64 {
    let span = max.saturating_sub(min).max(1) as f64;
    (coord as f64 - min as f64) / span
}
