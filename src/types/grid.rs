//! Boolean pixel grids.

use std::fmt;

/// A 2-D grid of on/off pixels (row-major, `true` = ink).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Inclusive bounds of the lit pixels in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl PixelGrid {
    /// Create an all-off grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from rows. Short rows are padded with off pixels so every
    /// row ends up as long as the longest one.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                grid.set(x, y, on);
            }
        }
        grid
    }

    /// Parse an ASCII picture where `#` marks ink and anything else is off.
    pub fn from_ascii(picture: &str) -> Self {
        let rows: Vec<Vec<bool>> = picture
            .lines()
            .map(|line| line.chars().map(|c| c == '#').collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// A `width`x`height` grid with only its one-pixel border lit.
    pub fn frame(width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if y == 0 || y + 1 == height || x == 0 || x + 1 == width {
                    grid.set(x, y, true);
                }
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get a pixel; anything outside the grid is off.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Get a pixel by signed coordinates; negative or out-of-range positions are off.
    pub fn get_signed(&self, x: isize, y: isize) -> bool {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y),
            _ => false,
        }
    }

    /// Set a pixel. Writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = on;
        }
    }

    /// OR another grid's lit pixels into this one with its top-left at `(x0, y0)`.
    pub fn blit(&mut self, other: &PixelGrid, x0: usize, y0: usize) {
        for y in 0..other.height {
            for x in 0..other.width {
                if other.get(x, y) {
                    self.set(x0 + x, y0 + y, true);
                }
            }
        }
    }

    /// Number of lit pixels.
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// True if column `x` has at least one lit pixel.
    pub fn column_has_ink(&self, x: usize) -> bool {
        (0..self.height).any(|y| self.get(x, y))
    }

    /// True if row `y` has at least one lit pixel.
    pub fn row_has_ink(&self, y: usize) -> bool {
        (0..self.width).any(|x| self.get(x, y))
    }

    /// Bounds of the lit pixels, or `None` if nothing is lit.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.get(x, y) {
                    continue;
                }
                bbox = Some(match bbox {
                    None => BoundingBox {
                        min_x: x,
                        min_y: y,
                        max_x: x,
                        max_y: y,
                    },
                    Some(b) => BoundingBox {
                        min_x: b.min_x.min(x),
                        min_y: b.min_y.min(y),
                        max_x: b.max_x.max(x),
                        max_y: b.max_y.max(y),
                    },
                });
            }
        }
        bbox
    }
}

impl fmt::Display for PixelGrid {
    /// Renders as an ASCII picture (`#` on, `.` off), one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                write!(f, "{}", if self.get(x, y) { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
