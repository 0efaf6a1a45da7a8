use crate::input::WellCoord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl PlateDimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, coord: WellCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Every well of the grid, rows outer and columns inner.
    pub fn wells(&self) -> impl Iterator<Item = WellCoord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| WellCoord::new(row, col)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of one well marker, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl MarkerBox {
    pub fn center(&self) -> Point {
        Point {
            x: (self.x0 + self.x1) / 2.0,
            y: (self.y0 + self.y1) / 2.0,
        }
    }

    pub fn radii(&self) -> (f64, f64) {
        ((self.x1 - self.x0) / 2.0, (self.y1 - self.y0) / 2.0)
    }
}

// The grid is shifted one column right (row labels) and two rows down
// (plate header, column labels).
const GRID_COL_OFFSET: f64 = 1.0;
const GRID_ROW_OFFSET: f64 = 2.0;
const MARKER_INSET: f64 = 1.0 / 8.0;

/// Pixel layout shared by every plate page of a run.
///
/// `row_pixels` spans the well columns horizontally and `column_pixels`
/// spans the well rows vertically; the canvas adds one extra bucket of
/// width and two extra buckets of height for the labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub dims: PlateDimensions,
    pub row_pixels: u32,
    pub column_pixels: u32,
    pub rbucket: f64,
    pub cbucket: f64,
    pub width: u32,
    pub height: u32,
}

impl CanvasGeometry {
    pub fn new(dims: PlateDimensions, row_pixels: u32, column_pixels: u32) -> Self {
        let rows = dims.rows as u64;
        let cols = dims.cols as u64;
        let width = (row_pixels as u64 * (cols + 1) / cols) as u32;
        let height = (column_pixels as u64 * (rows + 2) / rows) as u32;
        Self {
            dims,
            row_pixels,
            column_pixels,
            rbucket: row_pixels as f64 / dims.cols as f64,
            cbucket: column_pixels as f64 / dims.rows as f64,
            width,
            height,
        }
    }

    pub fn marker_box(&self, coord: WellCoord) -> MarkerBox {
        let x = coord.col as f64 + GRID_COL_OFFSET;
        let y = coord.row as f64 + GRID_ROW_OFFSET;
        MarkerBox {
            x0: self.rbucket * (x + MARKER_INSET),
            y0: self.cbucket * (y + MARKER_INSET),
            x1: self.rbucket * (x + 1.0 - MARKER_INSET),
            y1: self.cbucket * (y + 1.0 - MARKER_INSET),
        }
    }

    /// Top-left anchor of the plate id header.
    pub fn header_anchor(&self) -> Point {
        Point {
            x: 0.25 * self.row_pixels as f64,
            y: self.cbucket / 6.0,
        }
    }

    /// Top-left anchor of the removed-loci annotation.
    pub fn count_anchor(&self) -> Point {
        Point {
            x: 0.60 * self.row_pixels as f64,
            y: self.cbucket / 3.0,
        }
    }

    pub fn row_label_anchor(&self, row: usize) -> Point {
        Point {
            x: self.rbucket / 3.0,
            y: self.cbucket * (row as f64 + GRID_ROW_OFFSET + 1.0 / 3.0),
        }
    }

    pub fn column_label_anchor(&self, col: usize) -> Point {
        Point {
            x: self.rbucket * (col as f64 + GRID_COL_OFFSET + 1.0 / 3.0),
            y: self.cbucket * 4.0 / 3.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/geometry.rs"]
mod tests;
