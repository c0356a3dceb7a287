//! Geometric primitives for the editing surface.
//!
//! The surface is a uniform grid of square cells. Nodes are addressed only by
//! their [`GridCell`]; pixel [`Point`]s exist at the boundary with the rendering
//! layer (pointer positions, the connection preview endpoint).
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X / col
//!     │
//!     │
//!     ▼
//!    +Y / row
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`, which is also the corner of cell `(0, 0)`
//! - **Cell mapping**: `col = floor(x / cell_size)`, `row = floor(y / cell_size)`
//! - Negative positions lie outside the surface and map to no cell

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point in surface pixel space.
///
/// # Examples
///
/// ```
/// # use gridflow_core::geometry::Point;
/// let p = Point::new(12.5, 40.0);
/// assert_eq!(p.x(), 12.5);
/// assert_eq!(p.y(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns true if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An integer `(col, row)` address on the grid.
///
/// Columns and rows are unsigned, so a `GridCell` always lies on the
/// non-negative quadrant. Signed input from the transport layer goes through
/// [`GridCell::from_signed`], which rejects negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    col: u32,
    row: u32,
}

impl GridCell {
    /// Creates a cell at the given column and row
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Converts signed coordinates into a cell.
    ///
    /// Returns `None` when either coordinate is negative or does not fit the
    /// grid's coordinate range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridflow_core::geometry::GridCell;
    /// assert_eq!(GridCell::from_signed(3, 1), Some(GridCell::new(3, 1)));
    /// assert_eq!(GridCell::from_signed(-1, 0), None);
    /// ```
    pub fn from_signed(col: i64, row: i64) -> Option<Self> {
        let col = u32::try_from(col).ok()?;
        let row = u32::try_from(row).ok()?;
        Some(Self::new(col, row))
    }

    /// Maps a pixel position to the cell that contains it.
    ///
    /// Returns `None` if the point is not finite, lies left of or above the
    /// origin, or if `cell_size` is not a positive finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridflow_core::geometry::{GridCell, Point};
    /// let cell = GridCell::from_point(Point::new(250.0, 99.9), 100.0);
    /// assert_eq!(cell, Some(GridCell::new(2, 0)));
    ///
    /// assert_eq!(GridCell::from_point(Point::new(-0.5, 10.0), 100.0), None);
    /// ```
    pub fn from_point(point: Point, cell_size: f32) -> Option<Self> {
        if !point.is_finite() || !cell_size.is_finite() || cell_size <= 0.0 {
            return None;
        }

        let col = (point.x() / cell_size).floor();
        let row = (point.y() / cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= u32::MAX as f32 || row >= u32::MAX as f32 {
            return None;
        }

        Some(Self::new(col as u32, row as u32))
    }

    /// Returns the column of this cell
    pub fn col(self) -> u32 {
        self.col
    }

    /// Returns the row of this cell
    pub fn row(self) -> u32 {
        self.row
    }

    /// Returns the pixel position of this cell's top-left corner.
    pub fn origin(self, cell_size: f32) -> Point {
        Point::new(self.col as f32 * cell_size, self.row as f32 * cell_size)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Optional maximum extent of the editing surface.
///
/// A dimension set to `None` is unbounded. When set, valid columns are
/// `0..max_cols` and valid rows are `0..max_rows`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceBounds {
    max_cols: Option<u32>,
    max_rows: Option<u32>,
}

impl SurfaceBounds {
    /// Creates bounds with the given optional extents
    pub fn new(max_cols: Option<u32>, max_rows: Option<u32>) -> Self {
        Self { max_cols, max_rows }
    }

    /// Bounds that accept every cell
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns true if the cell lies inside the surface
    pub fn contains(self, cell: GridCell) -> bool {
        self.max_cols.is_none_or(|max| cell.col() < max)
            && self.max_rows.is_none_or(|max| cell.row() < max)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn cell_strategy() -> impl Strategy<Value = GridCell> {
        (0u32..500, 0u32..500).prop_map(|(col, row)| GridCell::new(col, row))
    }

    fn cell_size_strategy() -> impl Strategy<Value = f32> {
        (1u32..=128).prop_map(|size| size as f32)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Any point inside a cell maps back to that cell.
    fn check_point_inside_cell_maps_to_cell(
        cell: GridCell,
        cell_size: f32,
        fx: f32,
        fy: f32,
    ) -> Result<(), TestCaseError> {
        let origin = cell.origin(cell_size);
        let point = Point::new(origin.x() + fx * cell_size, origin.y() + fy * cell_size);

        prop_assert_eq!(GridCell::from_point(point, cell_size), Some(cell));
        Ok(())
    }

    /// Points left of or above the origin never map to a cell.
    fn check_negative_points_rejected(x: f32, y: f32, cell_size: f32) -> Result<(), TestCaseError> {
        prop_assert_eq!(GridCell::from_point(Point::new(x, y), cell_size), None);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn point_inside_cell_maps_to_cell(
            cell in cell_strategy(),
            cell_size in cell_size_strategy(),
            fx in 0.0f32..0.99,
            fy in 0.0f32..0.99,
        ) {
            check_point_inside_cell_maps_to_cell(cell, cell_size, fx, fy)?;
        }

        #[test]
        fn negative_points_rejected(
            x in -10_000.0f32..-0.01,
            y in -10_000.0f32..10_000.0,
            cell_size in cell_size_strategy(),
        ) {
            check_negative_points_rejected(x, y, cell_size)?;
            check_negative_points_rejected(y.abs(), x, cell_size)?;
        }
    }
}
