//! Configuration types for the editing surface.
//!
//! All types implement [`serde::Deserialize`] with per-field defaults, so a
//! partial document (or none at all) yields a usable configuration.
//!
//! # Overview
//!
//! - [`EditorConfig`] - Top-level editor configuration.
//! - [`SurfaceConfig`] - Grid cell size and optional surface extent.
//!
//! # Example
//!
//! ```
//! # use gridflow::config::EditorConfig;
//! let config = EditorConfig::default();
//! assert_eq!(config.surface().cell_size(), 100.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use gridflow_core::geometry::SurfaceBounds;

use crate::GridflowError;

/// Default edge length of a grid cell, in pixels.
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

/// Top-level editor configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorConfig {
    /// Surface configuration section.
    #[serde(default)]
    surface: SurfaceConfig,
}

impl EditorConfig {
    /// Creates a new [`EditorConfig`] with the given surface settings.
    pub fn new(surface: SurfaceConfig) -> Self {
        Self { surface }
    }

    /// Returns the surface configuration.
    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }

    /// Checks that every section holds usable values.
    ///
    /// # Errors
    ///
    /// Returns [`GridflowError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), GridflowError> {
        self.surface.validate()
    }
}

/// Grid geometry of the editing surface.
///
/// `max_cols` and `max_rows` bound the surface when set; a target cell with
/// `col >= max_cols` or `row >= max_rows` is outside it.
#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceConfig {
    /// Edge length of a square grid cell, in pixels.
    #[serde(default = "default_cell_size")]
    cell_size: f32,

    /// Number of columns on the surface, unbounded if absent.
    #[serde(default)]
    max_cols: Option<u32>,

    /// Number of rows on the surface, unbounded if absent.
    #[serde(default)]
    max_rows: Option<u32>,
}

fn default_cell_size() -> f32 {
    DEFAULT_CELL_SIZE
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            max_cols: None,
            max_rows: None,
        }
    }
}

impl SurfaceConfig {
    /// Creates a new [`SurfaceConfig`].
    ///
    /// # Arguments
    ///
    /// * `cell_size` - Edge length of a grid cell, in pixels.
    /// * `max_cols` - Optional number of columns.
    /// * `max_rows` - Optional number of rows.
    pub fn new(cell_size: f32, max_cols: Option<u32>, max_rows: Option<u32>) -> Self {
        Self {
            cell_size,
            max_cols,
            max_rows,
        }
    }

    /// Returns the grid cell size in pixels.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Returns the surface extent as [`SurfaceBounds`].
    pub fn bounds(&self) -> SurfaceBounds {
        SurfaceBounds::new(self.max_cols, self.max_rows)
    }

    /// Checks the cell size and extents.
    ///
    /// # Errors
    ///
    /// Returns [`GridflowError::Config`] if the cell size is not a positive
    /// finite number, or if an extent is zero.
    pub fn validate(&self) -> Result<(), GridflowError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridflowError::Config(format!(
                "cell_size must be a positive number, got {}",
                self.cell_size
            )));
        }
        if self.max_cols == Some(0) {
            return Err(GridflowError::Config(
                "max_cols must be at least 1".to_string(),
            ));
        }
        if self.max_rows == Some(0) {
            return Err(GridflowError::Config(
                "max_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gridflow_core::geometry::GridCell;

    use super::*;

    #[test]
    fn test_default_is_valid_and_unbounded() {
        let config = EditorConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.surface().bounds(), SurfaceBounds::unbounded());
    }

    #[test]
    fn test_bounds_from_extents() {
        let surface = SurfaceConfig::new(50.0, Some(8), Some(6));
        let bounds = surface.bounds();

        assert!(bounds.contains(GridCell::new(7, 5)));
        assert!(!bounds.contains(GridCell::new(8, 0)));
        assert!(!bounds.contains(GridCell::new(0, 6)));
    }

    #[test]
    fn test_validate_rejects_bad_cell_size() {
        for cell_size in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let config = EditorConfig::new(SurfaceConfig::new(cell_size, None, None));
            assert!(matches!(config.validate(), Err(GridflowError::Config(_))));
        }
    }

    #[test]
    fn test_validate_rejects_zero_extent() {
        let cols = SurfaceConfig::new(10.0, Some(0), None);
        let rows = SurfaceConfig::new(10.0, None, Some(0));

        assert!(cols.validate().is_err());
        assert!(rows.validate().is_err());
    }
}
