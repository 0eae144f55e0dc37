//! Sampling grid over the `z = 0` plane and the potential fields evaluated on it.

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_X_RANGE, GRID_X_SAMPLES, GRID_Y_RANGE, GRID_Y_SAMPLES};
use crate::math::{linspace, meshgrid, Grid2, Scalar};

/// Extent and resolution of a sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Inclusive x bounds.
    pub x_range: (Scalar, Scalar),
    /// Number of x samples (columns).
    pub x_samples: usize,
    /// Inclusive y bounds.
    pub y_range: (Scalar, Scalar),
    /// Number of y samples (rows).
    pub y_samples: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            x_range: GRID_X_RANGE,
            x_samples: GRID_X_SAMPLES,
            y_range: GRID_Y_RANGE,
            y_samples: GRID_Y_SAMPLES,
        }
    }
}

/// Errors raised while building grids or pairing them with fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// An axis needs at least two samples to span its range.
    #[error("axis `{axis}` needs at least 2 samples, got {samples}")]
    TooFewSamples {
        /// Axis name.
        axis: &'static str,
        /// Requested sample count.
        samples: usize,
    },
    /// An axis range is empty, reversed, or not finite.
    #[error("axis `{axis}` has an invalid range")]
    InvalidRange {
        /// Axis name.
        axis: &'static str,
    },
    /// A field does not have the grid's shape.
    #[error("field shape {field:?} does not match grid shape {grid:?}")]
    ShapeMismatch {
        /// `(rows, columns)` of the grid.
        grid: (usize, usize),
        /// `(rows, columns)` of the field.
        field: (usize, usize),
    },
}

/// Meshgrid-style coordinate arrays; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x_axis: Vec<Scalar>,
    y_axis: Vec<Scalar>,
    x: Grid2,
    y: Grid2,
}

impl Grid {
    /// Builds a grid from `spec`, rejecting degenerate axes.
    pub fn new(spec: &GridSpec) -> Result<Self, GridError> {
        check_axis("x", spec.x_range, spec.x_samples)?;
        check_axis("y", spec.y_range, spec.y_samples)?;
        Ok(Self::from_axes(
            linspace(spec.x_range.0, spec.x_range.1, spec.x_samples),
            linspace(spec.y_range.0, spec.y_range.1, spec.y_samples),
        ))
    }

    fn from_axes(x_axis: Vec<Scalar>, y_axis: Vec<Scalar>) -> Self {
        let (x, y) = meshgrid(&x_axis, &y_axis);
        Self { x_axis, y_axis, x, y }
    }

    /// x samples (one per column).
    #[must_use]
    pub fn x_axis(&self) -> &[Scalar] {
        &self.x_axis
    }

    /// y samples (one per row).
    #[must_use]
    pub fn y_axis(&self) -> &[Scalar] {
        &self.y_axis
    }

    /// x coordinate of every cell.
    #[must_use]
    pub const fn x(&self) -> &Grid2 {
        &self.x
    }

    /// y coordinate of every cell.
    #[must_use]
    pub const fn y(&self) -> &Grid2 {
        &self.y
    }

    /// Number of rows (y samples).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.x.nrows()
    }

    /// Number of columns (x samples).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.x.ncols()
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Applies `f(x, y)` independently to every cell.
    #[must_use]
    pub fn evaluate<F>(&self, f: F) -> PotentialField
    where
        F: Fn(Scalar, Scalar) -> Scalar,
    {
        PotentialField { values: self.x.zip_map(&self.y, f) }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_axes(
            linspace(GRID_X_RANGE.0, GRID_X_RANGE.1, GRID_X_SAMPLES),
            linspace(GRID_Y_RANGE.0, GRID_Y_RANGE.1, GRID_Y_SAMPLES),
        )
    }
}

fn check_axis(axis: &'static str, range: (Scalar, Scalar), samples: usize) -> Result<(), GridError> {
    if samples < 2 {
        return Err(GridError::TooFewSamples { axis, samples });
    }
    if !(range.0.is_finite() && range.1.is_finite() && range.0 < range.1) {
        return Err(GridError::InvalidRange { axis });
    }
    Ok(())
}

/// Potential values with the shape of the grid they were evaluated on.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialField {
    values: Grid2,
}

impl PotentialField {
    /// Wraps precomputed values.
    #[must_use]
    pub const fn from_values(values: Grid2) -> Self {
        Self { values }
    }

    /// Raw values.
    #[must_use]
    pub const fn values(&self) -> &Grid2 {
        &self.values
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    /// Number of NaN or infinite cells.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }

    /// Smallest and largest finite value, if any.
    #[must_use]
    pub fn finite_bounds(&self) -> Option<(Scalar, Scalar)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reference_grid_is_55_by_40() {
        let grid = Grid::default();
        assert_eq!(grid.shape(), (55, 40));
        assert_eq!(grid.x_axis().len(), 40);
        assert_eq!(grid.y_axis().len(), 55);
        assert_relative_eq!(grid.x()[(0, 0)], -4.0);
        assert_relative_eq!(grid.x()[(54, 39)], 4.0, epsilon = 1.0e-12);
        assert_relative_eq!(grid.y()[(54, 0)], 8.0, epsilon = 1.0e-12);
    }

    #[test]
    fn spec_default_matches_reference_grid() {
        let grid = Grid::new(&GridSpec::default()).unwrap();
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn rejects_degenerate_axes() {
        let spec = GridSpec { x_samples: 1, ..GridSpec::default() };
        assert_eq!(
            Grid::new(&spec),
            Err(GridError::TooFewSamples { axis: "x", samples: 1 })
        );
        let spec = GridSpec { y_range: (2.0, 2.0), ..GridSpec::default() };
        assert_eq!(Grid::new(&spec), Err(GridError::InvalidRange { axis: "y" }));
    }

    #[test]
    fn evaluate_is_cellwise() {
        let grid = Grid::default();
        let field = grid.evaluate(|x, y| x * 100.0 + y);
        assert_eq!(field.shape(), grid.shape());
        for i in [0, 17, 54] {
            for j in [0, 9, 39] {
                let expected = grid.x()[(i, j)] * 100.0 + grid.y()[(i, j)];
                assert_relative_eq!(field.values()[(i, j)], expected);
            }
        }
    }

    #[test]
    fn bounds_skip_non_finite_cells() {
        let field = PotentialField::from_values(Grid2::from_row_slice(
            2,
            2,
            &[1.0, f64::INFINITY, -3.0, f64::NAN],
        ));
        assert_eq!(field.non_finite_count(), 2);
        assert_eq!(field.finite_bounds(), Some((-3.0, 1.0)));
    }
}
