//! The four-charge configuration behind the potential surface.
//!
//! Charges A and B form the primary pair: they always share one magnitude,
//! driven by the slider. Charges C and D never change after construction.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{CHARGE_A, CHARGE_B, CHARGE_C, CHARGE_D};
use crate::fields::{
    checked_potential_from_point_charges, contribution, potential_from_point_charges, FieldError,
    PointCharge,
};
use crate::grid::{Grid, PotentialField};
use crate::math::{R3, Scalar};

/// Explicit field context: the primary pair plus the fixed pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    primary: [PointCharge; 2],
    fixed: [PointCharge; 2],
}

impl Default for FieldModel {
    fn default() -> Self {
        Self::new(
            [PointCharge::from_array(CHARGE_A), PointCharge::from_array(CHARGE_B)],
            [PointCharge::from_array(CHARGE_C), PointCharge::from_array(CHARGE_D)],
        )
    }
}

impl FieldModel {
    /// Creates a model; the primaries take the magnitude of `primary[0]`.
    #[must_use]
    pub fn new(primary: [PointCharge; 2], fixed: [PointCharge; 2]) -> Self {
        let mut model = Self { primary, fixed };
        model.set_primary_magnitude(primary[0].charge);
        model
    }

    /// Sets both primary charges to `value`. No range check is applied.
    pub fn set_primary_magnitude(&mut self, value: Scalar) {
        for charge in &mut self.primary {
            charge.charge = value;
        }
    }

    /// Current shared magnitude of the primary pair.
    #[must_use]
    pub const fn primary_magnitude(&self) -> Scalar {
        self.primary[0].charge
    }

    /// Primary charges A and B.
    #[must_use]
    pub const fn primary(&self) -> &[PointCharge; 2] {
        &self.primary
    }

    /// Fixed charges C and D.
    #[must_use]
    pub const fn fixed(&self) -> &[PointCharge; 2] {
        &self.fixed
    }

    /// All four charges in A, B, C, D order.
    #[must_use]
    pub const fn charges(&self) -> [PointCharge; 4] {
        [self.primary[0], self.primary[1], self.fixed[0], self.fixed[1]]
    }

    /// Per-charge terms at `(x, y, 0)` in A, B, C, D order.
    #[must_use]
    pub fn contributions_at(&self, x: Scalar, y: Scalar) -> [Scalar; 4] {
        let p = R3::new(x, y, 0.0);
        self.charges().map(|c| contribution(p, &c))
    }

    /// Potential at `(x, y, 0)`; coincident points yield non-finite values.
    #[must_use]
    pub fn potential_at(&self, x: Scalar, y: Scalar) -> Scalar {
        potential_from_point_charges(R3::new(x, y, 0.0), &self.charges())
    }

    /// Potential at `(x, y, 0)`, rejecting coincident points and non-finite sums.
    pub fn checked_potential_at(&self, x: Scalar, y: Scalar) -> Result<Scalar, FieldError> {
        checked_potential_from_point_charges(R3::new(x, y, 0.0), &self.charges())
    }

    /// Evaluates [`Self::potential_at`] on every grid cell.
    #[must_use]
    pub fn evaluate(&self, grid: &Grid) -> PotentialField {
        let charges = self.charges();
        let field = grid.evaluate(|x, y| potential_from_point_charges(R3::new(x, y, 0.0), &charges));
        let degenerate = field.non_finite_count();
        if degenerate > 0 {
            warn!("{degenerate} grid cells hold a non-finite potential");
        }
        debug!(
            "evaluated {:?} potential field for primary magnitude {}, finite range {:?}",
            field.shape(),
            self.primary_magnitude(),
            field.finite_bounds()
        );
        field
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn manual_sum(model: &FieldModel, x: Scalar, y: Scalar) -> Scalar {
        model
            .charges()
            .iter()
            .map(|c| {
                let d = ((x - c.position.x).powi(2) + (y - c.position.y).powi(2) + c.position.z.powi(2)).sqrt();
                10.0 * c.charge / d
            })
            .sum()
    }

    #[test]
    fn reference_charges() {
        let model = FieldModel::default();
        assert_eq!(model.primary()[0], PointCharge::new(2.0, 0.0, 2.0, 1.0));
        assert_eq!(model.primary()[1], PointCharge::new(-2.0, 0.0, 2.0, 1.0));
        assert_eq!(model.fixed()[0], PointCharge::new(0.0, 0.75, 1.5, -0.5));
        assert_eq!(model.fixed()[1], PointCharge::new(0.0, 6.0, 1.0, -0.1));
    }

    #[test]
    fn potential_is_superposition_of_four_terms() {
        let mut model = FieldModel::default();
        model.set_primary_magnitude(1.3);
        for (x, y) in [(0.0, 0.0), (-3.5, 7.2), (1.25, -2.5), (4.0, 8.0)] {
            let direct = manual_sum(&model, x, y);
            assert_relative_eq!(model.potential_at(x, y), direct, max_relative = 1.0e-12);
            let terms: Scalar = model.contributions_at(x, y).iter().sum();
            assert_relative_eq!(terms, direct, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn primary_magnitude_moves_both_charges() {
        let mut model = FieldModel::default();
        model.set_primary_magnitude(0.7);
        assert_eq!(model.primary()[0].charge, 0.7);
        assert_eq!(model.primary()[1].charge, 0.7);
        assert_eq!(model.primary_magnitude(), 0.7);
        assert_eq!(model.fixed()[0].charge, -0.5);
        assert_eq!(model.fixed()[1].charge, -0.1);
    }

    #[test]
    fn primary_magnitude_is_unvalidated() {
        let mut model = FieldModel::default();
        model.set_primary_magnitude(-42.0);
        assert_eq!(model.primary_magnitude(), -42.0);
    }

    #[test]
    fn potential_under_charge_a_is_finite() {
        let model = FieldModel::default();
        let a = model.primary()[0];
        let phi = model.potential_at(a.position.x, a.position.y);
        assert!(phi.is_finite());
        let [_, b, c, d] = model.contributions_at(a.position.x, a.position.y);
        let own = 10.0 * a.charge / a.position.z.abs();
        assert_relative_eq!(phi, own + b + c + d, max_relative = 1.0e-12);
        assert_relative_eq!(model.checked_potential_at(a.position.x, a.position.y).unwrap(), phi);
    }

    #[test]
    fn in_plane_charge_is_singular() {
        let model = FieldModel::new(
            [PointCharge::new(1.0, 1.0, 0.0, 1.0), PointCharge::new(-1.0, 1.0, 2.0, 1.0)],
            [PointCharge::from_array(CHARGE_C), PointCharge::from_array(CHARGE_D)],
        );
        assert!(model.potential_at(1.0, 1.0).is_infinite());
        assert!(matches!(
            model.checked_potential_at(1.0, 1.0),
            Err(FieldError::Singular { index: 0, .. })
        ));
    }

    #[test]
    fn grid_evaluation_matches_pointwise() {
        let model = FieldModel::default();
        let grid = Grid::default();
        let field = model.evaluate(&grid);
        assert_eq!(field.shape(), (55, 40));
        assert_eq!(field.non_finite_count(), 0);
        let (lo, hi) = field.finite_bounds().unwrap();
        assert!(lo < hi);
        for (i, j) in [(0, 0), (27, 20), (54, 39)] {
            let (x, y) = (grid.x()[(i, j)], grid.y()[(i, j)]);
            assert_relative_eq!(field.values()[(i, j)], model.potential_at(x, y));
        }
    }
}
