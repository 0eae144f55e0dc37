use serde::{Deserialize, Serialize};

use crate::constants::POTENTIAL_SCALE;
use crate::math::{R3, Scalar};

/// Point charge with a signed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointCharge {
    /// Position in plot units.
    pub position: R3,
    /// Signed charge magnitude.
    pub charge: Scalar,
}

impl PointCharge {
    /// Creates a charge at `(x, y, z)` with magnitude `q`.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar, q: Scalar) -> Self {
        Self { position: R3::new(x, y, z), charge: q }
    }

    /// Builds a charge from an `(x, y, z, q)` tuple.
    #[must_use]
    pub fn from_array([x, y, z, q]: [Scalar; 4]) -> Self {
        Self { position: R3::new(x, y, z), charge: q }
    }
}

/// Raised by the guarded evaluator when the potential degenerates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The evaluation point coincides with charge `index`.
    #[error("point ({x}, {y}, {z}) coincides with charge #{index}")]
    Singular {
        /// Index of the offending charge in the evaluated slice.
        index: usize,
        /// Evaluation point x.
        x: Scalar,
        /// Evaluation point y.
        y: Scalar,
        /// Evaluation point z.
        z: Scalar,
    },
    /// The summed potential is NaN or infinite.
    #[error("non-finite potential {value} at ({x}, {y}, {z})")]
    NonFinite {
        /// Offending value.
        value: Scalar,
        /// Evaluation point x.
        x: Scalar,
        /// Evaluation point y.
        y: Scalar,
        /// Evaluation point z.
        z: Scalar,
    },
}

/// Stylized potential `10 q / r` of a single charge at `point`.
///
/// A zero distance yields `±inf` (or NaN for a neutral charge); no guard is applied.
#[inline]
#[must_use]
pub fn contribution(point: R3, charge: &PointCharge) -> Scalar {
    let r = (point - charge.position).norm();
    POTENTIAL_SCALE * charge.charge / r
}

/// Potential φ at `point` as the plain superposition of every charge's contribution.
#[must_use]
pub fn potential_from_point_charges(point: R3, charges: &[PointCharge]) -> Scalar {
    charges.iter().map(|c| contribution(point, c)).sum()
}

/// Like [`potential_from_point_charges`] but rejects coincident points and non-finite sums.
pub fn checked_potential_from_point_charges(
    point: R3,
    charges: &[PointCharge],
) -> Result<Scalar, FieldError> {
    let mut phi = 0.0;
    for (index, c) in charges.iter().enumerate() {
        let r = (point - c.position).norm();
        if r == 0.0 {
            return Err(FieldError::Singular { index, x: point.x, y: point.y, z: point.z });
        }
        phi += POTENTIAL_SCALE * c.charge / r;
    }
    if phi.is_finite() {
        Ok(phi)
    } else {
        Err(FieldError::NonFinite { value: phi, x: point.x, y: point.y, z: point.z })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_charge_on_axis() {
        let q = PointCharge::new(0.0, 0.0, 2.0, 1.0);
        let phi = potential_from_point_charges(R3::zeros(), &[q]);
        assert_relative_eq!(phi, 5.0, max_relative = 1.0e-12);
    }

    #[test]
    fn superposition_is_sum_of_contributions() {
        let charges = [
            PointCharge::new(1.0, 0.0, 1.0, 2.0),
            PointCharge::new(-1.0, 3.0, 0.5, -0.7),
        ];
        let p = R3::new(0.3, -1.2, 0.0);
        let manual = contribution(p, &charges[0]) + contribution(p, &charges[1]);
        assert_relative_eq!(potential_from_point_charges(p, &charges), manual, max_relative = 1.0e-12);
    }

    #[test]
    fn coincident_point_propagates_infinity() {
        let q = PointCharge::new(1.0, 1.0, 0.0, -1.0);
        let phi = potential_from_point_charges(R3::new(1.0, 1.0, 0.0), &[q]);
        assert!(phi.is_infinite() && phi.is_sign_negative());
    }

    #[test]
    fn checked_rejects_coincident_point() {
        let charges = [PointCharge::new(0.0, 0.0, 1.0, 1.0), PointCharge::new(1.0, 1.0, 0.0, 1.0)];
        let err = checked_potential_from_point_charges(R3::new(1.0, 1.0, 0.0), &charges).unwrap_err();
        assert!(matches!(err, FieldError::Singular { index: 1, .. }));
    }

    #[test]
    fn checked_matches_plain_away_from_charges() {
        let charges = [PointCharge::new(0.0, 0.0, 1.0, 1.0)];
        let p = R3::new(0.0, 0.0, 0.0);
        let checked = checked_potential_from_point_charges(p, &charges).unwrap();
        assert_relative_eq!(checked, potential_from_point_charges(p, &charges));
    }
}
