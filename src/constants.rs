//! Reference constants for the four-charge potential demo.
//!
//! The potential scale replaces the physical Coulomb constant with a plain
//! factor of 10, so the resulting surface is stylized rather than physical.

use crate::math::Scalar;

/// Factor applied to every `q / r` term of the potential sum.
pub const POTENTIAL_SCALE: Scalar = 10.0;

/// Marker size per unit charge for the primary pair.
pub const PRIMARY_MARKER_SCALE: Scalar = 100.0;
/// Literal marker sizes for the fixed pair (C, D).
pub const FIXED_MARKER_SIZES: [Scalar; 2] = [50.0, 10.0];

/// Initial `(x, y, z, q)` of primary charge A.
pub const CHARGE_A: [Scalar; 4] = [2.0, 0.0, 2.0, 1.0];
/// Initial `(x, y, z, q)` of primary charge B.
pub const CHARGE_B: [Scalar; 4] = [-2.0, 0.0, 2.0, 1.0];
/// `(x, y, z, q)` of fixed charge C.
pub const CHARGE_C: [Scalar; 4] = [0.0, 0.75, 1.5, -0.5];
/// `(x, y, z, q)` of fixed charge D.
pub const CHARGE_D: [Scalar; 4] = [0.0, 6.0, 1.0, -0.1];

/// Horizontal extent of the sampling grid.
pub const GRID_X_RANGE: (Scalar, Scalar) = (-4.0, 4.0);
/// Number of x samples (grid columns).
pub const GRID_X_SAMPLES: usize = 40;
/// Vertical extent of the sampling grid.
pub const GRID_Y_RANGE: (Scalar, Scalar) = (-3.0, 8.0);
/// Number of y samples (grid rows).
pub const GRID_Y_SAMPLES: usize = 55;

/// Slider lower bound.
pub const SLIDER_MIN: Scalar = 0.5;
/// Slider upper bound.
pub const SLIDER_MAX: Scalar = 1.5;
/// Slider increment.
pub const SLIDER_STEP: Scalar = 0.1;
/// Slider position at startup.
pub const SLIDER_DEFAULT: Scalar = 1.0;

/// Heading of the demo page.
pub const PAGE_TITLE: &str = "おっぱい関数　物理学的アプローチ";
/// Title of the 3D figure.
pub const FIGURE_TITLE: &str = "電位的おっぱい";
/// Title of the potential (z) axis.
pub const Z_AXIS_TITLE: &str = "V";
/// Prefix of the charge label.
pub const LABEL_PREFIX: &str = "点Ａ・点Ｂの電荷：";
/// Unit suffix of the charge label.
pub const LABEL_UNIT: &str = "クーロン";
