//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector3};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;
/// Row-major-indexed 2D array of scalars (`rows × columns`).
pub type Grid2 = DMatrix<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Expands two axes into coordinate arrays of shape `ys.len() × xs.len()`.
///
/// Entry `(i, j)` of the first array is `xs[j]`; of the second, `ys[i]`.
#[must_use]
pub fn meshgrid(xs: &[Scalar], ys: &[Scalar]) -> (Grid2, Grid2) {
    let rows = ys.len();
    let cols = xs.len();
    let x = Grid2::from_fn(rows, cols, |_, j| xs[j]);
    let y = Grid2::from_fn(rows, cols, |i, _| ys[i]);
    (x, y)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(-4.0, 4.0, 0).is_empty());
        assert_eq!(linspace(-4.0, 4.0, 1), vec![-4.0]);
    }

    #[test]
    fn linspace_hits_both_endpoints() {
        let v = linspace(-3.0, 8.0, 55);
        assert_eq!(v.len(), 55);
        assert_relative_eq!(v[0], -3.0);
        assert_relative_eq!(v[54], 8.0, epsilon = 1.0e-12);
    }

    #[test]
    fn meshgrid_repeats_axes() {
        let (x, y) = meshgrid(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(x.shape(), (2, 3));
        assert_eq!(y.shape(), (2, 3));
        assert_eq!(x[(1, 2)], 3.0);
        assert_eq!(x[(0, 2)], 3.0);
        assert_eq!(y[(1, 0)], 20.0);
        assert_eq!(y[(1, 2)], 20.0);
    }
}
