//! Index-space finite differences.
//!
//! Derivatives are taken with respect to the row or column *index* of a
//! sampled field, i.e. with unit spacing between samples. The stencil is
//! second-order accurate everywhere: centered differences in the interior
//! and one-sided three-point differences at the edges,
//!
//! ```text
//! interior:  d[i] = (f[i+1] - f[i-1]) / 2
//! leading:   d[0] = (-3 f[0] + 4 f[1] - f[2]) / 2
//! trailing:  d[n-1] = (3 f[n-1] - 4 f[n-2] + f[n-3]) / 2
//! ```
//!
//! The one-sided edge formulas need three samples, so the differentiated
//! axis must hold at least three points.

use ndarray::Array2;

/// Derivative of `field` along rows (the first axis), index spacing 1.
///
/// # Panics
///
/// Panics if `field` has fewer than 3 rows.
pub fn row_gradient(field: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = field.dim();
    assert!(rows >= 3, "row gradient needs at least 3 rows, got {}", rows);

    let mut deriv = Array2::zeros((rows, cols));
    for j in 0..cols {
        deriv[[0, j]] = 0.5 * (-3.0 * field[[0, j]] + 4.0 * field[[1, j]] - field[[2, j]]);
        for i in 1..rows - 1 {
            deriv[[i, j]] = 0.5 * (field[[i + 1, j]] - field[[i - 1, j]]);
        }
        deriv[[rows - 1, j]] =
            0.5 * (3.0 * field[[rows - 1, j]] - 4.0 * field[[rows - 2, j]] + field[[rows - 3, j]]);
    }
    deriv
}

/// Derivative of `field` along columns (the second axis), index spacing 1.
///
/// # Panics
///
/// Panics if `field` has fewer than 3 columns.
pub fn col_gradient(field: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = field.dim();
    assert!(cols >= 3, "column gradient needs at least 3 columns, got {}", cols);

    let mut deriv = Array2::zeros((rows, cols));
    for i in 0..rows {
        deriv[[i, 0]] = 0.5 * (-3.0 * field[[i, 0]] + 4.0 * field[[i, 1]] - field[[i, 2]]);
        for j in 1..cols - 1 {
            deriv[[i, j]] = 0.5 * (field[[i, j + 1]] - field[[i, j - 1]]);
        }
        deriv[[i, cols - 1]] =
            0.5 * (3.0 * field[[i, cols - 1]] - 4.0 * field[[i, cols - 2]] + field[[i, cols - 3]]);
    }
    deriv
}

/// Both index-space derivatives of `field`: `(d/d_row, d/d_col)`.
///
/// # Panics
///
/// Panics if either axis of `field` holds fewer than 3 samples.
pub fn index_gradient(field: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    (row_gradient(field), col_gradient(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_linear_field_exact_everywhere() {
        // f(i, j) = 2i + 3j has constant derivatives (2, 3); the stencil
        // reproduces them exactly, edges included.
        let field = Array2::from_shape_fn((5, 4), |(i, j)| 2.0 * i as f64 + 3.0 * j as f64);
        let (d_rows, d_cols) = index_gradient(&field);

        for ((i, j), &d) in d_rows.indexed_iter() {
            assert!(
                (d - 2.0).abs() < TOL,
                "row derivative at ({}, {}) = {}, expected 2",
                i,
                j,
                d
            );
        }
        for ((i, j), &d) in d_cols.indexed_iter() {
            assert!(
                (d - 3.0).abs() < TOL,
                "column derivative at ({}, {}) = {}, expected 3",
                i,
                j,
                d
            );
        }
    }

    #[test]
    fn test_quadratic_field_exact_everywhere() {
        // Second-order stencils differentiate quadratics without error,
        // including the one-sided edge formulas.
        let field = Array2::from_shape_fn((6, 3), |(i, _)| (i * i) as f64);
        let d_rows = row_gradient(&field);

        for ((i, j), &d) in d_rows.indexed_iter() {
            let exact = 2.0 * i as f64;
            assert!(
                (d - exact).abs() < TOL,
                "row derivative at ({}, {}) = {}, expected {}",
                i,
                j,
                d,
                exact
            );
        }
    }

    #[test]
    fn test_constant_field_has_zero_gradient() {
        let field = Array2::from_elem((4, 5), 7.25);
        let (d_rows, d_cols) = index_gradient(&field);

        for &d in d_rows.iter().chain(d_cols.iter()) {
            assert!(d.abs() < TOL, "derivative of a constant = {}", d);
        }
    }

    #[test]
    fn test_axes_are_independent() {
        // A field varying only along columns has zero row derivative.
        let field = Array2::from_shape_fn((4, 6), |(_, j)| (j as f64).exp());
        let d_rows = row_gradient(&field);

        for &d in d_rows.iter() {
            assert!(d.abs() < TOL, "row derivative of column-only field = {}", d);
        }
    }

    #[test]
    #[should_panic(expected = "at least 3 rows")]
    fn test_two_rows_panics() {
        let field = Array2::<f64>::zeros((2, 5));
        row_gradient(&field);
    }

    #[test]
    #[should_panic(expected = "at least 3 columns")]
    fn test_two_columns_panics() {
        let field = Array2::<f64>::zeros((5, 2));
        col_gradient(&field);
    }
}
