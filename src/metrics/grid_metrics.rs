//! Metric terms of a structured curvilinear mesh.
//!
//! For a mesh given by Cartesian coordinate samples `x(A, B)`, `y(A, B)`
//! (curvilinear coordinate A along rows, B along columns), the forward map
//! derivatives come from the index-space stencil in [`crate::operators`],
//! and the remaining quantities follow analytically:
//!
//! ```text
//! J     = dx/dA * dy/dB - dx/dB * dy/dA
//! dA/dx =  (dy/dB) / J        dA/dy = -(dx/dB) / J
//! dB/dx = -(dy/dA) / J        dB/dy =  (dx/dA) / J
//! h1    = sqrt((dx/dA)^2 + (dy/dA)^2)
//! h2    = sqrt((dx/dB)^2 + (dy/dB)^2)
//! ```
//!
//! The sign of `J` fixes the mesh orientation. The normal to the
//! A-coordinate lines is the A-line tangent turned a quarter turn,
//! `(-dy/dA, dx/dA)` on counterclockwise meshes and `(dy/dA, -dx/dA)` on
//! clockwise ones; its magnitude is `h1`, not 1.

use ndarray::{Array1, Array2};
use thiserror::Error;

#[cfg(not(feature = "parallel"))]
use ndarray::azip;
#[cfg(feature = "parallel")]
use ndarray::par_azip as azip;

use crate::metrics::Orientation;
use crate::operators::{col_gradient, row_gradient};
use crate::transform::{BasisComponents, ContravariantBasis};

/// Why [`GridMetrics::new`] rejected a mesh.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The two coordinate arrays disagree in shape.
    #[error("coordinate arrays differ in shape: x is {x_shape:?}, y is {y_shape:?}")]
    ShapeMismatch {
        x_shape: (usize, usize),
        y_shape: (usize, usize),
    },
    /// An axis holds fewer than the 3 samples the edge stencil needs.
    #[error("mesh needs at least 3 samples per axis, got {rows}x{cols}")]
    TooFewSamples { rows: usize, cols: usize },
    /// A coordinate sample is NaN.
    #[error("{array} coordinates contain NaN, first at ({row}, {col})")]
    NanCoordinate {
        array: &'static str,
        row: usize,
        col: usize,
    },
    /// The Jacobian determinant vanishes, is non-finite, or changes sign
    /// somewhere on the mesh: the coordinate map folds over itself.
    #[error("degenerate jacobian at ({row}, {col}): {value}")]
    DegenerateJacobian { row: usize, col: usize, value: f64 },
}

/// Differential-geometry quantities of a structured 2D curvilinear mesh.
///
/// Built once from coordinate samples; every derived field shares the input
/// shape and is exposed read-only. A [`GridMetrics`] also acts as a
/// whole-mesh [`ContravariantBasis`], so it plugs directly into the
/// transforms in [`crate::transform`].
///
/// # Example
///
/// ```
/// use curvi_rs::{cartesian_mesh, GridMetrics, Orientation};
///
/// let (x, y) = cartesian_mesh(0.0, 1.0, 9);
/// let metrics = GridMetrics::new(x, y)?;
/// assert_eq!(metrics.orientation(), Orientation::Counterclockwise);
/// assert_eq!(metrics.shape(), (9, 9));
/// # Ok::<(), curvi_rs::MetricsError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GridMetrics {
    x: Array2<f64>,
    y: Array2<f64>,
    dx_da: Array2<f64>,
    dx_db: Array2<f64>,
    dy_da: Array2<f64>,
    dy_db: Array2<f64>,
    jacobian: Array2<f64>,
    da_dx: Array2<f64>,
    da_dy: Array2<f64>,
    db_dx: Array2<f64>,
    db_dy: Array2<f64>,
    h1: Array2<f64>,
    h2: Array2<f64>,
    normal_x: Array2<f64>,
    normal_y: Array2<f64>,
    orientation: Orientation,
}

impl GridMetrics {
    /// Build the metric bundle for the mesh given by coordinate samples
    /// `x` and `y` (coordinate A along rows, B along columns).
    ///
    /// The inputs must share one shape, hold at least 3 samples per axis,
    /// and contain no NaN; the resulting Jacobian must be finite, nonzero,
    /// and of uniform sign across the mesh. Anything else fails with the
    /// matching [`MetricsError`] and no partial instance escapes.
    pub fn new(x: Array2<f64>, y: Array2<f64>) -> Result<Self, MetricsError> {
        if x.dim() != y.dim() {
            return Err(MetricsError::ShapeMismatch {
                x_shape: x.dim(),
                y_shape: y.dim(),
            });
        }
        let (rows, cols) = x.dim();
        if rows < 3 || cols < 3 {
            return Err(MetricsError::TooFewSamples { rows, cols });
        }
        for (name, coords) in [("x", &x), ("y", &y)] {
            if let Some(((row, col), _)) = coords.indexed_iter().find(|(_, v)| v.is_nan()) {
                return Err(MetricsError::NanCoordinate {
                    array: name,
                    row,
                    col,
                });
            }
        }

        let dx_da = row_gradient(&x);
        let dx_db = col_gradient(&x);
        let dy_da = row_gradient(&y);
        let dy_db = col_gradient(&y);

        let mut jacobian = Array2::zeros((rows, cols));
        azip!((j in &mut jacobian, &xa in &dx_da, &xb in &dx_db, &ya in &dy_da, &yb in &dy_db) {
            *j = xa * yb - xb * ya
        });

        let reference_sign = jacobian[[0, 0]].signum();
        for ((row, col), &value) in jacobian.indexed_iter() {
            if !value.is_finite() || value == 0.0 || value.signum() != reference_sign {
                return Err(MetricsError::DegenerateJacobian { row, col, value });
            }
        }

        let mut da_dx = Array2::zeros((rows, cols));
        let mut da_dy = Array2::zeros((rows, cols));
        azip!((adx in &mut da_dx, ady in &mut da_dy, &xb in &dx_db, &yb in &dy_db, &j in &jacobian) {
            *adx = yb / j;
            *ady = -xb / j;
        });

        let mut db_dx = Array2::zeros((rows, cols));
        let mut db_dy = Array2::zeros((rows, cols));
        azip!((bdx in &mut db_dx, bdy in &mut db_dy, &xa in &dx_da, &ya in &dy_da, &j in &jacobian) {
            *bdx = -ya / j;
            *bdy = xa / j;
        });

        let mut h1 = Array2::zeros((rows, cols));
        azip!((h in &mut h1, &xa in &dx_da, &ya in &dy_da) {
            *h = (xa * xa + ya * ya).sqrt()
        });

        let mut h2 = Array2::zeros((rows, cols));
        azip!((h in &mut h2, &xb in &dx_db, &yb in &dy_db) {
            *h = (xb * xb + yb * yb).sqrt()
        });

        let first_row_max = jacobian.row(0).fold(f64::NEG_INFINITY, |acc, &j| acc.max(j));
        let orientation = if first_row_max > 0.0 {
            Orientation::Counterclockwise
        } else {
            Orientation::Clockwise
        };

        // Quarter-turn of the A-line tangent, flipped with the winding so
        // the normal always points toward increasing B.
        let (normal_x, normal_y) = match orientation {
            Orientation::Counterclockwise => (dy_da.mapv(|v| -v), dx_da.clone()),
            Orientation::Clockwise => (dy_da.clone(), dx_da.mapv(|v| -v)),
        };

        Ok(Self {
            x,
            y,
            dx_da,
            dx_db,
            dy_da,
            dy_db,
            jacobian,
            da_dx,
            da_dy,
            db_dx,
            db_dy,
            h1,
            h2,
            normal_x,
            normal_y,
            orientation,
        })
    }

    /// Mesh shape as `(rows, cols)`, i.e. (A samples, B samples).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.jacobian.dim()
    }

    /// Cartesian x coordinates of the mesh points.
    #[inline]
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    /// Cartesian y coordinates of the mesh points.
    #[inline]
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// dx/dA, the x increment along A-coordinate lines.
    #[inline]
    pub fn dx_da(&self) -> &Array2<f64> {
        &self.dx_da
    }

    /// dx/dB, the x increment along B-coordinate lines.
    #[inline]
    pub fn dx_db(&self) -> &Array2<f64> {
        &self.dx_db
    }

    /// dy/dA, the y increment along A-coordinate lines.
    #[inline]
    pub fn dy_da(&self) -> &Array2<f64> {
        &self.dy_da
    }

    /// dy/dB, the y increment along B-coordinate lines.
    #[inline]
    pub fn dy_db(&self) -> &Array2<f64> {
        &self.dy_db
    }

    /// Synonym for [`dx_da`](Self::dx_da).
    #[inline]
    pub fn dx(&self) -> &Array2<f64> {
        &self.dx_da
    }

    /// Synonym for [`dy_da`](Self::dy_da).
    #[inline]
    pub fn dy(&self) -> &Array2<f64> {
        &self.dy_da
    }

    /// Jacobian determinant of the forward map.
    #[inline]
    pub fn jacobian(&self) -> &Array2<f64> {
        &self.jacobian
    }

    /// dA/dx of the inverse map.
    #[inline]
    pub fn da_dx(&self) -> &Array2<f64> {
        &self.da_dx
    }

    /// dA/dy of the inverse map.
    #[inline]
    pub fn da_dy(&self) -> &Array2<f64> {
        &self.da_dy
    }

    /// dB/dx of the inverse map.
    #[inline]
    pub fn db_dx(&self) -> &Array2<f64> {
        &self.db_dx
    }

    /// dB/dy of the inverse map.
    #[inline]
    pub fn db_dy(&self) -> &Array2<f64> {
        &self.db_dy
    }

    /// Scale factor along A: the physical length of a unit A step.
    #[inline]
    pub fn h1(&self) -> &Array2<f64> {
        &self.h1
    }

    /// Scale factor along B: the physical length of a unit B step.
    #[inline]
    pub fn h2(&self) -> &Array2<f64> {
        &self.h2
    }

    /// x component of the A-line normal, magnitude `h1`.
    #[inline]
    pub fn normal_x(&self) -> &Array2<f64> {
        &self.normal_x
    }

    /// y component of the A-line normal, magnitude `h1`.
    #[inline]
    pub fn normal_y(&self) -> &Array2<f64> {
        &self.normal_y
    }

    /// Winding of the mesh, from the Jacobian sign.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Contravariant basis at the single grid point `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn basis_at(&self, row: usize, col: usize) -> BasisComponents<f64> {
        BasisComponents::new(
            self.da_dx[[row, col]],
            self.da_dy[[row, col]],
            self.db_dx[[row, col]],
            self.db_dy[[row, col]],
        )
    }

    /// Contravariant basis gathered at a set of grid points, in order.
    ///
    /// # Panics
    ///
    /// Panics if any point is out of bounds.
    pub fn basis_at_points(&self, points: &[(usize, usize)]) -> BasisComponents<Array1<f64>> {
        let gather = |field: &Array2<f64>| -> Array1<f64> {
            points.iter().map(|&(row, col)| field[[row, col]]).collect()
        };
        BasisComponents::new(
            gather(&self.da_dx),
            gather(&self.da_dy),
            gather(&self.db_dx),
            gather(&self.db_dy),
        )
    }
}

impl ContravariantBasis<Array2<f64>> for GridMetrics {
    fn da_dx(&self) -> &Array2<f64> {
        &self.da_dx
    }

    fn da_dy(&self) -> &Array2<f64> {
        &self.da_dy
    }

    fn db_dx(&self) -> &Array2<f64> {
        &self.db_dx
    }

    fn db_dy(&self) -> &Array2<f64> {
        &self.db_dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::cartesian_mesh;
    use std::f64::consts::TAU;

    const TOL: f64 = 1e-10;

    fn wavy_mesh(n: usize) -> (Array2<f64>, Array2<f64>) {
        let s = Array1::linspace(0.0, 1.0, n);
        let x = Array2::from_shape_fn((n, n), |(i, j)| s[i] + 0.05 * (TAU * s[j]).sin());
        let y = Array2::from_shape_fn((n, n), |(i, j)| s[j] + 0.05 * (TAU * s[i]).sin());
        (x, y)
    }

    #[test]
    fn test_cartesian_mesh_uniform_metrics() {
        let (x, y) = cartesian_mesh(0.0, 1.0, 9);
        let metrics = GridMetrics::new(x, y).unwrap();
        let spacing = 0.125;

        for ((i, j), &jac) in metrics.jacobian().indexed_iter() {
            assert!(
                (jac - spacing * spacing).abs() < TOL,
                "jacobian at ({}, {}) = {}, expected {}",
                i,
                j,
                jac,
                spacing * spacing
            );
        }
        for (&h1, &h2) in metrics.h1().iter().zip(metrics.h2().iter()) {
            assert!((h1 - spacing).abs() < TOL, "h1 = {}", h1);
            assert!((h2 - spacing).abs() < TOL, "h2 = {}", h2);
        }
        assert_eq!(metrics.orientation(), Orientation::Counterclockwise);
    }

    #[test]
    fn test_inverse_is_pointwise_matrix_inverse() {
        let (x, y) = wavy_mesh(12);
        let m = GridMetrics::new(x, y).unwrap();

        for ((i, j), _) in m.jacobian().indexed_iter() {
            let a11 = m.da_dx[[i, j]] * m.dx_da[[i, j]] + m.da_dy[[i, j]] * m.dy_da[[i, j]];
            let a12 = m.da_dx[[i, j]] * m.dx_db[[i, j]] + m.da_dy[[i, j]] * m.dy_db[[i, j]];
            let a21 = m.db_dx[[i, j]] * m.dx_da[[i, j]] + m.db_dy[[i, j]] * m.dy_da[[i, j]];
            let a22 = m.db_dx[[i, j]] * m.dx_db[[i, j]] + m.db_dy[[i, j]] * m.dy_db[[i, j]];
            assert!((a11 - 1.0).abs() < TOL, "a11 at ({}, {}) = {}", i, j, a11);
            assert!(a12.abs() < TOL, "a12 at ({}, {}) = {}", i, j, a12);
            assert!(a21.abs() < TOL, "a21 at ({}, {}) = {}", i, j, a21);
            assert!((a22 - 1.0).abs() < TOL, "a22 at ({}, {}) = {}", i, j, a22);
        }
    }

    #[test]
    fn test_aliases_match_a_line_increments() {
        let (x, y) = wavy_mesh(8);
        let m = GridMetrics::new(x, y).unwrap();
        assert_eq!(m.dx(), m.dx_da());
        assert_eq!(m.dy(), m.dy_da());
    }

    #[test]
    fn test_folded_mesh_is_degenerate() {
        // x folds back on itself along A, so the Jacobian crosses zero.
        let x = Array2::from_shape_fn((5, 5), |(i, _)| (i as f64 - 2.0).abs() * 0.5);
        let y = Array2::from_shape_fn((5, 5), |(_, j)| j as f64 * 0.5);

        match GridMetrics::new(x, y) {
            Err(MetricsError::DegenerateJacobian { row, col, value }) => {
                assert_eq!((row, col), (2, 0));
                assert!(value.abs() < TOL, "fold jacobian = {}", value);
            }
            other => panic!("expected DegenerateJacobian, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_nan_coordinate_names_first_index() {
        let (x, mut y) = cartesian_mesh(0.0, 1.0, 5);
        y[[1, 3]] = f64::NAN;

        match GridMetrics::new(x, y) {
            Err(MetricsError::NanCoordinate { array, row, col }) => {
                assert_eq!(array, "y");
                assert_eq!((row, col), (1, 3));
            }
            other => panic!("expected NanCoordinate, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_basis_at_matches_whole_field() {
        let (x, y) = wavy_mesh(6);
        let m = GridMetrics::new(x, y).unwrap();
        let point = m.basis_at(2, 4);

        assert_eq!(*point.da_dx(), m.da_dx[[2, 4]]);
        assert_eq!(*point.da_dy(), m.da_dy[[2, 4]]);
        assert_eq!(*point.db_dx(), m.db_dx[[2, 4]]);
        assert_eq!(*point.db_dy(), m.db_dy[[2, 4]]);
    }
}
