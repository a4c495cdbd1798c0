//! Sample structured mesh generators.

use ndarray::{Array1, Array2};

/// Expand two coordinate vectors into matrices, first axis for `a`,
/// second for `b`: `first[[i, j]] = a[i]`, `second[[i, j]] = b[j]`.
pub fn meshgrid(a: &Array1<f64>, b: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (a.len(), b.len());
    let first = Array2::from_shape_fn(shape, |(i, _)| a[i]);
    let second = Array2::from_shape_fn(shape, |(_, j)| b[j]);
    (first, second)
}

/// Uniform n-by-n Cartesian mesh over `[start, stop]` squared, x varying
/// along A (rows) and y along B (columns). Counterclockwise.
pub fn cartesian_mesh(start: f64, stop: f64, n: usize) -> (Array2<f64>, Array2<f64>) {
    let samples = Array1::linspace(start, stop, n);
    meshgrid(&samples, &samples)
}

/// Annular polar mesh: radius along A (rows), angle in radians along B
/// (columns). Increasing angles wind counterclockwise, decreasing ones
/// clockwise.
pub fn polar_mesh(radii: &Array1<f64>, angles: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (radii.len(), angles.len());
    let x = Array2::from_shape_fn(shape, |(i, j)| radii[i] * angles[j].cos());
    let y = Array2::from_shape_fn(shape, |(i, j)| radii[i] * angles[j].sin());
    (x, y)
}
