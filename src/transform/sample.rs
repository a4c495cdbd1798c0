//! Containers for quantities sampled on a mesh.
//!
//! The transforms in this crate run unchanged over a quantity at one grid
//! point (`f64`), at a gathered set of points (`Array1<f64>`), or over the
//! whole mesh (`Array2<f64>`). [`SampleData`] is the small elementwise
//! surface they share.

use ndarray::{Array1, Array2};

/// Elementwise arithmetic over a sampled quantity.
///
/// Implementations must keep `mul` and `add` strictly elementwise between
/// equal-shape values; callers check shapes before doing arithmetic, so no
/// implicit broadcasting ever takes place.
pub trait SampleData: Clone {
    /// Shape of the container. A single-point sample is zero-dimensional
    /// and reports an empty shape.
    fn sample_shape(&self) -> &[usize];

    /// Elementwise product with `other`.
    fn mul(&self, other: &Self) -> Self;

    /// Elementwise sum with `other`.
    fn add(&self, other: &Self) -> Self;
}

impl SampleData for f64 {
    #[inline]
    fn sample_shape(&self) -> &[usize] {
        &[]
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        self + other
    }
}

impl SampleData for Array1<f64> {
    #[inline]
    fn sample_shape(&self) -> &[usize] {
        self.shape()
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }
}

impl SampleData for Array2<f64> {
    #[inline]
    fn sample_shape(&self) -> &[usize] {
        self.shape()
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }
}
