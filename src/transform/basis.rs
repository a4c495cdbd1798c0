//! Contravariant basis bundles.

use super::sample::SampleData;

/// Read access to the four contravariant basis components of the inverse
/// map, `dA/dx`, `dA/dy`, `dB/dx`, `dB/dy`.
///
/// Anything exposing these four fields works as a basis for the transforms:
/// a full [`GridMetrics`](crate::GridMetrics) over the whole mesh, or a bare
/// [`BasisComponents`] carrying just the four values for a point, a point
/// set, or a detached field.
pub trait ContravariantBasis<T: SampleData> {
    /// dA/dx.
    fn da_dx(&self) -> &T;

    /// dA/dy.
    fn da_dy(&self) -> &T;

    /// dB/dx.
    fn db_dx(&self) -> &T;

    /// dB/dy.
    fn db_dy(&self) -> &T;
}

/// Minimal contravariant basis, detached from any mesh instance.
#[derive(Clone, Debug)]
pub struct BasisComponents<T: SampleData> {
    da_dx: T,
    da_dy: T,
    db_dx: T,
    db_dy: T,
}

impl<T: SampleData> BasisComponents<T> {
    /// Bundle four basis components.
    ///
    /// # Panics
    ///
    /// Panics if the components disagree in shape.
    pub fn new(da_dx: T, da_dy: T, db_dx: T, db_dy: T) -> Self {
        let shape = da_dx.sample_shape();
        assert_eq!(
            shape,
            da_dy.sample_shape(),
            "basis components must share one shape"
        );
        assert_eq!(
            shape,
            db_dx.sample_shape(),
            "basis components must share one shape"
        );
        assert_eq!(
            shape,
            db_dy.sample_shape(),
            "basis components must share one shape"
        );
        Self {
            da_dx,
            da_dy,
            db_dx,
            db_dy,
        }
    }
}

impl<T: SampleData> ContravariantBasis<T> for BasisComponents<T> {
    fn da_dx(&self) -> &T {
        &self.da_dx
    }

    fn da_dy(&self) -> &T {
        &self.da_dy
    }

    fn db_dx(&self) -> &T {
        &self.db_dx
    }

    fn db_dy(&self) -> &T {
        &self.db_dy
    }
}
