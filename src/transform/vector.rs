//! Transforms between Cartesian and curvilinear field representations.

use ndarray::Array2;

use super::basis::ContravariantBasis;
use super::sample::SampleData;
use crate::operators::index_gradient;

/// Cartesian components of a vector quantity sampled on a mesh.
#[derive(Clone, Debug)]
pub struct VectorComponents<T: SampleData> {
    x: T,
    y: T,
}

impl<T: SampleData> VectorComponents<T> {
    /// Bundle the x and y components of a vector quantity.
    ///
    /// # Panics
    ///
    /// Panics if the components disagree in shape.
    pub fn new(x: T, y: T) -> Self {
        assert_eq!(
            x.sample_shape(),
            y.sample_shape(),
            "vector components must share one shape"
        );
        Self { x, y }
    }

    /// x component.
    #[inline]
    pub fn x(&self) -> &T {
        &self.x
    }

    /// y component.
    #[inline]
    pub fn y(&self) -> &T {
        &self.y
    }
}

/// Contravariant curvilinear components of a Cartesian vector quantity:
///
/// ```text
/// c_a = vx * dA/dx + vy * dA/dy
/// c_b = vx * dB/dx + vy * dB/dy
/// ```
///
/// Works per point, per point set, or over the whole mesh, depending on the
/// container kind `T`. On an orthogonal mesh, rescaling the result by the
/// scale factors `(h1, h2)` recovers the physical components.
///
/// # Panics
///
/// Panics if the vector components and the basis disagree in shape.
pub fn contravariant_from_cartesian<T, B>(vectors: &VectorComponents<T>, basis: &B) -> (T, T)
where
    T: SampleData,
    B: ContravariantBasis<T>,
{
    assert_eq!(
        vectors.x().sample_shape(),
        basis.da_dx().sample_shape(),
        "vector components and basis must share one shape"
    );

    let component_a = vectors.x().mul(basis.da_dx()).add(&vectors.y().mul(basis.da_dy()));
    let component_b = vectors.x().mul(basis.db_dx()).add(&vectors.y().mul(basis.db_dy()));
    (component_a, component_b)
}

/// Cartesian gradient of a scalar field sampled on the mesh.
///
/// The index-space derivatives (ds/dA, ds/dB) come from the same
/// second-order stencil the metrics are built with; the chain rule then
/// maps them to physical space:
///
/// ```text
/// ds/dx = ds/dA * dA/dx + ds/dB * dB/dx
/// ds/dy = ds/dA * dA/dy + ds/dB * dB/dy
/// ```
///
/// The basis is taken as given: non-finite entries propagate into the
/// result untouched.
///
/// # Panics
///
/// Panics if `scalar` and the basis disagree in shape, or if either axis
/// holds fewer than 3 samples.
pub fn gradient_of_scalar<B>(scalar: &Array2<f64>, basis: &B) -> (Array2<f64>, Array2<f64>)
where
    B: ContravariantBasis<Array2<f64>>,
{
    assert_eq!(
        scalar.shape(),
        basis.da_dx().shape(),
        "scalar field and basis must share one shape"
    );

    let (ds_da, ds_db) = index_gradient(scalar);
    let ds_dx = &ds_da * basis.da_dx() + &ds_db * basis.db_dx();
    let ds_dy = &ds_da * basis.da_dy() + &ds_db * basis.db_dy();
    (ds_dx, ds_dy)
}
