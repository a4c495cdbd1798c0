//! # curvi-rs
//!
//! Differential geometry for structured, logically rectangular 2D
//! curvilinear meshes.
//!
//! Given two same-shape arrays of Cartesian coordinates `x(A, B)` and
//! `y(A, B)` sampled on a curvilinear grid (coordinate A along rows, B
//! along columns), this crate provides:
//! - Grid metrics: forward and inverse map derivatives, Jacobian
//!   determinant, scale factors, grid-line normals, mesh orientation
//! - Vector transforms: Cartesian to contravariant curvilinear components,
//!   per point, per point set, or over the whole mesh
//! - Scalar gradients in physical space via the chain rule
//! - Sample mesh generators (Cartesian square, polar annulus)
//!
//! All derivatives are taken in index space with second-order finite
//! differences (centered interior, one-sided edges), so no grid spacing is
//! needed beyond the coordinate samples themselves.
//!
//! The `parallel` cargo feature runs the elementwise metric derivation on
//! a thread pool; results are identical to the serial build.
//!
//! # Example
//!
//! ```
//! use curvi_rs::{cartesian_mesh, gradient_of_scalar, GridMetrics};
//!
//! let (x, y) = cartesian_mesh(0.0, 1.0, 9);
//! let field = x.clone();
//! let metrics = GridMetrics::new(x, y)?;
//!
//! // The gradient of the coordinate field x is the unit vector (1, 0).
//! let (ds_dx, ds_dy) = gradient_of_scalar(&field, &metrics);
//! assert!((ds_dx[[4, 4]] - 1.0).abs() < 1e-12);
//! assert!(ds_dy[[4, 4]].abs() < 1e-12);
//! # Ok::<(), curvi_rs::MetricsError>(())
//! ```

pub mod mesh;
pub mod metrics;
pub mod operators;
pub mod transform;

// Re-export main types for convenience
pub use mesh::{cartesian_mesh, meshgrid, polar_mesh};
pub use metrics::{GridMetrics, MetricsError, Orientation};
pub use operators::{col_gradient, index_gradient, row_gradient};
pub use transform::{
    contravariant_from_cartesian, gradient_of_scalar, BasisComponents, ContravariantBasis,
    SampleData, VectorComponents,
};
