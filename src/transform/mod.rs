//! Vector and scalar transforms over a contravariant basis.
//!
//! This module provides:
//! - `SampleData`, the elementwise surface shared by point, point-set, and
//!   whole-mesh samples
//! - `ContravariantBasis` and the detached `BasisComponents` bundle
//! - `contravariant_from_cartesian` and `gradient_of_scalar`

mod basis;
mod sample;
mod vector;

pub use basis::{BasisComponents, ContravariantBasis};
pub use sample::SampleData;
pub use vector::{contravariant_from_cartesian, gradient_of_scalar, VectorComponents};
