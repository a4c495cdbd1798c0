//! Structured sample meshes.
//!
//! Small generators for the coordinate layouts the rest of the crate is
//! exercised against: a uniform Cartesian square and an annular polar mesh,
//! both in the row-major (A along rows, B along columns) convention.

mod sample;

pub use sample::{cartesian_mesh, meshgrid, polar_mesh};
