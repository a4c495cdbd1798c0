//! Discrete operators on mesh-sampled fields.
//!
//! This module provides:
//! - Index-space finite-difference gradients (`row_gradient`, `col_gradient`,
//!   `index_gradient`), the single stencil shared by metric construction and
//!   scalar gradients

mod stencil;

pub use stencil::{col_gradient, index_gradient, row_gradient};
