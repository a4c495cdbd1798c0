//! Grid metrics: forward and inverse map derivatives, Jacobian, scale
//! factors, normals, and orientation of a structured curvilinear mesh.

mod grid_metrics;
mod orientation;

pub use grid_metrics::{GridMetrics, MetricsError};
pub use orientation::Orientation;
