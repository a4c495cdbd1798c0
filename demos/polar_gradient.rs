//! Walk through the crate on an annular mesh: build the metrics, inspect
//! orientation and Jacobian, then take the gradient of the radius field.
//!
//! Run with `cargo run --example polar_gradient`.

use curvi_rs::{contravariant_from_cartesian, gradient_of_scalar, polar_mesh, GridMetrics, VectorComponents};
use ndarray::Array1;
use std::f64::consts::TAU;

fn main() -> Result<(), curvi_rs::MetricsError> {
    let radii = Array1::linspace(0.5, 2.0, 24);
    let angles = Array1::linspace(0.0, TAU, 48);
    let (x, y) = polar_mesh(&radii, &angles);

    // r = sqrt(x^2 + y^2), whose gradient is the unit radial vector.
    let r_field = (&x * &x + &y * &y).mapv(f64::sqrt);

    let metrics = GridMetrics::new(x, y)?;
    println!("mesh shape:      {:?}", metrics.shape());
    println!("orientation:     {}", metrics.orientation());

    let j_min = metrics.jacobian().fold(f64::INFINITY, |acc, &j| acc.min(j));
    let j_max = metrics.jacobian().fold(f64::NEG_INFINITY, |acc, &j| acc.max(j));
    println!("jacobian range:  [{:.6}, {:.6}]", j_min, j_max);

    let (dr_dx, dr_dy) = gradient_of_scalar(&r_field, &metrics);
    println!("\n|grad r| samples (should be close to 1):");
    for (i, j) in [(6, 12), (12, 24), (18, 36)] {
        let magnitude = (dr_dx[[i, j]] * dr_dx[[i, j]] + dr_dy[[i, j]] * dr_dy[[i, j]]).sqrt();
        println!("  at ({:2}, {:2}): {:.6}", i, j, magnitude);
    }

    // A unit x vector at one point, in contravariant components.
    let vectors = VectorComponents::new(1.0, 0.0);
    let (c_a, c_b) = contravariant_from_cartesian(&vectors, &metrics.basis_at(12, 0));
    println!("\nunit x vector at (12, 0): c_a = {:.6}, c_b = {:.6}", c_a, c_b);

    Ok(())
}
