//! Walk-through of the Poincaré ball gyrovector operations.
//!
//! Run with: cargo run --example gyrovector_tour

use nalgebra::DVector;
use poincare_ball::prelude::*;

fn print_vector(name: &str, v: &DVector<f64>) {
    let components: Vec<String> = v.iter().map(|c| format!("{c:.6}")).collect();
    println!("{name} = [{}]", components.join(", "));
}

fn main() -> Result<()> {
    println!("=== Poincaré Ball Gyrovector Algebra (v{VERSION}) ===\n");

    // Example 1: Möbius addition
    println!("Example 1: Möbius Addition");
    let x = DVector::from_vec(vec![0.3, 0.4]);
    let y = DVector::from_vec(vec![0.2, 0.1]);
    print_vector("x", &x);
    print_vector("y", &y);
    let sum = mobius_add(&x, &y)?;
    print_vector("x ⊕ y", &sum);
    println!("‖x ⊕ y‖ = {:.6}\n", norm(&sum));

    // Example 2: Möbius scalar multiplication
    println!("Example 2: Möbius Scalar Multiplication");
    let r = 0.5;
    let z = DVector::from_vec(vec![0.5, 0.3]);
    print_vector("z", &z);
    println!("r = {r}");
    let scaled = mobius_scalar_multiply(r, &z)?;
    print_vector("r ⊗ z", &scaled);
    println!("‖r ⊗ z‖ = {:.6}\n", norm(&scaled));

    // Example 3: Exponential map
    println!("Example 3: Exponential Map");
    let base = DVector::from_vec(vec![0.2, 0.1]);
    let tangent = DVector::from_vec(vec![0.1, 0.15]);
    print_vector("base point x", &base);
    print_vector("tangent vector v", &tangent);
    let exp_result = exp_map(&base, &tangent)?;
    print_vector("exp_x(v)", &exp_result);
    println!("‖exp_x(v)‖ = {:.6}\n", norm(&exp_result));

    // Example 4: Logarithmic map
    println!("Example 4: Logarithmic Map");
    let x_base = DVector::from_vec(vec![0.1, 0.2]);
    let y_target = DVector::from_vec(vec![0.3, 0.25]);
    print_vector("base point x", &x_base);
    print_vector("target point y", &y_target);
    let log_result = log_map(&x_base, &y_target)?;
    print_vector("log_x(y)", &log_result);
    println!("‖log_x(y)‖ = {:.6}\n", norm(&log_result));

    // Example 5: Distance
    println!("Example 5: Hyperbolic Distance");
    let p1 = DVector::from_vec(vec![0.1, 0.1]);
    let p2 = DVector::from_vec(vec![0.4, 0.3]);
    print_vector("p1", &p1);
    print_vector("p2", &p2);
    println!("d(p1, p2) = {:.6}\n", distance(&p1, &p2)?);

    // Example 6: Verify exp and log are inverses
    println!("Example 6: Verifying exp and log are inverses");
    let x0 = DVector::from_vec(vec![0.2, 0.15]);
    let v0 = DVector::from_vec(vec![0.1, 0.08]);
    let y0 = exp_map(&x0, &v0)?;
    let v_recovered = log_map(&x0, &y0)?;
    print_vector("original tangent vector v", &v0);
    print_vector("recovered tangent vector log_x(exp_x(v))", &v_recovered);
    println!("‖v − log_x(exp_x(v))‖ = {:.6e}", (&v0 - &v_recovered).norm());

    Ok(())
}
