//! # Gyrovector algebra on the Poincaré ball 𝔹ⁿ
//!
//! The Poincaré ball model represents n-dimensional hyperbolic space as the
//! open unit ball:
//!
//! ```text
//! 𝔹ⁿ = {x ∈ ℝⁿ : ‖x‖ < 1}
//! ```
//!
//! Points in the ball form a gyrogroup under Möbius addition ⊕, a
//! non-commutative, non-associative analogue of vector addition. Every
//! operation in this module is expressed in terms of it:
//!
//! ```text
//! x ⊕ y    = ((1 + 2⟨x,y⟩ + ‖y‖²)x + (1 − ‖x‖²)y) / (1 + 2⟨x,y⟩ + ‖x‖²‖y‖²)
//! r ⊗ x    = tanh(r · artanh(‖x‖)) · x/‖x‖
//! exp_x(v) = x ⊕ (tanh(‖v‖) · v/‖v‖)
//! log_x(y) = artanh(‖−x ⊕ y‖) · (−x ⊕ y)/‖−x ⊕ y‖
//! d(x, y)  = artanh(‖−x ⊕ y‖)
//! ```
//!
//! ## Representation
//!
//! Points, tangent vectors, and generic vectors all use the same
//! [`DVector<f64>`] representation; ball membership is a runtime
//! precondition checked per operation, not a type invariant. The dimension
//! is implicit in the vector length, and binary operations require equal
//! lengths.
//!
//! ## Numerical boundary
//!
//! The open-ball constraint ‖x‖ < 1 is enforced with a practical tolerance:
//! points with squared norm ≥ `1 − EPSILON` are rejected with
//! [`GyrovectorError::InvalidPoint`]. The same `EPSILON` doubles as the
//! "numerically zero" threshold in the near-origin special cases of
//! [`mobius_scalar_multiply`], [`exp_map`], and [`log_map`].
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::DVector;
//! use poincare_ball::gyrovector::{distance, exp_map, log_map};
//!
//! let x = DVector::from_vec(vec![0.2, 0.15]);
//! let v = DVector::from_vec(vec![0.1, 0.08]);
//!
//! // Follow the geodesic from x along v, then recover v.
//! let y = exp_map(&x, &v)?;
//! let v_back = log_map(&x, &y)?;
//! assert!((v - v_back).norm() < 1e-9);
//!
//! // Hyperbolic distance between two ball points.
//! let d = distance(&x, &y)?;
//! assert!(d > 0.0);
//! # Ok::<(), poincare_ball::error::GyrovectorError>(())
//! ```

use nalgebra::DVector;

use crate::error::{GyrovectorError, Result};

/// Numerical tolerance shared by the ball-boundary check and the
/// near-zero special cases.
pub const EPSILON: f64 = 1e-10;

/// Computes the Euclidean norm ‖x‖ = √(Σ xᵢ²).
///
/// Defined for any length, including the empty vector (norm 0).
#[inline]
pub fn norm(x: &DVector<f64>) -> f64 {
    x.norm()
}

/// Computes the dot product ⟨x, y⟩ = Σ xᵢ·yᵢ.
///
/// # Errors
///
/// - `DimensionMismatch`: if `x.len() ≠ y.len()`
pub fn dot_product(x: &DVector<f64>, y: &DVector<f64>) -> Result<f64> {
    check_same_dimension(x, y)?;
    Ok(x.dot(y))
}

/// Checks whether a vector lies inside the open unit ball.
///
/// Returns `‖x‖ < 1 − epsilon`. Callers that want the library's standard
/// boundary pass [`EPSILON`].
pub fn is_in_ball(x: &DVector<f64>, epsilon: f64) -> bool {
    x.norm() < 1.0 - epsilon
}

/// Returns `x / ‖x‖`, or the zero vector of the same length when
/// `‖x‖ < EPSILON` (avoids division by a near-zero norm).
pub fn normalize(x: &DVector<f64>) -> DVector<f64> {
    let n = x.norm();
    if n < EPSILON {
        return DVector::zeros(x.len());
    }
    x / n
}

/// Computes the Möbius addition x ⊕ y.
///
/// # Mathematical Formula
///
/// ```text
/// x ⊕ y = ((1 + 2⟨x,y⟩ + ‖y‖²)x + (1 − ‖x‖²)y) / (1 + 2⟨x,y⟩ + ‖x‖²‖y‖²)
/// ```
///
/// This is the fundamental binary operation of the gyrogroup; `exp_map`,
/// `log_map`, and `distance` are all built on it.
///
/// # Errors
///
/// - `DimensionMismatch`: if `x.len() ≠ y.len()`
/// - `InvalidPoint`: if `‖x‖² ≥ 1 − EPSILON` or `‖y‖² ≥ 1 − EPSILON`
/// - `NumericalError`: if the denominator magnitude falls below `EPSILON`,
///   which can genuinely happen near the ball boundary
pub fn mobius_add(x: &DVector<f64>, y: &DVector<f64>) -> Result<DVector<f64>> {
    check_same_dimension(x, y)?;

    let x_norm_sq = x.norm_squared();
    let y_norm_sq = y.norm_squared();
    let xy_dot = x.dot(y);

    if x_norm_sq >= 1.0 - EPSILON || y_norm_sq >= 1.0 - EPSILON {
        return Err(GyrovectorError::invalid_point(format!(
            "operand outside open unit ball: ‖x‖² = {x_norm_sq}, ‖y‖² = {y_norm_sq}"
        )));
    }

    let denominator = 1.0 + 2.0 * xy_dot + x_norm_sq * y_norm_sq;
    if denominator.abs() < EPSILON {
        return Err(GyrovectorError::numerical_error(format!(
            "Möbius addition denominator too small: {denominator}"
        )));
    }

    let coeff_x = 1.0 + 2.0 * xy_dot + y_norm_sq;
    let coeff_y = 1.0 - x_norm_sq;

    Ok((x * coeff_x + y * coeff_y) / denominator)
}

/// Computes the Möbius scalar multiplication r ⊗ x.
///
/// # Mathematical Formula
///
/// ```text
/// r ⊗ x = tanh(r · artanh(‖x‖)) · x/‖x‖
/// ```
///
/// Scales a ball point along its geodesic through the origin. `r` may be
/// any real number: negative values reverse direction, zero maps every
/// point to the origin.
///
/// # Errors
///
/// - `InvalidArgument`: if `x` is empty
/// - `InvalidPoint`: if `‖x‖ ≥ 1 − EPSILON`
pub fn mobius_scalar_multiply(r: f64, x: &DVector<f64>) -> Result<DVector<f64>> {
    if x.is_empty() {
        return Err(GyrovectorError::invalid_argument(
            "scalar multiplication requires a non-empty vector",
        ));
    }

    let x_norm = x.norm();
    if x_norm >= 1.0 - EPSILON {
        return Err(GyrovectorError::invalid_point(format!(
            "point outside open unit ball: ‖x‖ = {x_norm}"
        )));
    }

    // Scaling the origin yields the origin; avoids artanh(0)/0.
    if x_norm < EPSILON {
        return Ok(DVector::zeros(x.len()));
    }

    let new_norm = (r * x_norm.atanh()).tanh();
    Ok(x * (new_norm / x_norm))
}

/// Computes the exponential map exp_x(v).
///
/// # Mathematical Formula
///
/// ```text
/// exp_x(v) = x ⊕ (tanh(‖v‖) · v/‖v‖)
/// ```
///
/// Maps a tangent vector `v` at the base point `x` to the ball point
/// reached by following the geodesic from `x` in direction `v`.
///
/// # Errors
///
/// - `DimensionMismatch`: if `x.len() ≠ v.len()`
/// - `InvalidPoint`: if `‖x‖² ≥ 1 − EPSILON`
/// - `NumericalError`: propagated from the internal Möbius addition
pub fn exp_map(x: &DVector<f64>, v: &DVector<f64>) -> Result<DVector<f64>> {
    check_same_dimension(x, v)?;

    let x_norm_sq = x.norm_squared();
    if x_norm_sq >= 1.0 - EPSILON {
        return Err(GyrovectorError::invalid_point(format!(
            "base point outside open unit ball: ‖x‖² = {x_norm_sq}"
        )));
    }

    let v_norm = v.norm();

    // A zero tangent vector stays at the base point.
    if v_norm < EPSILON {
        return Ok(x.clone());
    }

    let scaled_v = normalize(v) * v_norm.tanh();
    mobius_add(x, &scaled_v)
}

/// Computes the logarithmic map log_x(y).
///
/// # Mathematical Formula
///
/// ```text
/// log_x(y) = artanh(‖−x ⊕ y‖) · (−x ⊕ y)/‖−x ⊕ y‖
/// ```
///
/// Inverse of [`exp_map`] at the same base point, up to floating-point
/// rounding: `log_x(exp_x(v)) ≈ v` and `exp_x(log_x(y)) ≈ y`.
///
/// # Errors
///
/// - `DimensionMismatch`: if `x.len() ≠ y.len()`
/// - `InvalidPoint`: if either point has squared norm ≥ `1 − EPSILON`
/// - `NumericalError`: propagated from the internal Möbius addition
pub fn log_map(x: &DVector<f64>, y: &DVector<f64>) -> Result<DVector<f64>> {
    check_same_dimension(x, y)?;

    let x_norm_sq = x.norm_squared();
    let y_norm_sq = y.norm_squared();
    if x_norm_sq >= 1.0 - EPSILON || y_norm_sq >= 1.0 - EPSILON {
        return Err(GyrovectorError::invalid_point(format!(
            "point outside open unit ball: ‖x‖² = {x_norm_sq}, ‖y‖² = {y_norm_sq}"
        )));
    }

    let m = mobius_add(&(-x), y)?;
    let m_norm = m.norm();

    // Coincident points map to the zero tangent vector.
    if m_norm < EPSILON {
        return Ok(DVector::zeros(x.len()));
    }

    Ok(&m * (m_norm.atanh() / m_norm))
}

/// Computes the hyperbolic distance d(x, y).
///
/// # Mathematical Formula
///
/// ```text
/// d(x, y) = artanh(‖−x ⊕ y‖)
/// ```
///
/// Symmetric and non-negative, zero iff `x == y`, and unbounded as either
/// point approaches the ball boundary. Ball membership is enforced by the
/// internal Möbius addition, so out-of-ball inputs surface as
/// `InvalidPoint` through that call.
///
/// # Errors
///
/// - `DimensionMismatch`: if `x.len() ≠ y.len()`
/// - `InvalidPoint`, `NumericalError`: propagated from the internal
///   Möbius addition
pub fn distance(x: &DVector<f64>, y: &DVector<f64>) -> Result<f64> {
    check_same_dimension(x, y)?;

    let m = mobius_add(&(-x), y)?;
    Ok(m.norm().atanh())
}

fn check_same_dimension(x: &DVector<f64>, y: &DVector<f64>) -> Result<()> {
    if x.len() != y.len() {
        return Err(GyrovectorError::dimension_mismatch(x.len(), y.len()));
    }
    Ok(())
}
