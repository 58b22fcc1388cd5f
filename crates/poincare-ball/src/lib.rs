//! Gyrovector algebra on the Poincaré ball model of hyperbolic space.
//!
//! This crate provides the Möbius operations of the Poincaré ball gyrogroup
//! over vectors of arbitrary finite dimension: Möbius addition and scalar
//! multiplication, exponential and logarithmic maps, and hyperbolic
//! distance. It is intended as a geometric primitives library for
//! hyperbolic embeddings of hierarchical, tree-like data.
//!
//! # Modules
//!
//! - [`error`]: Error types for precondition and numerical failures
//! - [`gyrovector`]: The Möbius operations and vector primitives
//! - [`version`]: Static version metadata
//!
//! # Example
//!
//! ```rust
//! use nalgebra::DVector;
//! use poincare_ball::prelude::*;
//!
//! let x = DVector::from_vec(vec![0.3, 0.4]);
//! let y = DVector::from_vec(vec![0.2, 0.1]);
//!
//! let sum = mobius_add(&x, &y)?;
//! assert!(is_in_ball(&sum, EPSILON));
//! # Ok::<(), GyrovectorError>(())
//! ```

pub mod error;
pub mod gyrovector;
pub mod version;

// Re-export commonly used items at the crate root
pub use error::{GyrovectorError, Result};
pub use gyrovector::{
    distance, dot_product, exp_map, is_in_ball, log_map, mobius_add, mobius_scalar_multiply,
    norm, normalize, EPSILON,
};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use poincare_ball::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GyrovectorError, Result};
    pub use crate::gyrovector::{
        distance, dot_product, exp_map, is_in_ball, log_map, mobius_add,
        mobius_scalar_multiply, norm, normalize, EPSILON,
    };
    pub use crate::version::{VERSION, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};
}
