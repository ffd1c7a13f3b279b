//! Position type used throughout the crate.

use nalgebra::Vector3;

/// A position in path space. Paths drawn in 2D keep `z == 0`.
pub type Point = Vector3<f64>;
