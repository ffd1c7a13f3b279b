//! Orientation state carried by every anchor of a path.

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// Rotation and twist of one anchor.
///
/// The anchor position itself lives in the path's point sequence; this record
/// is indexed by anchor number (`point_index / 3`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorState {
    /// Orientation last assigned through `Path::rotate_point`.
    pub rotation: UnitQuaternion<f64>,
    /// Signed twist in degrees around the ribbon's forward axis.
    pub angle: f64,
}

impl Default for AnchorState {
    fn default() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            angle: 0.0,
        }
    }
}

impl AnchorState {
    /// Blend towards `other`. Opposite rotations have no unique slerp, so the
    /// rotation of `self` is kept for them.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let rotation = self
            .rotation
            .try_slerp(&other.rotation, t, EPSILON)
            .unwrap_or(self.rotation);
        Self {
            rotation,
            angle: self.angle + (other.angle - self.angle) * t,
        }
    }
}
