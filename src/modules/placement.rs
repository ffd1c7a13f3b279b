//! Evenly spaced object placement along a path.

use serde::{Deserialize, Serialize};

use crate::constants::PLACEMENT_SCALE;
use crate::data::{Path, Point};
use crate::error::PathResult;

/// Where to put one object and how large to make it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Point,
    /// Uniform scale, half the spacing so neighbours never touch.
    pub scale: f64,
}

/// One placement per resampled point of `path`.
pub fn place_along(path: &Path, spacing: f64, resolution: f64) -> PathResult<Vec<Placement>> {
    let scale = spacing * PLACEMENT_SCALE;
    Ok(path
        .calculate_evenly_spaced_points(spacing, resolution)?
        .into_iter()
        .map(|position| Placement { position, scale })
        .collect())
}
