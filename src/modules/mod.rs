//! Algorithms over paths: curve evaluation, control point solving,
//! resampling, road extrusion, placement, hit-testing and export.

pub mod bezier;
pub mod export;
pub mod placement;
pub mod query;
pub mod resample;
pub mod road;
pub mod tangent;
