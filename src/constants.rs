//! Tuning constants shared by the path, resampling and mesh modules.

/// Subdivisions per unit of estimated curve length when resampling at resolution 1.
pub const DIVISIONS_PER_UNIT: f64 = 10.0;

/// Upper bound on the parameter steps walked per segment when resampling.
pub const MAX_DIVISIONS_PER_SEGMENT: usize = 100_000;

/// Fraction of the neighbour distance used for an auto-set control arm.
pub const AUTO_TANGENT_SCALE: f64 = 0.5;

/// Lengths below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Resolution used when callers have no preference.
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// Texture tiling is `round(tiling * point_count * spacing * TEXTURE_TILING_SCALE)`.
pub const TEXTURE_TILING_SCALE: f64 = 0.05;

/// Cross-section u coordinates of a flat ribbon, left to right.
pub const FLAT_PROFILE_U: [f64; 2] = [0.0, 1.0];

/// Cross-section u coordinates of an edged ribbon: kerb, edge, edge, kerb.
pub const EDGED_PROFILE_U: [f64; 4] = [0.0, 0.1, 0.9, 1.0];

/// Placed objects are scaled to this fraction of the spacing.
pub const PLACEMENT_SCALE: f64 = 0.5;

/// Polyline samples per segment when measuring distance to a curve.
pub const HIT_TEST_SAMPLES: usize = 32;
