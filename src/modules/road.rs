//! Road ribbon extrusion along a resampled path.
//!
//! The path is resampled at the road spacing, every anchor is matched to its
//! nearest resampled point, and a cross-section is emitted at each resampled
//! point. Cross-sections are twisted around the forward direction by the
//! anchor twist angles, interpolated linearly between consecutive anchors.
//!
//! # Example
//!
//! ```rust
//! use bezier_road::modules::road::{update_mesh, RoadSettings};
//! use bezier_road::{pt, Path};
//!
//! let mut path = Path::new(pt!(0, 0));
//! path.add_segment(pt!(4, 2)).unwrap();
//!
//! let mesh = update_mesh(&path, &RoadSettings::default());
//! assert_eq!(mesh.vertices.len(), mesh.uvs.len());
//! assert_eq!(mesh.triangles.len() % 3, 0);
//! ```

use log::warn;
use nalgebra::{Unit, UnitQuaternion, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_RESOLUTION, EDGED_PROFILE_U, EPSILON, FLAT_PROFILE_U, TEXTURE_TILING_SCALE,
};
use crate::data::{Path, Point};

/// Cross-section shape of the ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoadProfile {
    /// Two vertices per cross-section at `±width / 2`.
    Flat,
    /// Adds a kerb on each side at `±width * (0.5 + edge_width)`, lowered by `depth`.
    Edged { edge_width: f64, depth: f64 },
}

impl RoadProfile {
    fn u_coordinates(&self) -> &'static [f64] {
        match self {
            Self::Flat => &FLAT_PROFILE_U,
            Self::Edged { .. } => &EDGED_PROFILE_U,
        }
    }

    pub fn vertices_per_point(&self) -> usize {
        self.u_coordinates().len()
    }

    pub fn triangles_per_band(&self) -> usize {
        (self.vertices_per_point() - 1) * 2
    }
}

/// Parameters of a road mesh build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadSettings {
    pub width: f64,
    /// Distance between consecutive cross-sections.
    pub spacing: f64,
    /// Resampling resolution, see [`Path::calculate_evenly_spaced_points`].
    pub resolution: f64,
    /// Texture repeats per unit of `point_count * spacing * 0.05`.
    pub tiling: f64,
    pub profile: RoadProfile,
    /// Normal of the plane the ribbon lies in before twisting.
    pub up: Vector3<f64>,
}

impl Default for RoadSettings {
    fn default() -> Self {
        Self {
            width: 1.0,
            spacing: 1.0,
            resolution: DEFAULT_RESOLUTION,
            tiling: 1.0,
            profile: RoadProfile::Flat,
            up: Vector3::z(),
        }
    }
}

/// Vertex, index and UV arrays of an extruded road.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadMesh {
    pub vertices: Vec<Point>,
    /// Triangle corner indices into `vertices`, three per triangle.
    pub triangles: Vec<u32>,
    pub uvs: Vec<Vector2<f64>>,
    /// Texture repeat count along the road.
    pub texture_tiling: f64,
}

impl RoadMesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

/// Resample `path` and extrude a road mesh along it.
///
/// Never fails: a path that cannot be resampled with `settings` yields an
/// empty mesh.
pub fn update_mesh(path: &Path, settings: &RoadSettings) -> RoadMesh {
    let points = match path.calculate_evenly_spaced_points(settings.spacing, settings.resolution) {
        Ok(points) => points,
        Err(err) => {
            warn!("cannot build road mesh: {err}");
            return RoadMesh::default();
        }
    };

    let anchor_map = anchor_resample_map(path, &points);
    let angles: Vec<f64> = path.anchor_states().iter().map(|state| state.angle).collect();

    let mut mesh = build_road_mesh(&points, &anchor_map, &angles, path.is_closed(), settings);
    mesh.texture_tiling =
        (settings.tiling * points.len() as f64 * settings.spacing * TEXTURE_TILING_SCALE).round();
    mesh
}

/// For every anchor of `path`, the index of the nearest point in `resampled`.
pub fn anchor_resample_map(path: &Path, resampled: &[Point]) -> Vec<usize> {
    path.anchor_positions()
        .map(|anchor| nearest_index(resampled, &anchor))
        .collect()
}

fn nearest_index(points: &[Point], target: &Point) -> usize {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| (i, (point - target).norm_squared()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(0, |(i, _)| i)
}

/// Twist in degrees at resampled point `index`.
///
/// The span is chosen by the last anchor mapped at or before `index`. On a
/// closed path, points past the last anchor (or before the first) belong to
/// the span that wraps back to anchor 0.
fn interpolated_twist(
    index: usize,
    point_count: usize,
    anchor_map: &[usize],
    angles: &[f64],
    closed: bool,
) -> f64 {
    if anchor_map.is_empty() || anchor_map.len() != angles.len() {
        return 0.0;
    }
    let last = anchor_map.len() - 1;

    let (from, to, span_len) = match anchor_map.iter().rposition(|&mapped| mapped <= index) {
        Some(k) if k < last => (k, k + 1, anchor_map[k + 1].saturating_sub(anchor_map[k])),
        Some(k) if closed => (k, 0, point_count - anchor_map[k] + anchor_map[0]),
        Some(k) => return angles[k],
        None if closed => (last, 0, point_count - anchor_map[last] + anchor_map[0]),
        None => return angles[0],
    };
    if span_len == 0 {
        return angles[from];
    }

    let offset = (index + point_count - anchor_map[from]) % point_count;
    let t = (offset as f64 / span_len as f64).clamp(0.0, 1.0);
    angles[from] + (angles[to] - angles[from]) * t
}

/// Forward and left axes perpendicular to `up`, used until the path yields a
/// usable forward direction.
fn fallback_frame(up: &Vector3<f64>) -> (Unit<Vector3<f64>>, Vector3<f64>) {
    let forward = Unit::try_new(Vector3::y().cross(up), EPSILON)
        .or_else(|| Unit::try_new(up.cross(&Vector3::x()), EPSILON))
        .unwrap_or_else(Vector3::x_axis);
    let left = up.cross(&forward.into_inner());
    (forward, left)
}

/// Extrude a ribbon through `points`.
///
/// `anchor_map` and `angles` hold one entry per path anchor. Fewer than two
/// points cannot form a band and give an empty mesh.
pub fn build_road_mesh(
    points: &[Point],
    anchor_map: &[usize],
    angles: &[f64],
    closed: bool,
    settings: &RoadSettings,
) -> RoadMesh {
    let n = points.len();
    if n < 2 {
        warn!("cannot build road mesh from {n} resampled points");
        return RoadMesh::default();
    }

    let u_coordinates = settings.profile.u_coordinates();
    let per_point = u_coordinates.len();
    let bands = if closed { n } else { n - 1 };
    let vertex_count = n * per_point;

    let mut vertices = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut triangles = Vec::with_capacity(bands * settings.profile.triangles_per_band() * 3);

    let up = settings.up.try_normalize(EPSILON).unwrap_or_else(Vector3::z);
    let (mut forward, mut left) = fallback_frame(&up);
    let half_width = settings.width * 0.5;

    for (i, point) in points.iter().enumerate() {
        let mut direction = Vector3::zeros();
        if i + 1 < n || closed {
            direction += points[(i + 1) % n] - point;
        }
        if i > 0 || closed {
            direction += point - points[(i + n - 1) % n];
        }
        // Degenerate directions keep the previous frame.
        if let Some(axis) = Unit::try_new(direction, EPSILON) {
            if let Some(perpendicular) = up.cross(&axis.into_inner()).try_normalize(EPSILON) {
                forward = axis;
                left = perpendicular;
            }
        }

        let twist = interpolated_twist(i, n, anchor_map, angles, closed);
        let rotation = UnitQuaternion::from_axis_angle(&forward, twist.to_radians());
        let side = rotation * left;
        let normal = rotation * up;

        let completion = i as f64 / (n - 1) as f64;
        let v = 1.0 - (2.0 * completion - 1.0).abs();

        match settings.profile {
            RoadProfile::Flat => {
                vertices.push(point + side * half_width);
                vertices.push(point - side * half_width);
            }
            RoadProfile::Edged { edge_width, depth } => {
                let kerb = settings.width * (0.5 + edge_width);
                vertices.push(point + side * kerb - normal * depth);
                vertices.push(point + side * half_width);
                vertices.push(point - side * half_width);
                vertices.push(point - side * kerb - normal * depth);
            }
        }
        uvs.extend(u_coordinates.iter().map(|&u| Vector2::new(u, v)));

        if i < bands {
            let base = i * per_point;
            let next = ((i + 1) % n) * per_point;
            for lane in 0..per_point - 1 {
                let (a, b) = ((base + lane) as u32, (base + lane + 1) as u32);
                let (c, d) = ((next + lane) as u32, (next + lane + 1) as u32);
                triangles.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }
    }

    RoadMesh {
        vertices,
        triangles,
        uvs,
        texture_tiling: 0.0,
    }
}
