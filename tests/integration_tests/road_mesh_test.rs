use approx::assert_abs_diff_eq;
use bezier_road::modules::road::{anchor_resample_map, update_mesh};
use bezier_road::{pt, Path, RoadProfile, RoadSettings};
use nalgebra::{UnitQuaternion, Vector3};

/// Two anchors four units apart with auto-set controls, so the curve is a straight line
fn straight_road() -> Path {
    let mut path = Path::new(pt!(0, 0));
    path.set_auto_set_control_points(true);
    path.move_point(0, pt!(0, 0)).unwrap();
    path.move_point(3, pt!(4, 0)).unwrap();
    path
}

#[test]
fn test_flat_ribbon_on_straight_path() {
    let path = straight_road();
    let mesh = update_mesh(&path, &RoadSettings::default());

    assert_eq!(mesh.vertices.len(), 10);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(mesh.triangles.len(), 24);
    assert_eq!(mesh.uvs.len(), 10);
    // round(1 * 5 * 1 * 0.05)
    assert_eq!(mesh.texture_tiling, 0.0);
}

#[test]
fn test_texture_tiling_scales_with_length() {
    let mut path = Path::new(pt!(0, 0));
    path.set_auto_set_control_points(true);
    path.move_point(0, pt!(0, 0)).unwrap();
    path.move_point(3, pt!(100, 0)).unwrap();

    let settings = RoadSettings {
        tiling: 2.0,
        ..RoadSettings::default()
    };
    let mesh = update_mesh(&path, &settings);
    // 101 points: round(2 * 101 * 1 * 0.05)
    assert_eq!(mesh.texture_tiling, 10.0);
}

#[test]
fn test_anchor_map_on_straight_path() {
    let path = straight_road();
    let points = path.calculate_evenly_spaced_points(1.0, 1.0).unwrap();
    assert_eq!(anchor_resample_map(&path, &points), vec![0, 4]);
}

#[test]
fn test_twisted_end_anchor() {
    let mut path = straight_road();
    path.rotate_point(
        3,
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::FRAC_PI_2),
    )
    .unwrap();
    assert_abs_diff_eq!(path.anchor_state(3).unwrap().angle, 90.0, epsilon = 1e-9);

    let mesh = update_mesh(&path, &RoadSettings::default());
    // Untwisted start lies flat, the twisted end stands upright
    assert_abs_diff_eq!(mesh.vertices[0], pt!(0, 0.5, 0), epsilon = 1e-6);
    assert_abs_diff_eq!(mesh.vertices[8], pt!(4, 0, 0.5), epsilon = 1e-6);
    assert_abs_diff_eq!(mesh.vertices[9], pt!(4, 0, -0.5), epsilon = 1e-6);
}

#[test]
fn test_edged_ribbon_on_closed_path() {
    let mut path = Path::new(pt!(0, 0));
    path.add_segment(pt!(0, 4)).unwrap();
    path.set_auto_set_control_points(true);
    path.set_closed(true);

    let settings = RoadSettings {
        spacing: 0.5,
        profile: RoadProfile::Edged {
            edge_width: 0.2,
            depth: 0.1,
        },
        ..RoadSettings::default()
    };
    let mesh = update_mesh(&path, &settings);
    let points = path.calculate_evenly_spaced_points(0.5, 1.0).unwrap();

    assert_eq!(mesh.vertices.len(), points.len() * 4);
    // Closed paths also bridge the last cross-section back to the first
    assert_eq!(mesh.triangle_count(), points.len() * 6);
    assert!(mesh
        .triangles
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
}
