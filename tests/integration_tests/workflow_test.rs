use bezier_road::modules::export::svg_path::ToSvgPath;
use bezier_road::modules::placement::place_along;
use bezier_road::modules::query::{closest_anchor, closest_segment};
use bezier_road::{pt, Path};

#[test]
fn test_complete_editing_workflow() {
    // Build a path the way an editor would: click to extend, then close it
    let mut path = Path::new(pt!(0, 0));
    path.add_segment(pt!(4, 3)).unwrap();
    path.add_segment(pt!(8, 0)).unwrap();
    path.set_auto_set_control_points(true);

    // Pick the middle anchor under the cursor and drag it
    let picked = closest_anchor(&path, &pt!(4.1, 2.9), 0.5).unwrap();
    assert_eq!(picked, 6);
    path.move_point(picked, pt!(4, 5)).unwrap();

    // Split the second segment where the cursor hovers
    let hovered = path.segment(1).unwrap().point_at(0.5);
    let segment = closest_segment(&path, &hovered, 0.5).unwrap();
    assert_eq!(segment, 1);
    path.split_segment(hovered, segment).unwrap();
    assert_eq!(path.num_segments(), 4);

    path.set_closed(true);
    assert!(path.validate().is_ok());
    assert!(path.to_svg_path().ends_with(" Z"));

    // Place objects along the finished loop
    let placements = place_along(&path, 0.5, 1.0).unwrap();
    assert_eq!(placements[0].position, path.point_at(0).unwrap());
    // Spacing is measured along the curve, so chords are never longer
    for pair in placements.windows(2) {
        let chord = (pair[1].position - pair[0].position).norm();
        assert!(chord > 0.25 && chord <= 0.5 + 1e-6, "chord {chord}");
    }
}

#[test]
fn test_host_snapshot_restores_state() {
    // The host clones the path before a mutating call and restores it on undo
    let mut path = Path::new(pt!(0, 0));
    path.add_segment(pt!(5, 0)).unwrap();
    let snapshot = path.clone();

    path.delete_segment(3).unwrap();
    assert_ne!(path, snapshot);

    path = snapshot.clone();
    assert_eq!(path.num_points(), 7);
    assert_eq!(path, snapshot);
}
