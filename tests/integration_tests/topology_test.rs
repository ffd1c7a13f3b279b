use bezier_road::{pt, Path, PathError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

fn expected_remainder(path: &Path) -> usize {
    if path.is_closed() {
        0
    } else {
        1
    }
}

#[test]
fn test_point_count_invariant_under_random_edits() {
    let mut rng = StdRng::seed_from_u64(42);
    let jitter = Normal::new(0.0, 3.0).unwrap();

    for auto_set in [false, true] {
        let mut path = Path::new(pt!(0, 0));
        path.set_auto_set_control_points(auto_set);

        for _ in 0..300 {
            let position = pt!(jitter.sample(&mut rng), jitter.sample(&mut rng));
            match rng.gen_range(0..5) {
                0 => match path.add_segment(position) {
                    Ok(()) => {}
                    Err(err) => assert_eq!(err, PathError::ClosedPath),
                },
                1 => {
                    let segment = rng.gen_range(0..path.num_segments());
                    path.split_segment(position, segment).unwrap();
                }
                2 => {
                    let anchor = rng.gen_range(0..path.num_anchors()) * 3;
                    let segments = path.num_segments();
                    let deleted = path.delete_segment(anchor).unwrap();
                    let minimum = if path.is_closed() { 2 } else { 1 };
                    assert_eq!(deleted, segments > minimum);
                }
                3 => path.toggle_closed(),
                _ => {
                    let index = rng.gen_range(0..path.num_points());
                    path.move_point(index, position).unwrap();
                }
            }

            assert_eq!(path.num_points() % 3, expected_remainder(&path));
            assert!(path.num_segments() >= if path.is_closed() { 2 } else { 1 });
            assert!(path.validate().is_ok());
            assert!(path.points().iter().all(|p| p.iter().all(|c| c.is_finite())));
        }
    }
}

#[test]
fn test_toggle_closed_twice_restores_points() {
    let mut path = Path::new(pt!(1, 2));
    path.add_segment(pt!(4, 0)).unwrap();
    path.add_segment(pt!(6, 6)).unwrap();
    path.split_segment(pt!(2, -1), 0).unwrap();
    let original = path.points().to_vec();

    path.toggle_closed();
    path.toggle_closed();

    assert!(!path.is_closed());
    assert_eq!(path.points(), original.as_slice());
}

#[test]
fn test_anchor_states_follow_anchors() {
    let mut path = Path::new(pt!(0, 0));
    for x in [3, 6, 9] {
        path.add_segment(pt!(x, 0)).unwrap();
    }
    assert_eq!(path.num_anchors(), 5);

    path.split_segment(pt!(4, 1), 1).unwrap();
    assert_eq!(path.num_anchors(), 6);

    path.set_closed(true);
    assert_eq!(path.num_anchors(), 6);
    path.delete_segment(0).unwrap();
    assert_eq!(path.num_anchors(), 5);
    assert_eq!(path.anchor_positions().count(), path.num_anchors());
}

#[test]
fn test_index_errors() {
    let mut path = Path::new(pt!(0, 0));
    assert_eq!(
        path.move_point(4, pt!(0, 0)),
        Err(PathError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(path.anchor_state(2).unwrap_err(), PathError::NotAnAnchor(2));
    assert!(path.segment_points(1).is_err());
}
