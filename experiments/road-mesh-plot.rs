// Build a jittered road, extrude an edged ribbon with a twist and plot the
// triangles over the resampled centre line.
//
// RUST_LOG=debug cargo run --bin road-mesh-plot

use bezier_road::modules::road::{update_mesh, RoadProfile, RoadSettings};
use bezier_road::{pt, Path};
use log::info;
use nalgebra::{UnitQuaternion, Vector3};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const OUTPUT: &str = "road-mesh-plot.svg";
const ANCHORS: usize = 6;
const SEED: u64 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let jitter = Normal::new(0.0, 2.0)?;

    let mut path = Path::new(pt!(0, 0));
    path.set_auto_set_control_points(true);
    for i in 1..ANCHORS {
        path.add_segment(pt!(i as f64 * 5.0, jitter.sample(&mut rng)))?;
    }
    // Bank the road towards the middle anchor
    path.rotate_point(
        (ANCHORS / 2) * 3,
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.6),
    )?;

    let settings = RoadSettings {
        width: 1.5,
        spacing: 0.5,
        profile: RoadProfile::Edged {
            edge_width: 0.15,
            depth: 0.2,
        },
        ..RoadSettings::default()
    };
    let centre_line = path.calculate_evenly_spaced_points(settings.spacing, settings.resolution)?;
    let mesh = update_mesh(&path, &settings);
    info!(
        "{} resampled points, {} vertices, {} triangles",
        centre_line.len(),
        mesh.vertices.len(),
        mesh.triangle_count()
    );

    let (min_x, max_x) = bounds(mesh.vertices.iter().map(|v| v.x));
    let (min_y, max_y) = bounds(mesh.vertices.iter().map(|v| v.y));

    let root = SVGBackend::new(OUTPUT, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Road ribbon", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min_x - 1.0..max_x + 1.0, min_y - 1.0..max_y + 1.0)?;
    chart.configure_mesh().draw()?;

    for triangle in mesh.triangles.chunks_exact(3) {
        let corners: Vec<(f64, f64)> = [triangle[0], triangle[1], triangle[2], triangle[0]]
            .iter()
            .map(|&i| {
                let v = mesh.vertices[i as usize];
                (v.x, v.y)
            })
            .collect();
        chart.draw_series(std::iter::once(PathElement::new(corners, BLUE.mix(0.4))))?;
    }
    chart.draw_series(
        centre_line
            .iter()
            .map(|p| Circle::new((p.x, p.y), 2, RED.filled())),
    )?;
    root.present()?;

    let summary = serde_json::json!({
        "output": OUTPUT,
        "segments": path.num_segments(),
        "resampled_points": centre_line.len(),
        "vertices": mesh.vertices.len(),
        "triangles": mesh.triangle_count(),
        "texture_tiling": mesh.texture_tiling,
        "settings": settings,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
