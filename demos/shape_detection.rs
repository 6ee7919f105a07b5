//! Example: extracting lines and circles from a synthetic edge mask
//!
//! Draws a rectangle outline and a circle into a binary mask, sprinkles
//! clutter over it, and runs both fitters. Set `RUST_LOG=debug` to follow
//! the extraction rounds.

use edgefit::{fit_circles, fit_lines, PointSet, RansacSettings, StopReason};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: usize = 240;
const HEIGHT: usize = 180;

fn set(mask: &mut [u8], x: i32, y: i32) {
    if x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT {
        mask[y as usize * WIDTH + x as usize] = 255;
    }
}

fn synthetic_mask() -> Vec<u8> {
    let mut mask = vec![0u8; WIDTH * HEIGHT];

    // Rectangle outline.
    for x in 20..=110 {
        set(&mut mask, x, 20);
        set(&mut mask, x, 150);
    }
    for y in 20..=150 {
        set(&mut mask, 20, y);
        set(&mut mask, 110, y);
    }

    // Circle of radius 40 centered at (170, 90).
    for i in 0..720 {
        let theta = i as f64 * std::f64::consts::TAU / 720.0;
        let x = (170.0 + 40.0 * theta.cos()).round() as i32;
        let y = (90.0 + 40.0 * theta.sin()).round() as i32;
        set(&mut mask, x, y);
    }

    // Clutter.
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..250 {
        set(
            &mut mask,
            rng.gen_range(0..WIDTH as i32),
            rng.gen_range(0..HEIGHT as i32),
        );
    }
    mask
}

fn describe(reason: StopReason) -> &'static str {
    match reason {
        StopReason::RatioReached => "consumption ratio reached",
        StopReason::RoundLimit => "round limit reached",
        StopReason::Exhausted => "too few points left",
        StopReason::Stagnated => "no further primitives found",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Multi-instance Shape Extraction Example ===\n");

    let mask = synthetic_mask();
    let points = PointSet::from_mask(WIDTH, HEIGHT, &mask)?;
    println!("{} edge pixels in a {WIDTH}x{HEIGHT} mask\n", points.len());

    let line_settings = RansacSettings {
        inlier_threshold: 1.0,
        max_iterations: 300,
        consumption_ratio: 0.6,
        ..RansacSettings::default()
    };
    let lines = fit_lines(&points, Some(line_settings))?;
    println!(
        "Lines ({} found, stopped: {}):",
        lines.len(),
        describe(lines.stop_reason)
    );
    for d in lines.detections.iter().take(6) {
        println!(
            "  through ({}, {}) and ({}, {}) with {} inliers",
            d.model.a.x,
            d.model.a.y,
            d.model.b.x,
            d.model.b.y,
            d.inliers.len()
        );
    }

    let circle_settings = RansacSettings {
        inlier_threshold: 2.0,
        max_iterations: 500,
        consumption_ratio: 0.3,
        ..RansacSettings::default()
    };
    let circles = fit_circles(&points, Some(circle_settings))?;
    println!(
        "\nCircles ({} found, stopped: {}):",
        circles.len(),
        describe(circles.stop_reason)
    );
    for d in circles.detections.iter().take(3) {
        println!(
            "  center ({:.1}, {:.1}) radius {:.1} with {} inliers",
            d.model.center.x,
            d.model.center.y,
            d.model.radius,
            d.inliers.len()
        );
    }

    println!(
        "\n{} of {} points left unexplained by the line fitter",
        lines.remaining.len(),
        lines.total_points
    );

    Ok(())
}
