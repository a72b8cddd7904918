//! Renders a synthetic two-frame scene, runs the detector, and writes the
//! motion mask plus a box overlay as PNGs into the working directory.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example demo-png
//! ```

use image::{GrayImage, Rgb, RgbImage};
use motion_fast_analysis::{
    GridSegmentationConfig, MotionDetector, MotionDetectorConfig, MotionMaskConfig, PixelFrame,
    Prefilter,
};

const WIDTH: usize = 320;
const HEIGHT: usize = 240;

/// Checkerboard backdrop, per-pixel speckle, and a bright square at (x0, y0).
///
/// The speckle stays under the difference threshold; the square is the only
/// thing the detector should report.
fn scene_frame(x0: usize, y0: usize, seed: u32) -> PixelFrame {
    let mut frame = PixelFrame::zeroed(WIDTH, HEIGHT, 3).unwrap();
    let mut state = seed;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let speckle = (state >> 28) as u8;
            let base = if (x / 16 + y / 16) % 2 == 0 { 90 } else { 110 };
            for c in 0..3 {
                frame.set(x, y, c, base + speckle);
            }
        }
    }
    for y in y0..(y0 + 48).min(HEIGHT) {
        for x in x0..(x0 + 48).min(WIDTH) {
            frame.set(x, y, 0, 230);
            frame.set(x, y, 1, 190);
            frame.set(x, y, 2, 60);
        }
    }
    frame
}

fn save_mask(mask: &PixelFrame, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = GrayImage::new(mask.width() as u32, mask.height() as u32);
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let v = if mask.get(x, y, 0) > 0 { 255 } else { 0 };
            out.put_pixel(x as u32, y as u32, image::Luma([v]));
        }
    }
    out.save(path)?;
    Ok(())
}

fn save_overlay(
    frame: &PixelFrame,
    region: Option<&motion_fast_analysis::BoundingBox>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = RgbImage::new(frame.width() as u32, frame.height() as u32);
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let px = Rgb([frame.get(x, y, 0), frame.get(x, y, 1), frame.get(x, y, 2)]);
            out.put_pixel(x as u32, y as u32, px);
        }
    }
    if let Some(b) = region {
        let x1 = b.bottom_right.x.min(frame.width() - 1);
        let y1 = b.bottom_right.y.min(frame.height() - 1);
        for x in b.top_left.x..=x1 {
            out.put_pixel(x as u32, b.top_left.y as u32, Rgb([255, 0, 0]));
            out.put_pixel(x as u32, y1 as u32, Rgb([255, 0, 0]));
        }
        for y in b.top_left.y..=y1 {
            out.put_pixel(b.top_left.x as u32, y as u32, Rgb([255, 0, 0]));
            out.put_pixel(x1 as u32, y as u32, Rgb([255, 0, 0]));
        }
    }
    out.save(path)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let prev = scene_frame(60, 80, 1);
    let cur = scene_frame(140, 100, 2);

    let mut detector = MotionDetector::new(MotionDetectorConfig {
        mask: MotionMaskConfig {
            working_width: 160,
            working_height: 120,
            ..MotionMaskConfig::default()
        },
        grid: GridSegmentationConfig {
            cell_width: 10,
            cell_height: 10,
            activity_threshold: 5,
        },
        prefilter: Prefilter::None,
    });

    let report = detector.detect(&prev, &cur)?;
    match &report.region {
        Some(b) => println!(
            "motion region: ({}, {})..({}, {}), center ({}, {})",
            b.top_left.x, b.top_left.y, b.bottom_right.x, b.bottom_right.y, b.center.x, b.center.y
        ),
        None => println!("no motion region found"),
    }

    save_mask(&report.mask, "demo-mask.png")?;
    save_overlay(&cur, report.region.as_ref(), "demo-overlay.png")?;
    println!("wrote demo-mask.png and demo-overlay.png");
    Ok(())
}
