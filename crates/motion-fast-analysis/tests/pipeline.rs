use motion_fast_analysis::{
    find_bounding_box, motion_mask, GridSegmentationConfig, MotionDetector, MotionDetectorConfig,
    MotionMaskConfig, PixelFrame, Prefilter,
};

const WIDTH: usize = 120;
const HEIGHT: usize = 80;

fn scene_config() -> MotionDetectorConfig {
    MotionDetectorConfig {
        mask: MotionMaskConfig {
            working_width: 60,
            working_height: 40,
            ..MotionMaskConfig::default()
        },
        grid: GridSegmentationConfig {
            cell_width: 10,
            cell_height: 10,
            activity_threshold: 5,
        },
        prefilter: Prefilter::None,
    }
}

/// Flat backdrop with a bright square whose top-left corner sits at (x0, y0).
fn scene_frame(x0: usize, y0: usize) -> PixelFrame {
    let mut frame = PixelFrame::from_owned(WIDTH, HEIGHT, 3, vec![30u8; WIDTH * HEIGHT * 3]).unwrap();
    for y in y0..y0 + 30 {
        for x in x0..x0 + 30 {
            for c in 0..3 {
                frame.set(x, y, c, 200);
            }
        }
    }
    frame
}

#[test]
fn a_drifting_square_is_tracked_across_a_frame_sequence() {
    let mut detector = MotionDetector::new(scene_config());
    let positions = [(20, 20), (32, 26), (44, 32)];

    let mut prev = scene_frame(positions[0].0, positions[0].1);
    for &(x0, y0) in &positions[1..] {
        let cur = scene_frame(x0, y0);
        let report = detector.detect(&prev, &cur).unwrap();
        let region = report.region.expect("a drifting square should be found");

        // The changed area is the symmetric difference of the two square
        // positions; the box must land inside its pixel extent.
        assert!(region.top_left.x >= x0.saturating_sub(30));
        assert!(region.top_left.y >= y0.saturating_sub(30));
        assert!(region.bottom_right.x <= x0 + 40);
        assert!(region.bottom_right.y <= y0 + 40);
        assert!(region.center.x > region.top_left.x || region.width() == 0);

        prev = cur;
    }
}

#[test]
fn a_still_sequence_reports_none_and_retains_the_last_box() {
    let mut detector = MotionDetector::new(scene_config());
    let a = scene_frame(20, 20);
    let b = scene_frame(40, 30);

    let moving = detector.detect(&a, &b).unwrap();
    let cached = moving.region.expect("motion pass should find a region");

    for _ in 0..3 {
        let still = detector.detect(&b, &b).unwrap();
        assert!(still.region.is_none());
        assert!(still.mask.data().iter().all(|&v| v == 0));
        assert_eq!(detector.previous_region(), Some(cached));
    }
}

#[test]
fn the_standalone_stages_compose_like_the_detector() {
    let config = scene_config();
    let a = scene_frame(20, 20);
    let b = scene_frame(40, 30);

    let mask = motion_mask(&a, &b, &config.mask).unwrap();
    let by_hand = find_bounding_box(&mask, &config.grid).unwrap();

    let mut detector = MotionDetector::new(config);
    let report = detector.detect(&a, &b).unwrap();

    assert_eq!(report.mask.data(), mask.data());
    assert_eq!(report.region, by_hand);
}

#[test]
fn mismatched_frame_pairs_are_rejected_end_to_end() {
    let mut detector = MotionDetector::new(scene_config());
    let a = scene_frame(20, 20);
    let odd = PixelFrame::zeroed(WIDTH, HEIGHT, 1).unwrap();
    assert!(detector.detect(&a, &odd).is_err());
}
