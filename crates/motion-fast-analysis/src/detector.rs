use motion_fast_types::{BoundingBox, FrameResult, PixelFrame};

use crate::bounding_box::find_bounding_box;
use crate::config::{MotionDetectorConfig, Prefilter};
use crate::motion_mask::motion_mask;
use crate::smooth::{average_smooth, median_smooth};

/// Output of one two-frame detection pass.
#[derive(Debug)]
pub struct MotionReport {
    /// Single-channel 0/1 mask at the input resolution.
    pub mask: PixelFrame,
    /// Box around the dominant moving region, or `None` when no connected
    /// region cleared the activity threshold this pass.
    pub region: Option<BoundingBox>,
}

/// High-level two-frame motion detector.
///
/// Bundles the mask, prefilter, and segmentation configuration and remembers
/// the most recent successful box so a host can fall back to it on frames
/// where no region is found. The fallback decision stays with the caller:
/// `detect` reports `None` rather than substituting the cached box.
pub struct MotionDetector {
    config: MotionDetectorConfig,
    previous_region: Option<BoundingBox>,
}

impl MotionDetector {
    pub fn new(config: MotionDetectorConfig) -> Self {
        Self {
            config,
            previous_region: None,
        }
    }

    pub fn config(&self) -> &MotionDetectorConfig {
        &self.config
    }

    /// Box from the most recent pass that found a region.
    pub fn previous_region(&self) -> Option<BoundingBox> {
        self.previous_region
    }

    pub fn detect(&mut self, prev: &PixelFrame, cur: &PixelFrame) -> FrameResult<MotionReport> {
        let mut mask = motion_mask(prev, cur, &self.config.mask)?;

        match self.config.prefilter {
            Prefilter::None => {}
            Prefilter::Average => average_smooth(&mut mask)?,
            Prefilter::Median => median_smooth(&mut mask)?,
        }

        let region = find_bounding_box(&mask, &self.config.grid)?;
        if region.is_some() {
            self.previous_region = region;
        }

        Ok(MotionReport { mask, region })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridSegmentationConfig, MotionMaskConfig};

    fn test_config() -> MotionDetectorConfig {
        MotionDetectorConfig {
            mask: MotionMaskConfig {
                working_width: 40,
                working_height: 40,
                ..MotionMaskConfig::default()
            },
            grid: GridSegmentationConfig {
                cell_width: 4,
                cell_height: 4,
                activity_threshold: 4,
            },
            prefilter: Prefilter::None,
        }
    }

    fn frame_with_block(value: u8, x0: usize, y0: usize, size: usize) -> PixelFrame {
        let mut frame = PixelFrame::from_owned(40, 40, 1, vec![10u8; 1600]).unwrap();
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                frame.set(x, y, 0, value);
            }
        }
        frame
    }

    #[test]
    fn a_moved_block_yields_a_region_near_the_block() {
        let prev = frame_with_block(200, 8, 8, 12);
        let cur = frame_with_block(200, 16, 16, 12);
        let mut detector = MotionDetector::new(test_config());
        let report = detector.detect(&prev, &cur).unwrap();
        let region = report.region.expect("moving block should be detected");
        // The changed area spans roughly (8, 8)..(28, 28); the box must
        // land inside the frame and overlap it.
        assert!(region.top_left.x < 28 && region.top_left.y < 28);
        assert!(region.bottom_right.x >= 8 && region.bottom_right.y >= 8);
        assert_eq!(detector.previous_region(), Some(region));
    }

    #[test]
    fn a_static_scene_reports_none_but_keeps_the_cached_box() {
        let prev = frame_with_block(200, 8, 8, 12);
        let cur = frame_with_block(200, 16, 16, 12);
        let mut detector = MotionDetector::new(test_config());
        let first = detector.detect(&prev, &cur).unwrap();
        let cached = first.region.unwrap();

        let still = detector.detect(&cur, &cur).unwrap();
        assert!(still.region.is_none());
        assert_eq!(detector.previous_region(), Some(cached));
    }

    #[test]
    fn prefilters_run_on_the_mask() {
        let prev = frame_with_block(200, 8, 8, 12);
        let cur = frame_with_block(200, 16, 16, 12);
        for prefilter in [Prefilter::Average, Prefilter::Median] {
            let mut detector = MotionDetector::new(MotionDetectorConfig {
                prefilter,
                ..test_config()
            });
            // The block move is large enough to survive either filter.
            let report = detector.detect(&prev, &cur).unwrap();
            assert!(report.region.is_some());
        }
    }
}
