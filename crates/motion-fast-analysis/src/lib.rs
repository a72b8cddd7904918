//! Two-frame motion analysis for the motion-fast workspace.
//!
//! The pipeline resamples a frame pair to a bounded working resolution,
//! thresholds the per-pixel difference into a binary mask, denoises it
//! morphologically, and boxes the dominant connected region of activity via
//! grid aggregation and union-find segmentation. Everything is synchronous
//! and allocation-explicit: inputs are borrowed, outputs are new
//! caller-owned buffers, and "no region" is a first-class `Ok(None)`.

mod bounding_box;
mod config;
mod detector;
mod grid;
mod integral;
mod morphology;
mod motion_mask;
mod resample;
mod segment;
mod smooth;

pub use bounding_box::{find_bounding_box, segment_bounding_box};
pub use config::{
    GridSegmentationConfig, MotionDetectorConfig, MotionMaskConfig, Prefilter,
    DEFAULT_ACTIVITY_THRESHOLD, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_DIFF_THRESHOLD,
    DEFAULT_WORKING_HEIGHT, DEFAULT_WORKING_WIDTH,
};
pub use detector::{MotionDetector, MotionReport};
pub use grid::{aggregate_grid, GridSums};
pub use integral::{build_integral_image, IntegralImage};
pub use morphology::{dilate, erode, DEFAULT_ERODE_SUPPORT};
pub use motion_mask::motion_mask;
pub use resample::resize;
pub use segment::{dominant_segment, segment_grid, CellCoord, Segment};
pub use smooth::{average_smooth, median_smooth};

pub use motion_fast_types::{BoundingBox, FrameError, FrameResult, PixelFrame, Point};
