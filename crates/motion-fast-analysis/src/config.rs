use crate::morphology::DEFAULT_ERODE_SUPPORT;

pub const DEFAULT_WORKING_WIDTH: usize = 600;
pub const DEFAULT_WORKING_HEIGHT: usize = 400;
pub const DEFAULT_DIFF_THRESHOLD: u8 = 30;
pub const DEFAULT_CELL_WIDTH: usize = 20;
pub const DEFAULT_CELL_HEIGHT: usize = 20;
pub const DEFAULT_ACTIVITY_THRESHOLD: u64 = 5;

/// Tuning for the two-frame motion mask stage.
///
/// The working resolution bounds the per-call cost regardless of the input
/// resolution; it is the pipeline's only latency control.
#[derive(Clone, Debug)]
pub struct MotionMaskConfig {
    pub working_width: usize,
    pub working_height: usize,
    pub diff_threshold: u8,
    pub erode_support: u64,
}

impl Default for MotionMaskConfig {
    fn default() -> Self {
        Self {
            working_width: DEFAULT_WORKING_WIDTH,
            working_height: DEFAULT_WORKING_HEIGHT,
            diff_threshold: DEFAULT_DIFF_THRESHOLD,
            erode_support: DEFAULT_ERODE_SUPPORT,
        }
    }
}

/// Tuning for grid aggregation and segment extraction.
#[derive(Clone, Debug)]
pub struct GridSegmentationConfig {
    pub cell_width: usize,
    pub cell_height: usize,
    pub activity_threshold: u64,
}

impl Default for GridSegmentationConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            activity_threshold: DEFAULT_ACTIVITY_THRESHOLD,
        }
    }
}

/// Optional single-channel filter applied to the mask before bounding-box
/// extraction, as an alternative or complement to the morphological pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Prefilter {
    #[default]
    None,
    Average,
    Median,
}

#[derive(Clone, Debug, Default)]
pub struct MotionDetectorConfig {
    pub mask: MotionMaskConfig,
    pub grid: GridSegmentationConfig,
    pub prefilter: Prefilter,
}
