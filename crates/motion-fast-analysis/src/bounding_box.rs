use log::debug;
use motion_fast_types::{BoundingBox, FrameError, FrameResult, PixelFrame, Point};

use crate::config::GridSegmentationConfig;
use crate::grid::aggregate_grid;
use crate::segment::{dominant_segment, segment_grid, Segment};

/// Pixel-space box around a segment's member cells.
///
/// Cell coordinates scale by the cell size on both corners, so the right and
/// bottom edges land on the *origin* of the outermost member cells, matching
/// the original extraction behavior.
pub fn segment_bounding_box(
    segment: &Segment,
    cell_width: usize,
    cell_height: usize,
) -> BoundingBox {
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    for cell in segment.cells() {
        min_x = min_x.min(cell.x);
        max_x = max_x.max(cell.x);
        min_y = min_y.min(cell.y);
        max_y = max_y.max(cell.y);
    }
    BoundingBox::from_corners(
        Point::new(min_x * cell_width, min_y * cell_height),
        Point::new(max_x * cell_width, max_y * cell_height),
    )
}

/// Locates the dominant moving region in a single-channel mask or frame.
///
/// Aggregates the input into grid cells, clusters over-threshold cells into
/// segments, and boxes the segment with the most cells. `Ok(None)` is the
/// explicit "no region" outcome; callers that want to reuse an earlier box
/// must branch on it themselves rather than receive a zero-sized rectangle.
pub fn find_bounding_box(
    mask: &PixelFrame,
    config: &GridSegmentationConfig,
) -> FrameResult<Option<BoundingBox>> {
    if mask.channels() != 1 {
        return Err(FrameError::invalid_argument(format!(
            "bounding-box extraction expects a single-channel input, got {} channels",
            mask.channels()
        )));
    }

    let grid = aggregate_grid(mask, config.cell_width, config.cell_height)?;
    let segments = segment_grid(&grid, config.activity_threshold)?;

    let Some(segment) = dominant_segment(&segments) else {
        debug!(
            "no segments over threshold {} in {}x{} grid",
            config.activity_threshold,
            grid.grid_width(),
            grid.grid_height()
        );
        return Ok(None);
    };

    debug!(
        "{} segment(s), dominant has {} cell(s)",
        segments.len(),
        segment.len()
    );
    Ok(Some(segment_bounding_box(
        segment,
        config.cell_width,
        config.cell_height,
    )))
}
