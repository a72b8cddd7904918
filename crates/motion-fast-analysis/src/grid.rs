use motion_fast_types::{try_zeroed_vec, FrameError, FrameResult, PixelFrame};

use crate::integral::build_integral_image;

/// Per-cell sums of a frame partitioned into fixed-size cells.
///
/// The grid is `ceil(width / cell_width)` by `ceil(height / cell_height)`;
/// cells on the far edges may cover a smaller pixel rectangle when the cell
/// size does not evenly tile the frame, and their sums reflect only that
/// actual extent.
pub struct GridSums {
    grid_width: usize,
    grid_height: usize,
    channels: usize,
    cell_width: usize,
    cell_height: usize,
    sums: Vec<u64>,
}

pub fn aggregate_grid(
    frame: &PixelFrame,
    cell_width: usize,
    cell_height: usize,
) -> FrameResult<GridSums> {
    if cell_width == 0 || cell_height == 0 {
        return Err(FrameError::invalid_argument(format!(
            "grid cell size must be positive, got {cell_width}x{cell_height}"
        )));
    }

    let grid_width = frame.width().div_ceil(cell_width);
    let grid_height = frame.height().div_ceil(cell_height);
    let channels = frame.channels();

    let integral = build_integral_image(frame)?;
    let mut sums = try_zeroed_vec::<u64>(grid_width * grid_height * channels)?;

    for gy in 0..grid_height {
        let y0 = gy * cell_height;
        let y1 = (y0 + cell_height - 1).min(frame.height() - 1);
        for gx in 0..grid_width {
            let x0 = gx * cell_width;
            let x1 = (x0 + cell_width - 1).min(frame.width() - 1);
            for c in 0..channels {
                sums[channels * (gy * grid_width + gx) + c] =
                    integral.rect_sum(x0, y0, x1, y1, c);
            }
        }
    }

    Ok(GridSums {
        grid_width,
        grid_height,
        channels,
        cell_width,
        cell_height,
        sums,
    })
}

impl GridSums {
    pub fn grid_width(&self) -> usize {
        self.grid_width
    }

    pub fn grid_height(&self) -> usize {
        self.grid_height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    #[inline]
    pub fn sum(&self, gx: usize, gy: usize, channel: usize) -> u64 {
        self.sums[self.channels * (gy * self.grid_width + gx) + channel]
    }
}
