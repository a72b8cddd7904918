use motion_fast_types::{try_zeroed_vec, FrameResult, PixelFrame};

/// Per-channel 2D prefix sums over a frame.
///
/// Cell `(x, y, c)` holds the sum of every source value with row `<= y` and
/// column `<= x`, which makes any rectangle sum a four-corner lookup. Cells
/// are `u64` so a full-resolution 8-bit frame cannot overflow the
/// accumulator.
pub struct IntegralImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u64>,
}

pub fn build_integral_image(src: &PixelFrame) -> FrameResult<IntegralImage> {
    let (width, height, channels) = (src.width(), src.height(), src.channels());
    let mut data = try_zeroed_vec::<u64>(width * height * channels)?;

    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let idx = channels * (y * width + x) + c;
                let above = if y > 0 {
                    data[idx - channels * width]
                } else {
                    0
                };
                let left = if x > 0 { data[idx - channels] } else { 0 };
                let above_left = if x > 0 && y > 0 {
                    data[idx - channels * (width + 1)]
                } else {
                    0
                };
                data[idx] = src.data()[idx] as u64 + above + left - above_left;
            }
        }
    }

    Ok(IntegralImage {
        width,
        height,
        channels,
        data,
    })
}

impl IntegralImage {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Cumulative sum at `(x, y)`; coordinates left of or above the image
    /// contribute zero so corner lookups need no special-casing.
    #[inline]
    fn at(&self, x: isize, y: isize, channel: usize) -> u64 {
        if x < 0 || y < 0 {
            return 0;
        }
        let (x, y) = (x as usize, y as usize);
        debug_assert!(x < self.width && y < self.height);
        self.data[self.channels * (y * self.width + x) + channel]
    }

    /// Sum over the inclusive rectangle `[x0, x1] x [y0, y1]` in one channel.
    #[inline]
    pub fn rect_sum(&self, x0: usize, y0: usize, x1: usize, y1: usize, channel: usize) -> u64 {
        debug_assert!(x0 <= x1 && y0 <= y1);
        debug_assert!(x1 < self.width && y1 < self.height);
        let (x0, y0, x1, y1) = (x0 as isize, y0 as isize, x1 as isize, y1 as isize);
        let d = self.at(x1, y1, channel);
        let b = self.at(x1, y0 - 1, channel);
        let c = self.at(x0 - 1, y1, channel);
        let a = self.at(x0 - 1, y0 - 1, channel);
        d + a - b - c
    }

    /// Total per-channel sum of the source frame.
    pub fn total(&self, channel: usize) -> u64 {
        self.at(self.width as isize - 1, self.height as isize - 1, channel)
    }
}
