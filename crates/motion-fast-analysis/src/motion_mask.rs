use motion_fast_types::{FrameError, FrameResult, PixelFrame};

use crate::config::MotionMaskConfig;
use crate::morphology::{dilate, erode};
use crate::resample::resize;

/// Computes a binary motion mask between two frames of identical geometry.
///
/// Both frames are downsampled to the working resolution, differenced per
/// pixel (foreground when any channel moved by at least `diff_threshold`),
/// denoised with an erode/dilate pass, and the single-channel 0/1 mask is
/// upsampled back to the input resolution. Inputs are read-only; the mask is
/// a new caller-owned buffer.
pub fn motion_mask(
    prev: &PixelFrame,
    cur: &PixelFrame,
    config: &MotionMaskConfig,
) -> FrameResult<PixelFrame> {
    if !prev.same_shape(cur) {
        return Err(FrameError::invalid_argument(format!(
            "frame pair mismatch: {}x{}x{} vs {}x{}x{}",
            prev.width(),
            prev.height(),
            prev.channels(),
            cur.width(),
            cur.height(),
            cur.channels()
        )));
    }

    let working_w = config.working_width;
    let working_h = config.working_height;
    let prev_small = resize(prev, working_w, working_h)?;
    let cur_small = resize(cur, working_w, working_h)?;

    let channels = prev.channels();
    let mut mask = PixelFrame::zeroed(working_w, working_h, 1)?;
    for idx in 0..working_w * working_h {
        let base = idx * channels;
        let moved = (0..channels).any(|c| {
            let a = prev_small.data()[base + c];
            let b = cur_small.data()[base + c];
            a.abs_diff(b) >= config.diff_threshold
        });
        if moved {
            mask.data_mut()[idx] = 1;
        }
    }

    erode(&mut mask, config.erode_support)?;
    dilate(&mut mask)?;

    resize(&mask, prev.width(), prev.height())
}
