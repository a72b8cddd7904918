use motion_fast_types::{FrameError, FrameResult, PixelFrame};

/// Nearest-neighbor resample to a new resolution.
///
/// Each destination pixel copies the source pixel at the rounded back-mapped
/// coordinate. No interpolation happens, so upscaling is blocky and
/// downscaling aliases; that is the accepted cost of keeping the hot path
/// cheap. Sampled coordinates are clamped to the source extent because the
/// rounding can land exactly on `src_dim` for the last row or column.
pub fn resize(src: &PixelFrame, dst_width: usize, dst_height: usize) -> FrameResult<PixelFrame> {
    if dst_width == 0 || dst_height == 0 {
        return Err(FrameError::invalid_argument(format!(
            "resize target must be positive, got {dst_width}x{dst_height}"
        )));
    }

    let channels = src.channels();
    let mut dst = PixelFrame::zeroed(dst_width, dst_height, channels)?;

    let x_ratio = src.width() as f64 / dst_width as f64;
    let y_ratio = src.height() as f64 / dst_height as f64;

    for j in 0..dst_height {
        let src_y = ((j as f64 * y_ratio).round() as usize).min(src.height() - 1);
        for i in 0..dst_width {
            let src_x = ((i as f64 * x_ratio).round() as usize).min(src.width() - 1);
            let src_off = src.offset(src_x, src_y, 0);
            let dst_off = dst.offset(i, j, 0);
            let pixel = &src.data()[src_off..src_off + channels];
            dst.data_mut()[dst_off..dst_off + channels].copy_from_slice(pixel);
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_frame(width: usize, height: usize, channels: usize) -> PixelFrame {
        let mut data = Vec::with_capacity(width * height * channels);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push((x * 7 + y * 31 + c * 13) as u8);
                }
            }
        }
        PixelFrame::from_owned(width, height, channels, data).unwrap()
    }

    #[test]
    fn identity_resize_copies_the_buffer() {
        let src = gradient_frame(8, 5, 3);
        let dst = resize(&src, 8, 5).unwrap();
        assert_eq!(dst.data(), src.data());
    }

    #[test]
    fn upscale_clamps_the_back_mapped_coordinate() {
        // 3 -> 6 maps the last destination row to round(5 * 0.5) = 3, one past
        // the source extent; the clamp must pull it back to row 2.
        let src = gradient_frame(3, 3, 1);
        let dst = resize(&src, 6, 6).unwrap();
        assert_eq!(dst.get(5, 5, 0), src.get(2, 2, 0));
    }

    #[test]
    fn downscale_samples_nearest_source_pixels() {
        let src = gradient_frame(6, 4, 1);
        let dst = resize(&src, 3, 2).unwrap();
        assert_eq!(dst.get(0, 0, 0), src.get(0, 0, 0));
        assert_eq!(dst.get(2, 1, 0), src.get(4, 2, 0));
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = gradient_frame(4, 4, 1);
        assert!(resize(&src, 0, 4).is_err());
        assert!(resize(&src, 4, 0).is_err());
    }
}
