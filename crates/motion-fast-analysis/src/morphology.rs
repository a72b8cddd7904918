use motion_fast_types::{try_zeroed_vec, FrameResult, PixelFrame};

use crate::integral::build_integral_image;

pub const DEFAULT_ERODE_SUPPORT: u64 = 1;

/// Erodes foreground in place using a neighbor-density test.
///
/// For every non-border pixel with a non-zero channel value, the 3x3
/// neighborhood sum is taken from a precomputed integral image and the
/// pixel's own value subtracted out; when the remaining support falls below
/// `threshold` the pixel is cleared in that channel. The outermost row and
/// column are never modified, so neighborhood queries never leave the frame.
pub fn erode(frame: &mut PixelFrame, threshold: u64) -> FrameResult<()> {
    let (width, height, channels) = (frame.width(), frame.height(), frame.channels());
    if width < 3 || height < 3 {
        return Ok(());
    }

    let integral = build_integral_image(frame)?;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for c in 0..channels {
                let value = frame.get(x, y, c);
                if value == 0 {
                    continue;
                }
                let neighborhood = integral.rect_sum(x - 1, y - 1, x + 1, y + 1, c);
                if neighborhood - (value as u64) < threshold {
                    frame.set(x, y, c, 0);
                }
            }
        }
    }

    Ok(())
}

/// Grows foreground in place by spreading every non-border, non-zero pixel
/// into its 3x3 neighborhood.
///
/// Reads from a snapshot of the pre-dilation frame so a value written in
/// this pass cannot cascade into further writes. Writes are confined to the
/// interior; the outermost row and column stay untouched, matching the
/// erosion boundary policy.
pub fn dilate(frame: &mut PixelFrame) -> FrameResult<()> {
    let (width, height, channels) = (frame.width(), frame.height(), frame.channels());
    if width < 3 || height < 3 {
        return Ok(());
    }

    let mut snapshot = try_zeroed_vec::<u8>(frame.data().len())?;
    snapshot.copy_from_slice(frame.data());

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for c in 0..channels {
                let value = snapshot[channels * (y * width + x) + c];
                if value == 0 {
                    continue;
                }
                for ny in y - 1..=y + 1 {
                    for nx in x - 1..=x + 1 {
                        if nx == 0 || ny == 0 || nx == width - 1 || ny == height - 1 {
                            continue;
                        }
                        frame.set(nx, ny, c, value);
                    }
                }
            }
        }
    }

    Ok(())
}
