use motion_fast_types::{try_zeroed_vec, FrameError, FrameResult, PixelFrame};

const SMOOTH_RADIUS: usize = 1;

fn require_single_channel(frame: &PixelFrame) -> FrameResult<()> {
    if frame.channels() != 1 {
        return Err(FrameError::invalid_argument(format!(
            "smoothing expects a single-channel frame, got {} channels",
            frame.channels()
        )));
    }
    Ok(())
}

#[inline]
fn clamped(coord: isize, max: usize) -> usize {
    coord.clamp(0, max as isize - 1) as usize
}

/// 3x3 box blur with clamped border sampling, reading from a snapshot of
/// the input so already-smoothed pixels do not feed later averages.
pub fn average_smooth(frame: &mut PixelFrame) -> FrameResult<()> {
    require_single_channel(frame)?;
    let (width, height) = (frame.width(), frame.height());
    let mut snapshot = try_zeroed_vec::<u8>(frame.data().len())?;
    snapshot.copy_from_slice(frame.data());

    let r = SMOOTH_RADIUS as isize;
    let window = (2 * SMOOTH_RADIUS + 1) * (2 * SMOOTH_RADIUS + 1);
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for dy in -r..=r {
                for dx in -r..=r {
                    let sx = clamped(x as isize + dx, width);
                    let sy = clamped(y as isize + dy, height);
                    sum += snapshot[sy * width + sx] as u32;
                }
            }
            frame.set(x, y, 0, (sum / window as u32) as u8);
        }
    }

    Ok(())
}

/// 3x3 median filter with clamped border sampling; removes salt noise
/// without softening edges the way the box blur does.
pub fn median_smooth(frame: &mut PixelFrame) -> FrameResult<()> {
    require_single_channel(frame)?;
    let (width, height) = (frame.width(), frame.height());
    let mut snapshot = try_zeroed_vec::<u8>(frame.data().len())?;
    snapshot.copy_from_slice(frame.data());

    let r = SMOOTH_RADIUS as isize;
    let mut window = [0u8; (2 * SMOOTH_RADIUS + 1) * (2 * SMOOTH_RADIUS + 1)];
    for y in 0..height {
        for x in 0..width {
            let mut count = 0;
            for dy in -r..=r {
                for dx in -r..=r {
                    let sx = clamped(x as isize + dx, width);
                    let sy = clamped(y as isize + dy, height);
                    window[count] = snapshot[sy * width + sx];
                    count += 1;
                }
            }
            window.sort_unstable();
            frame.set(x, y, 0, window[window.len() / 2]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_frame_is_a_fixed_point_of_both_filters() {
        let mut avg = PixelFrame::from_owned(5, 4, 1, vec![90u8; 20]).unwrap();
        average_smooth(&mut avg).unwrap();
        assert!(avg.data().iter().all(|&v| v == 90));

        let mut med = PixelFrame::from_owned(5, 4, 1, vec![90u8; 20]).unwrap();
        median_smooth(&mut med).unwrap();
        assert!(med.data().iter().all(|&v| v == 90));
    }

    #[test]
    fn median_removes_salt_noise() {
        let mut frame = PixelFrame::zeroed(5, 5, 1).unwrap();
        frame.set(2, 2, 0, 255);
        median_smooth(&mut frame).unwrap();
        assert!(frame.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn average_spreads_a_spike() {
        let mut frame = PixelFrame::zeroed(5, 5, 1).unwrap();
        frame.set(2, 2, 0, 90);
        average_smooth(&mut frame).unwrap();
        assert_eq!(frame.get(2, 2, 0), 10);
        assert_eq!(frame.get(1, 1, 0), 10);
        assert_eq!(frame.get(0, 0, 0), 0);
    }

    #[test]
    fn multichannel_input_is_rejected() {
        let mut frame = PixelFrame::zeroed(4, 4, 3).unwrap();
        assert!(average_smooth(&mut frame).is_err());
        assert!(median_smooth(&mut frame).is_err());
    }
}
