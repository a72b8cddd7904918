//! Shared domain models for the motion-fast workspace.
//!
//! This crate centralizes the lightweight data structures used across the
//! analysis crates: the owned pixel-frame buffer, bounding-box geometry, and
//! the error taxonomy. Keep it backend-agnostic so every crate can depend on
//! it without pulling heavy features.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub type FrameResult<T> = Result<T, FrameError>;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("allocation of {bytes} bytes failed")]
    Allocation { bytes: usize },
}

impl FrameError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Allocates a zero-filled buffer, surfacing allocation failure as an error
/// instead of aborting the process.
pub fn try_zeroed_vec<T: Copy + Default>(len: usize) -> FrameResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FrameError::Allocation {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    buf.resize(len, T::default());
    Ok(buf)
}

/// Row-major, channel-interleaved 8-bit frame buffer.
///
/// The constructor validates the geometry against the payload length, so a
/// `PixelFrame` always satisfies `data.len() == width * height * channels`.
#[derive(Clone)]
pub struct PixelFrame {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl fmt::Debug for PixelFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl PixelFrame {
    pub fn from_owned(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> FrameResult<Self> {
        let required = Self::required_len(width, height, channels)?;
        if data.len() != required {
            return Err(FrameError::invalid_argument(format!(
                "frame payload is {} bytes, geometry {}x{}x{} requires {}",
                data.len(),
                width,
                height,
                channels,
                required
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn zeroed(width: usize, height: usize, channels: usize) -> FrameResult<Self> {
        let required = Self::required_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: try_zeroed_vec(required)?,
        })
    }

    fn required_len(width: usize, height: usize, channels: usize) -> FrameResult<usize> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(FrameError::invalid_argument(format!(
                "frame dimensions must be positive, got {}x{}x{}",
                width, height, channels
            )));
        }
        width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or_else(|| FrameError::invalid_argument("frame byte length overflowed"))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Flat index of `(x, y, channel)`; panics on out-of-range coordinates.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, channel: usize) -> usize {
        assert!(
            x < self.width && y < self.height && channel < self.channels,
            "pixel ({x}, {y}, {channel}) out of range for {}x{}x{}",
            self.width,
            self.height,
            self.channels
        );
        self.channels * (y * self.width + x) + channel
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[self.offset(x, y, channel)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        let idx = self.offset(x, y, channel);
        self.data[idx] = value;
    }

    /// True when the other frame has identical geometry.
    pub fn same_shape(&self, other: &PixelFrame) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel-space rectangle around a detected region.
///
/// Built fresh per detection; carries no state between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub top_left: Point,
    pub bottom_right: Point,
    pub center: Point,
}

impl BoundingBox {
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        let center = Point::new(
            (top_left.x + bottom_right.x) / 2,
            (top_left.y + bottom_right.y) / 2,
        );
        Self {
            top_left,
            bottom_right,
            center,
        }
    }

    pub fn width(&self) -> usize {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    pub fn height(&self) -> usize {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }
}
