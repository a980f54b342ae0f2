//! Pixel sink contract and the contiguous buffer that implements it.

use crate::error::{RenderError, Result};

/// Writable pixel grid owned by the caller.
///
/// The renderer only calls `set` with `x < width()` and `y < height()`;
/// implementations validate their dimensions at construction.
pub trait FrameBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Row pitch in pixels, at least `width()`.
    fn stride(&self) -> usize;
    fn set(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8);
}

/// Packs a color as ARGB32 (`a << 24 | r << 16 | g << 8 | b`).
pub const fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub const fn unpack_argb(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
        (pixel >> 24) as u8,
    ]
}

/// Row-major ARGB32 pixels in one allocation with an explicit stride.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_stride(width, height, width as usize)
    }

    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidFrame(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        if stride < width as usize {
            return Err(RenderError::InvalidFrame(format!(
                "stride {stride} is smaller than width {width}"
            )));
        }
        let len = stride
            .checked_mul(height as usize)
            .ok_or_else(|| RenderError::InvalidFrame("buffer size overflows".to_string()))?;

        Ok(Self {
            width,
            height,
            stride,
            data: vec![0; len],
        })
    }

    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.data[self.index(x, y)]
    }

    /// Pixel as `[r, g, b, a]`.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        unpack_argb(self.get(x, y))
    }

    /// Sets every pixel, padding included.
    pub fn fill(&mut self, pixel: u32) {
        self.data.fill(pixel);
    }

    /// Raw pixels, `stride * height` long.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize
    }
}

impl FrameBuffer for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn set(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let idx = self.index(x, y);
        self.data[idx] = pack_argb(r, g, b, a);
    }
}
