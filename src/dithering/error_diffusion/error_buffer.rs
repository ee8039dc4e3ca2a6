use std::ops::{Add, Mul};

use crate::utils::rect::Rect;

/// Accumulated quantization error for one pixel, one component per channel.
///
/// The `weight` marker distinguishes error accumulated at a cell from the
/// uninitialized default; a default value behaves as the additive identity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PixelError {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub weight: f32,
}

impl PixelError {
    /// An error value marked as accumulated.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r,
            g,
            b,
            weight: 1.0,
        }
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.weight != 0.0
    }
}

impl Add for PixelError {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            weight: self.weight.max(rhs.weight),
        }
    }
}

impl Mul<f32> for PixelError {
    type Output = Self;

    // the marker scales with the channels: multiplying by zero yields the
    // additive identity, so zero-weight kernel cells never mark a cell as
    // accumulated
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            weight: self.weight * rhs.abs(),
        }
    }
}

/// Error accumulation surface for a single draw call.
///
/// Reads and writes accept any coordinate: diffusion targets near the region
/// edge spill past it, and those contributions are deliberately dropped.
/// Reading a cell that was never written, or lies outside the region, yields
/// the zero error.
#[derive(Debug)]
pub struct ErrorBuffer {
    rect: Rect,
    buffer: Vec<PixelError>,
}

impl ErrorBuffer {
    pub fn new(rect: Rect) -> Self {
        let len = rect.dx().max(0) as usize * rect.dy().max(0) as usize;
        Self {
            rect,
            buffer: vec![PixelError::default(); len],
        }
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.rect.contains(x, y) {
            return None;
        }
        let row = (y - self.rect.min_y) as usize;
        let col = (x - self.rect.min_x) as usize;
        Some(row * self.rect.dx() as usize + col)
    }

    #[inline]
    pub fn error_at(&self, x: i32, y: i32) -> PixelError {
        self.offset(x, y)
            .map(|idx| self.buffer[idx])
            .unwrap_or_default()
    }

    #[inline]
    pub fn set_error(&mut self, x: i32, y: i32, error: PixelError) {
        if let Some(idx) = self.offset(x, y) {
            self.buffer[idx] = error;
        }
    }
}
