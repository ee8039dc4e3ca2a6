use std::fmt::Display;

/// Integer rectangle spanning `[min_x, max_x) x [min_y, max_y)`.
///
/// Coordinates are signed so that positions shifted outside a rectangle,
/// including negative ones, stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    #[inline]
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle with its minimum corner at the origin.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: width as i32,
            max_y: height as i32,
        }
    }

    #[inline]
    pub const fn dx(&self) -> i32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub const fn dy(&self) -> i32 {
        self.max_y - self.min_y
    }

    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
