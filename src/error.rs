use std::fmt;

use crate::utils::rect::Rect;

/// The main error type for the ditherflow crate
#[derive(Debug)]
pub enum DitherflowError {
    /// The target palette has no entries
    EmptyPalette,

    /// A paletted image stores `u8` indices, so palettes are capped at 256 entries
    PaletteTooLarge(usize),

    /// The requested region is not contained in the surface bounds
    RegionOutOfBounds { region: Rect, bounds: Rect },

    /// The animation consumer disconnected while frames were still being produced
    AnimationClosed,

    /// A color string could not be parsed as a hex RGB triple
    InvalidColor(String),

    /// Error occurred while reading or decoding an image
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),
}

impl fmt::Display for DitherflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherflowError::EmptyPalette => write!(f, "Palette has no entries"),
            DitherflowError::PaletteTooLarge(len) => {
                write!(f, "Palette has {} entries, at most 256 are addressable", len)
            }
            DitherflowError::RegionOutOfBounds { region, bounds } => {
                write!(f, "Region {} is not contained in bounds {}", region, bounds)
            }
            DitherflowError::AnimationClosed => {
                write!(f, "Animation frame receiver disconnected mid-draw")
            }
            DitherflowError::InvalidColor(color) => {
                write!(f, "Could not parse color: {}", color)
            }
            DitherflowError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            DitherflowError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            DitherflowError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DitherflowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherflowError::ImageDecode(e) | DitherflowError::ImageEncode(e) => Some(e),
            DitherflowError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for DitherflowError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => DitherflowError::ImageEncode(err),
            _ => DitherflowError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for DitherflowError {
    fn from(err: std::io::Error) -> Self {
        DitherflowError::Io(err)
    }
}

// Convenience type alias for Results using DitherflowError
pub type Result<T = ()> = std::result::Result<T, DitherflowError>;
