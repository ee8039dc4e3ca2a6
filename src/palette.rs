use image::{DynamicImage, ImageBuffer, Rgb, Rgba};

use crate::{
    error::{DitherflowError, Result},
    utils::rect::Rect,
};

/// Number of palette entries addressable with a `u8` pixel index.
pub const MAX_PALETTE_LEN: usize = 256;

pub const DEFAULT_PALETTE: [Rgb<u8>; 2] = [Rgb([0, 0, 0]), Rgb([255, 255, 255])];

/// An image whose pixels are indices into a fixed color palette.
///
/// This is the only destination surface the error diffusion engine accepts;
/// constructing one up front takes the place of a runtime capability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalettedImage {
    width: u32,
    height: u32,
    palette: Vec<Rgb<u8>>,
    indices: Vec<u8>,
}

impl PalettedImage {
    /// Create a paletted image filled with the first palette entry.
    pub fn new(width: u32, height: u32, palette: Vec<Rgb<u8>>) -> Result<Self> {
        if palette.is_empty() {
            return Err(DitherflowError::EmptyPalette);
        }
        if palette.len() > MAX_PALETTE_LEN {
            return Err(DitherflowError::PaletteTooLarge(palette.len()));
        }

        Ok(Self {
            width,
            height,
            palette,
            indices: vec![0; width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    pub fn palette(&self) -> &[Rgb<u8>] {
        &self.palette
    }

    #[inline]
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.indices[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set_index(&mut self, x: u32, y: u32, index: u8) {
        self.indices[y as usize * self.width as usize + x as usize] = index;
    }

    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> Rgb<u8> {
        self.palette[self.index_at(x, y) as usize]
    }

    /// Expand the indexed pixels into an RGBA image.
    pub fn to_dynimg(&self) -> DynamicImage {
        let raw_data = self
            .indices
            .iter()
            .flat_map(|&index| {
                let Rgb([r, g, b]) = self.palette[index as usize];
                [r, g, b, 255]
            })
            .collect::<Vec<u8>>();

        DynamicImage::ImageRgba8(
            ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(self.width, self.height, raw_data)
                .expect("Could construct an image"),
        )
    }
}

pub fn rgb_from_hex(string: &str) -> Result<Rgb<u8>> {
    let clean_string = string.trim().to_lowercase().replace("#", "");
    if clean_string.len() != 6 {
        return Err(DitherflowError::InvalidColor(string.to_string()));
    }

    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&clean_string[range], 16)
            .map_err(|_| DitherflowError::InvalidColor(string.to_string()))
    };

    Ok(Rgb([parse(0..2)?, parse(2..4)?, parse(4..6)?]))
}

pub fn rgb_to_hex(color: &Rgb<u8>) -> String {
    let Rgb([r, g, b]) = color;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
