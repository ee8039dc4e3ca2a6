use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;

use crate::error::Result;

pub fn read_image(path: &str) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.decode()?)
}

pub fn write_image(image: &DynamicImage, path: &str, image_format: ImageFormat) -> Result {
    image.write_to(&mut File::create(path)?, image_format)?;
    Ok(())
}
