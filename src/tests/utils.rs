use image::{Rgb, Rgba, RgbaImage};
use rand::Rng;

pub fn rand_rgba(rng: &mut rand::rngs::ThreadRng) -> Rgba<u8> {
    Rgba([
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u8>(),
        255,
    ])
}

pub fn gen_random_image(width: u32, height: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(width, height, |_, _| rand_rgba(&mut rng))
}

/// Uniform image of a single opaque color.
pub fn gen_flat_image(width: u32, height: u32, color: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([color[0], color[1], color[2], 255]))
}

pub fn black_white() -> Vec<Rgb<u8>> {
    vec![Rgb([0, 0, 0]), Rgb([255, 255, 255])]
}
