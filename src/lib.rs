use image::{DynamicImage, imageops::FilterType};

use crate::{
    config::ProcessConfig, dithering::error_diffusion::Ditherer, palette::PalettedImage,
};

pub mod config;
pub mod dithering;
pub mod error;
pub mod palette;
pub mod utils;


/// Run the full dithering pipeline on a decoded image.
///
/// Returns the dithered image plus, when `config.nb_frames > 1`, the
/// intermediate animation frames collected during the draw. The frame
/// consumer runs on its own thread so the blocking handoff inside
/// [`Ditherer::draw`] always has a receiver.
pub fn run(
    config: &ProcessConfig,
    original_img: DynamicImage,
) -> error::Result<(DynamicImage, Vec<DynamicImage>)> {
    let image = original_img
        .resize(
            config.processing_width,
            config.processing_height,
            FilterType::Gaussian,
        )
        .brighten(config.brightness_delta)
        .adjust_contrast(config.contrast_delta);

    let source = image.to_rgba8();
    let mut dst = PalettedImage::new(source.width(), source.height(), config.palette.clone())?;
    let rect = dst.bounds();

    let frames = if config.nb_frames > 1 {
        let (ditherer, receiver) =
            Ditherer::with_animation(config.kernel_type.kernel(), config.nb_frames);
        let consumer = std::thread::spawn(move || {
            let mut frames = Vec::new();
            while let Ok(frame) = receiver.recv() {
                frames.push(frame);
            }
            frames
        });

        ditherer.draw(&mut dst, rect, &source)?;
        // dropping the engine closes the channel and ends the consumer loop
        drop(ditherer);
        consumer.join().expect("frame consumer panicked")
    } else {
        let ditherer = Ditherer::new(config.kernel_type.kernel());
        ditherer.draw(&mut dst, rect, &source)?;
        Vec::new()
    };

    let result = upscale(dst.to_dynimg(), config.output_scale);
    let frames = frames
        .into_iter()
        .map(|frame| upscale(frame.to_dynimg(), config.output_scale))
        .collect();

    Ok((result, frames))
}

fn upscale(image: DynamicImage, scale: u32) -> DynamicImage {
    image.resize(
        image.width() * scale,
        image.height() * scale,
        FilterType::Nearest,
    )
}
