use std::env;

use ditherflow::{config::ProcessConfig, run, utils::image as image_utils};

fn main() {
    let args: Vec<String> = env::args().collect();

    let input_image_path = &args[1];
    let output_image_path = &args[2];
    let process_config_path = &args[3];

    let image = image_utils::read_image(input_image_path).unwrap();
    let config = ProcessConfig::read_config(process_config_path).unwrap();
    let (result, frames) = run(&config, image).unwrap();

    image_utils::write_image(&result, output_image_path, image::ImageFormat::Png).unwrap();
    for (idx, frame) in frames.iter().enumerate() {
        let frame_path = format!("{}.frame_{:03}.png", output_image_path, idx);
        image_utils::write_image(frame, &frame_path, image::ImageFormat::Png).unwrap();
    }
}
