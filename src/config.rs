use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{Read, Write},
};

use image::Rgb;
use json::JsonValue;

use crate::{
    dithering::error_diffusion::KernelType,
    palette::{DEFAULT_PALETTE, rgb_from_hex, rgb_to_hex},
};

#[derive(Debug)]
pub struct ProcessConfig {
    pub brightness_delta: i32,
    pub contrast_delta: f32,
    pub kernel_type: KernelType,
    pub palette: Vec<Rgb<u8>>,
    pub nb_frames: u32,
    pub processing_width: u32,
    pub processing_height: u32,
    pub output_scale: u32,
}

impl ProcessConfig {
    pub(crate) fn to_config(json_string: String) -> Result<ProcessConfig, Box<dyn std::error::Error>> {
        let json = json::parse(json_string.as_str())?;

        let brightness_delta = match json["brightness_delta"].as_i32() {
            Some(val) => val,
            None => return ConfigError::get("Couldn't parse brightness_delta"),
        };
        let contrast_delta: f32 = match json["contrast_delta"].as_f32() {
            Some(val) => val,
            None => return ConfigError::get("Couldn't parse contrast_delta"),
        };
        let processing_width: u32 = match json["processing_width"].as_u32() {
            Some(val) => val,
            None => return ConfigError::get("Couldn't parse processing_width"),
        };
        let processing_height: u32 = match json["processing_height"].as_u32() {
            Some(val) => val,
            None => return ConfigError::get("Couldn't parse processing_height"),
        };
        let output_scale: u32 = match json["output_scale"].as_u32() {
            Some(val) => val,
            None => return ConfigError::get("Couldn't parse output_scale"),
        };

        let kernel_type: KernelType = match json["dithering_type"].as_str() {
            Some(s) => match s {
                "floyd" => KernelType::FloydSteinberg,
                "jarvis" => KernelType::JarvisJudiceNinke,
                "stucki" => KernelType::Stucki,
                "atkinson" => KernelType::Atkinson,
                "burkes" => KernelType::Burkes,
                "sierra" => KernelType::Sierra,
                "two_row_sierra" => KernelType::TwoRowSierra,
                "sierra_lite" => KernelType::SierraLite,
                _ => return ConfigError::get("Not recognized dithering_type"),
            },
            None => return ConfigError::get("Couldn't parse dithering_type"),
        };

        let nb_frames: u32 = if json["nb_frames"].is_null() {
            1
        } else {
            match json["nb_frames"].as_u32() {
                Some(val) if val >= 1 => val,
                Some(_) => return ConfigError::get("nb_frames should be at least 1"),
                None => return ConfigError::get("Couldn't parse nb_frames"),
            }
        };

        let palette = if json["palette"].is_null() {
            DEFAULT_PALETTE.to_vec()
        } else if json["palette"].len() <= 1 {
            return ConfigError::get("palette should be an array of 2 or more hex colors");
        } else {
            let mut index = 0;
            let mut palette: Vec<Rgb<u8>> = Vec::new();
            while index < json["palette"].len() {
                let color = match json["palette"][index].as_str() {
                    Some(val) => val,
                    None => return ConfigError::get("Couldn't parse palette.*"),
                };
                palette.push(rgb_from_hex(color)?);

                index += 1;
            }
            palette
        };

        Ok(ProcessConfig {
            brightness_delta,
            contrast_delta,
            kernel_type,
            palette,
            nb_frames,
            processing_width,
            processing_height,
            output_scale,
        })
    }

    pub(crate) fn to_json(config: &ProcessConfig) -> String {
        let mut data = json::JsonValue::new_object();

        data["brightness_delta"] = config.brightness_delta.into();
        data["contrast_delta"] = config.contrast_delta.into();
        data["dithering_type"] = config.kernel_type.into();
        data["palette"] = config
            .palette
            .iter()
            .map(rgb_to_hex)
            .collect::<Vec<String>>()
            .into();
        data["nb_frames"] = config.nb_frames.into();
        data["processing_width"] = config.processing_width.into();
        data["processing_height"] = config.processing_height.into();
        data["output_scale"] = config.output_scale.into();

        data.to_string()
    }

    pub fn read_config(path: &str) -> Result<ProcessConfig, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut buff: Vec<u8> = Vec::new();
        let _ = file.read_to_end(&mut buff)?;

        let json_string = String::from_utf8(buff)?;

        ProcessConfig::to_config(json_string)
    }

    pub fn write_config(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let string = ProcessConfig::to_json(self);
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}

impl From<KernelType> for JsonValue {
    fn from(kernel_type: KernelType) -> Self {
        match kernel_type {
            KernelType::FloydSteinberg => JsonValue::String(String::from("floyd")),
            KernelType::JarvisJudiceNinke => JsonValue::String(String::from("jarvis")),
            KernelType::Stucki => JsonValue::String(String::from("stucki")),
            KernelType::Atkinson => JsonValue::String(String::from("atkinson")),
            KernelType::Burkes => JsonValue::String(String::from("burkes")),
            KernelType::Sierra => JsonValue::String(String::from("sierra")),
            KernelType::TwoRowSierra => JsonValue::String(String::from("two_row_sierra")),
            KernelType::SierraLite => JsonValue::String(String::from("sierra_lite")),
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    msg: String,
}

impl ConfigError {
    fn get(msg: &str) -> Result<ProcessConfig, Box<dyn std::error::Error>> {
        Err(Box::new(ConfigError {
            msg: String::from(msg),
        }))
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ConfigParseError {}", self.msg))
    }
}
impl Error for ConfigError {}
