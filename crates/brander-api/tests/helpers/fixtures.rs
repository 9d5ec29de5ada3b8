//! In-memory image and archive fixtures.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};

pub const OVERLAY_WIDTH: u32 = 100;
pub const OVERLAY_HEIGHT: u32 = 50;

fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("Failed to encode fixture");
    out.into_inner()
}

/// Overlay used on dark images: pure red.
pub fn light_overlay() -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            OVERLAY_WIDTH,
            OVERLAY_HEIGHT,
            Rgba([255, 0, 0, 255]),
        )),
        ImageFormat::Png,
    )
}

/// Overlay used on light images: pure blue.
pub fn dark_overlay() -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            OVERLAY_WIDTH,
            OVERLAY_HEIGHT,
            Rgba([0, 0, 255, 255]),
        )),
        ImageFormat::Png,
    )
}

pub fn solid_png(width: u32, height: u32, value: u8) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3]))),
        ImageFormat::Png,
    )
}

pub fn solid_jpeg(width: u32, height: u32, value: u8) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3]))),
        ImageFormat::Jpeg,
    )
}

/// Zip archive holding the given entries in order.
pub fn zip_of(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        for (name, data) in entries {
            zip.start_file(*name, FileOptions::default())
                .expect("Failed to start entry");
            zip.write_all(data).expect("Failed to write entry");
        }
        zip.finish().expect("Failed to finish zip");
    }
    buffer
}
