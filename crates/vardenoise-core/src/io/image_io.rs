use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, Rgb};

use crate::color::process::{luminance, split_interleaved};
use crate::error::Result;
use crate::frame::{ColorFrame, Frame};

/// Load an RGB image into a ColorFrame with values normalized to [0, 1].
///
/// 8 and 16-bit sources are scaled by their maximum value; float sources
/// (OpenEXR, 32-bit TIFF) are read as-is.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?;
    Ok(color_frame_from_dynamic(&img))
}

/// Load a per-pixel variance estimate.
///
/// Color variance images are reduced to a single plane by luminance.
/// Values are clamped to [0, 1]; sample variance estimates can dip slightly
/// below zero from cancellation.
pub fn load_variance_map(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let color = color_frame_from_dynamic(&img);
    let mut variance = luminance(&color);
    variance.data.mapv_inplace(|v| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 });
    Ok(variance)
}

/// Convert a decoded image into separate float planes.
pub fn color_frame_from_dynamic(img: &DynamicImage) -> ColorFrame {
    let bit_depth = source_bit_depth(img.color());
    let rgb = img.to_rgb32f();
    let (w, h) = rgb.dimensions();
    split_interleaved(rgb.as_raw(), h as usize, w as usize, bit_depth)
}

fn source_bit_depth(color: ColorType) -> u8 {
    match color {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => 8,
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => 16,
        _ => 32,
    }
}

/// Save a ColorFrame as 16-bit RGB TIFF.
pub fn save_color_tiff(color: &ColorFrame, path: &Path) -> Result<()> {
    let (h, w) = color.dim();

    let mut pixels: Vec<u16> = Vec::with_capacity(h * w * 3);
    for row in 0..h {
        for col in 0..w {
            for v in color.pixel(row, col) {
                pixels.push((v.clamp(0.0, 1.0) * 65535.0).round() as u16);
            }
        }
    }

    let img = image::ImageBuffer::<Rgb<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .expect("buffer size matches dimensions");
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a ColorFrame as 8-bit RGB PNG.
pub fn save_color_png(color: &ColorFrame, path: &Path) -> Result<()> {
    let (h, w) = color.dim();

    let mut img = image::RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let [r, g, b] = color
                .pixel(row, col)
                .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a ColorFrame, choosing format from file extension.
pub fn save_color_image(color: &ColorFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_color_png(color, path),
        _ => save_color_tiff(color, path),
    }
}
