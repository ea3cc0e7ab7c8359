//! Turns uploaded image bytes into the tensor the classifier expects.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageError, Luma, Rgb, RgbImage};
use ndarray::Array4;

/// Width and height of the classifier input.
pub const INPUT_SIZE: u32 = 224;
/// Color channels of the classifier input.
pub const CHANNELS: usize = 3;

const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Decoded pixels reduced to the two layouts the model input is built from.
enum PixelGrid {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl From<DynamicImage> for PixelGrid {
    fn from(img: DynamicImage) -> Self {
        match img.color().channel_count() {
            1 => PixelGrid::Gray(img.to_luma8()),
            2 => {
                // alpha is truncated, never blended
                let la = img.to_luma_alpha8();
                PixelGrid::Gray(GrayImage::from_fn(la.width(), la.height(), |x, y| {
                    Luma([la.get_pixel(x, y)[0]])
                }))
            }
            4 => {
                let rgba = img.to_rgba8();
                PixelGrid::Rgb(RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
                    let p = rgba.get_pixel(x, y);
                    Rgb([p[0], p[1], p[2]])
                }))
            }
            _ => PixelGrid::Rgb(img.to_rgb8()),
        }
    }
}

impl PixelGrid {
    fn resize(self) -> Self {
        match self {
            PixelGrid::Gray(g) => {
                PixelGrid::Gray(imageops::resize(&g, INPUT_SIZE, INPUT_SIZE, RESIZE_FILTER))
            }
            PixelGrid::Rgb(rgb) => {
                PixelGrid::Rgb(imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, RESIZE_FILTER))
            }
        }
    }

    /// Scales to [0, 1] and lays the pixels out as `(1, H, W, C)`. A gray
    /// grid is replicated across all three channels.
    fn into_tensor(self) -> Array4<f32> {
        let side = INPUT_SIZE as usize;
        let shape = (1, side, side, CHANNELS);
        match self {
            PixelGrid::Gray(g) => Array4::from_shape_fn(shape, |(_, y, x, _)| {
                scale(g.get_pixel(x as u32, y as u32)[0])
            }),
            PixelGrid::Rgb(rgb) => Array4::from_shape_fn(shape, |(_, y, x, c)| {
                scale(rgb.get_pixel(x as u32, y as u32)[c])
            }),
        }
    }
}

fn scale(value: u8) -> f32 {
    value as f32 / 255.0
}

/// Decodes `bytes` (format sniffed from the content) and returns a
/// `(1, 224, 224, 3)` tensor with every value in `[0, 1]`.
pub fn preprocess(bytes: &[u8]) -> Result<Array4<f32>, ImageError> {
    let img = image::load_from_memory(bytes)?;
    Ok(PixelGrid::from(img).resize().into_tensor())
}
