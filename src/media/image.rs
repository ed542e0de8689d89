// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from raster formats (PNG, JPEG, GIF, ...) and SVG.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// Decoded image ready to be handed to the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from straight (non-premultiplied) RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Creates a new `ImageData` from encoded bytes whose dimensions are already known.
    #[must_use]
    pub fn from_encoded(encoded_bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            handle: image::Handle::from_bytes(encoded_bytes),
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// SVG files are rasterized at their intrinsic size with resvg and re-encoded
/// as PNG for the renderer.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The raster data is invalid or the format unsupported ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        load_svg(path)
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();

        Ok(ImageData::from_rgba(width, height, pixels))
    }
}

fn load_svg(path: &Path) -> Result<ImageData> {
    let svg_data = fs::read(path)?;
    let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;

    Ok(ImageData::from_encoded(png_data, width, height))
}
