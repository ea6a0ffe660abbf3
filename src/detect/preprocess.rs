//! Image preparation for the vision model call.
//!
//! Photos are downscaled to a fixed width before upload to keep request size
//! and model cost bounded, then JPEG-encoded and base64'd for transport.

use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::io::Cursor;

/// Resizes the photo to `target_width`, preserving aspect ratio.
///
/// Height is rounded to the nearest pixel and clamped to at least 1 so
/// extreme aspect ratios cannot produce a zero-height image.
pub fn resize_for_upload(img: &DynamicImage, target_width: u32) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    if width == target_width {
        return img.clone();
    }
    let ratio = width as f32 / target_width as f32;
    let new_height = ((height as f32 / ratio).round() as u32).max(1);
    img.resize_exact(target_width, new_height, FilterType::Triangle)
}

/// JPEG-encodes the image and returns the base64 of the encoded bytes.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn encode_jpeg_base64(img: &DynamicImage) -> Result<String> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, image::ImageFormat::Jpeg)?;
    Ok(BASE64_STANDARD.encode(buffer.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([x as u8, y as u8, 0, 255])
        }))
    }

    #[test]
    fn test_resize_preserves_aspect_ratio() {
        let img = test_image(1000, 750);
        let resized = resize_for_upload(&img, 500);
        assert_eq!(resized.dimensions(), (500, 375));
    }

    #[test]
    fn test_resize_upscales_narrow_images() {
        let img = test_image(250, 100);
        let resized = resize_for_upload(&img, 500);
        assert_eq!(resized.dimensions(), (500, 200));
    }

    #[test]
    fn test_resize_noop_at_target_width() {
        let img = test_image(500, 321);
        let resized = resize_for_upload(&img, 500);
        assert_eq!(resized.dimensions(), (500, 321));
    }

    #[test]
    fn test_resize_never_yields_zero_height() {
        let img = test_image(4000, 1);
        let resized = resize_for_upload(&img, 500);
        assert_eq!(resized.dimensions().1, 1);
    }

    #[test]
    fn test_encode_produces_jpeg_bytes() {
        let img = test_image(10, 10);
        let encoded = encode_jpeg_base64(&img).unwrap();
        let bytes = BASE64_STANDARD.decode(encoded).unwrap();
        // JPEG start-of-image marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }
}
