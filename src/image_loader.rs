use crate::error::Result;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes an image file into RGB8 pixels.
/// Blocking; call it from a rayon worker, never from the Slint event loop.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width, height))
}

/// Wraps decoded RGB8 pixels in a Slint image.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    Image::from_rgb8(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_to_rgb8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let (data, width, height) = load_image_blocking(&path).unwrap();
        assert_eq!((width, height), (3, 2));
        assert_eq!(data.len(), 3 * 2 * 3);
        assert_eq!(&data[..3], &[10, 20, 30]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_image_blocking(&dir.path().join("absent.jpg")).is_err());
    }

    #[test]
    fn garbage_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            load_image_blocking(&path),
            Err(crate::error::AppError::ImageLoad(_))
        ));
    }
}
