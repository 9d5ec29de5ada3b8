//! Decoding, encoding and the blocking-pool hop shared by the image stages.

use brander_core::{BrandError, BrandResult};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// JPEG quality used when re-encoding branded images.
pub const JPEG_QUALITY: u8 = 80;

/// Decode an image, detecting its format from the bytes.
pub fn decode(data: &[u8]) -> BrandResult<DynamicImage> {
    decode_with_format(data).map(|(img, _)| img)
}

/// Decode an image and report the format it was stored in.
pub fn decode_with_format(data: &[u8]) -> BrandResult<(DynamicImage, ImageFormat)> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| BrandError::ImageDecode(e.to_string()))?;

    let format = reader.format().ok_or_else(|| {
        BrandError::ImageDecode("Input buffer contains unsupported image format".to_string())
    })?;

    let img = reader
        .decode()
        .map_err(|e| BrandError::ImageDecode(e.to_string()))?;

    Ok((img, format))
}

/// Width and height from the image header; `(0, 0)` when they cannot be read.
pub fn dimensions_or_zero(data: &[u8]) -> (u32, u32) {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()
        .and_then(|reader| reader.into_dimensions().ok())
        .unwrap_or((0, 0))
}

/// Encode an image in the given format.
pub fn encode(img: &DynamicImage, format: ImageFormat) -> BrandResult<Vec<u8>> {
    let mut buffer = Vec::new();

    let result = match format {
        ImageFormat::Jpeg => {
            // JPEG has no alpha channel
            JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode_image(&img.to_rgb8())
        }
        ImageFormat::Gif => DynamicImage::ImageRgba8(img.to_rgba8())
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Gif),
        other => img.write_to(&mut Cursor::new(&mut buffer), other),
    };

    result.map_err(|e| BrandError::ImageEncode(format!("{:?}: {}", format, e)))?;
    Ok(buffer)
}

/// Run CPU-bound image work on the blocking thread pool.
pub async fn spawn_cpu<F, T>(work: F) -> BrandResult<T>
where
    F: FnOnce() -> BrandResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| BrandError::Internal(format!("Image task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([200, 100, 50, 255])))
    }

    #[test]
    fn test_encode_keeps_format() {
        for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif] {
            let encoded = encode(&sample(), format).unwrap();
            let (img, detected) = decode_with_format(&encoded).unwrap();
            assert_eq!(detected, format);
            assert_eq!(img.dimensions(), (6, 4));
        }
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(b"not an image").unwrap_err();
        assert!(matches!(err, BrandError::ImageDecode(_)));
    }

    #[test]
    fn test_dimensions_or_zero() {
        let encoded = encode(&sample(), ImageFormat::Png).unwrap();
        assert_eq!(dimensions_or_zero(&encoded), (6, 4));
        assert_eq!(dimensions_or_zero(b"garbage"), (0, 0));
    }

    #[tokio::test]
    async fn test_spawn_cpu_propagates_errors() {
        let ok = spawn_cpu(|| Ok(7)).await.unwrap();
        assert_eq!(ok, 7);

        let err = spawn_cpu::<_, ()>(|| Err(BrandError::ImageDecode("bad".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, BrandError::ImageDecode(_)));
    }
}
