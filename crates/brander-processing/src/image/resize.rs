use brander_core::constants::{MAX_OUTPUT_HEIGHT, MAX_OUTPUT_WIDTH};
use brander_core::ResizeFit;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Output dimensions for an image of `width`×`height` fitted into the
/// `max_width`×`max_height` box.
pub fn target_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
    fit: ResizeFit,
) -> (u32, u32) {
    match fit {
        ResizeFit::Fill => (max_width, max_height),
        ResizeFit::Inside => {
            if width == 0 || height == 0 || (width <= max_width && height <= max_height) {
                return (width, height);
            }

            // Compare width/max_width against height/max_height without floats
            let (w, h) = (width as u64, height as u64);
            let (mw, mh) = (max_width as u64, max_height as u64);
            if w * mh >= h * mw {
                let scaled = (h * mw + w / 2) / w;
                (max_width, scaled.max(1) as u32)
            } else {
                let scaled = (w * mh + h / 2) / h;
                (scaled.max(1) as u32, max_height)
            }
        }
    }
}

/// Fit an image into the 1400×1400 output box.
pub fn fit_to_bounds(img: DynamicImage, fit: ResizeFit) -> DynamicImage {
    let (width, height) = img.dimensions();
    let (target_width, target_height) =
        target_dimensions(width, height, MAX_OUTPUT_WIDTH, MAX_OUTPUT_HEIGHT, fit);

    if (target_width, target_height) == (width, height) {
        return img;
    }

    tracing::debug!(
        from_width = width,
        from_height = height,
        to_width = target_width,
        to_height = target_height,
        "Resizing image"
    );

    img.resize_exact(target_width, target_height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_landscape_limited_by_width() {
        assert_eq!(
            target_dimensions(2000, 1000, 1400, 1400, ResizeFit::Inside),
            (1400, 700)
        );
    }

    #[test]
    fn test_portrait_limited_by_height() {
        assert_eq!(
            target_dimensions(1000, 3000, 1400, 1400, ResizeFit::Inside),
            (467, 1400)
        );
    }

    #[test]
    fn test_never_enlarges() {
        assert_eq!(
            target_dimensions(640, 480, 1400, 1400, ResizeFit::Inside),
            (640, 480)
        );
        assert_eq!(
            target_dimensions(1400, 1400, 1400, 1400, ResizeFit::Inside),
            (1400, 1400)
        );
    }

    #[test]
    fn test_extreme_aspect_keeps_one_pixel() {
        assert_eq!(
            target_dimensions(100_000, 10, 1400, 1400, ResizeFit::Inside),
            (1400, 1)
        );
    }

    #[test]
    fn test_fill_stretches() {
        assert_eq!(
            target_dimensions(640, 480, 1400, 1400, ResizeFit::Fill),
            (1400, 1400)
        );
    }

    #[test]
    fn test_fit_is_idempotent_inside_box() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(300, 200));
        let once = fit_to_bounds(img, ResizeFit::Inside);
        let twice = fit_to_bounds(once.clone(), ResizeFit::Inside);
        assert_eq!(once.dimensions(), (300, 200));
        assert_eq!(twice.dimensions(), (300, 200));
    }

    #[test]
    fn test_fit_large_image() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(2000, 1000));
        assert_eq!(fit_to_bounds(img, ResizeFit::Inside).dimensions(), (1400, 700));
    }
}
