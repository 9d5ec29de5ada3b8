use image::DynamicImage;

const BINS_PER_CHANNEL: usize = 16;
const BIN_SHIFT: u8 = 4;
const BIN_CENTRE: usize = 8;

/// Most common color of an image, quantised to 16 levels per channel.
///
/// Pixels are counted into a 16×16×16 RGB histogram and the centre of the fullest
/// bin is returned. Ties go to the first bin in red-major order. Alpha is ignored.
pub fn dominant_color(img: &DynamicImage) -> [u8; 3] {
    let rgb = img.to_rgb8();
    let mut histogram = vec![0u32; BINS_PER_CHANNEL * BINS_PER_CHANNEL * BINS_PER_CHANNEL];

    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        let index = ((r >> BIN_SHIFT) as usize) * BINS_PER_CHANNEL * BINS_PER_CHANNEL
            + ((g >> BIN_SHIFT) as usize) * BINS_PER_CHANNEL
            + (b >> BIN_SHIFT) as usize;
        histogram[index] += 1;
    }

    let mut best = 0;
    for (index, count) in histogram.iter().enumerate() {
        if *count > histogram[best] {
            best = index;
        }
    }

    let centre = |bin: usize| ((bin << BIN_SHIFT) + BIN_CENTRE) as u8;
    [
        centre(best / (BINS_PER_CHANNEL * BINS_PER_CHANNEL)),
        centre((best / BINS_PER_CHANNEL) % BINS_PER_CHANNEL),
        centre(best % BINS_PER_CHANNEL),
    ]
}

/// Relative luminance of an sRGB color in `[0, 1]`.
pub fn relative_luminance([r, g, b]: [u8; 3]) -> f64 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}
