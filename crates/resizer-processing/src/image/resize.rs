use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Dimensions that fit `width`×`height` inside a `max`×`max` box, keeping aspect ratio.
///
/// Images already inside the box are returned unchanged (never upscaled). Otherwise
/// the longer side becomes exactly `max` and the shorter side is rounded to the
/// nearest pixel, with a floor of 1.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let scale = |short: u32, long: u32| -> u32 {
        let short = short as u64;
        let long = long as u64;
        let max = max as u64;
        (((short * max) + long / 2) / long).max(1) as u32
    };

    if width >= height {
        (max, scale(height, width))
    } else {
        (scale(width, height), max)
    }
}

/// Bounded downscaling
pub struct ImageResize;

impl ImageResize {
    /// Shrink `img` to fit a `max`×`max` box. Returns the input untouched when it already fits.
    pub fn shrink_to_fit(img: DynamicImage, max: u32) -> DynamicImage {
        let (width, height) = img.dimensions();
        let (target_width, target_height) = fit_within(width, height, max);

        if (target_width, target_height) == (width, height) {
            return img;
        }

        tracing::debug!(
            from_width = width,
            from_height = height,
            to_width = target_width,
            to_height = target_height,
            "Shrinking image"
        );

        img.resize_exact(target_width, target_height, FilterType::Lanczos3)
    }
}
