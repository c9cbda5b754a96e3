// irt/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Resizes to `width` x `height`. A zero axis is derived from the other
    /// one and the original aspect ratio; two zeros keep the original size.
    pub fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (orig_width, orig_height) = image.dimensions();
        let (width, height) = Self::calculate_dimensions(orig_width, orig_height, width, height);

        if width == orig_width && height == orig_height {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} ({:?})",
            orig_width,
            orig_height,
            width,
            height,
            self.algorithm
        );

        image.resize_exact(width, height, self.get_filter_type())
    }

    pub fn calculate_dimensions(
        orig_width: u32,
        orig_height: u32,
        target_width: u32,
        target_height: u32,
    ) -> (u32, u32) {
        match (target_width, target_height) {
            (0, 0) => (orig_width, orig_height),
            (w, 0) => (w, Self::proportional(orig_height, w, orig_width)),
            (0, h) => (Self::proportional(orig_width, h, orig_height), h),
            (w, h) => (w, h),
        }
    }

    // other / (reference / target), biased up by 0.7 then truncated; never
    // below one pixel.
    fn proportional(other: u32, target: u32, reference: u32) -> u32 {
        if reference == 0 {
            return other.max(1);
        }

        let scale = reference as f64 / target as f64;
        let scaled = (0.7 + other as f64 / scale).floor();
        if scaled >= u32::MAX as f64 {
            u32::MAX
        } else {
            (scaled as u32).max(1)
        }
    }

    fn get_filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResizeAlgorithm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_is_proportional() {
        assert_eq!(Resizer::calculate_dimensions(200, 100, 100, 0), (100, 50));
        assert_eq!(Resizer::calculate_dimensions(300, 150, 100, 0), (100, 50));
    }

    #[test]
    fn zero_width_is_proportional() {
        assert_eq!(Resizer::calculate_dimensions(100, 400, 0, 200), (50, 200));
    }

    #[test]
    fn both_zero_keeps_original() {
        assert_eq!(Resizer::calculate_dimensions(640, 480, 0, 0), (640, 480));
    }

    #[test]
    fn both_set_is_exact() {
        assert_eq!(Resizer::calculate_dimensions(640, 480, 10, 10), (10, 10));
    }

    #[test]
    fn derived_axis_never_collapses() {
        assert_eq!(Resizer::calculate_dimensions(1000, 1, 10, 0), (10, 1));
        assert_eq!(Resizer::calculate_dimensions(1, 1000, 0, 10), (1, 10));
    }

    #[test]
    fn derived_axis_is_biased_up() {
        // 33.3 + 0.7 reaches 34
        assert_eq!(Resizer::calculate_dimensions(1000, 333, 100, 0), (100, 34));
        // 32.9 + 0.7 stays below 34
        assert_eq!(Resizer::calculate_dimensions(1000, 329, 100, 0), (100, 33));
        assert_eq!(Resizer::calculate_dimensions(329, 1000, 0, 100), (33, 100));
    }

    #[test]
    fn resize_applies_dimensions() {
        let image = DynamicImage::new_rgb8(200, 100);
        let resized = Resizer::default().resize(&image, 100, 0);
        assert_eq!(resized.dimensions(), (100, 50));
    }

    #[test]
    fn nearest_keeps_solid_colour() {
        let mut buffer = image::RgbImage::new(8, 8);
        for pixel in buffer.pixels_mut() {
            *pixel = image::Rgb([200, 10, 10]);
        }
        let image = DynamicImage::ImageRgb8(buffer);

        let resized = Resizer::new(ResizeAlgorithm::Nearest).resize(&image, 3, 0);
        assert_eq!(resized.dimensions(), (3, 3));
        assert!(resized.to_rgb8().pixels().all(|p| p.0 == [200, 10, 10]));
    }
}
