use detaug_image::{Image, ImageError};
use detaug_imgproc::color::{adjust_hsv, hsv_from_rgb, rgb_from_hsv};

use crate::random::RandomSource;

/// A color distortion in HSV space.
///
/// Hue is shifted by `delta_hue` degrees and wrapped around the color wheel,
/// saturation and value are multiplied by their factors and clamped to `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorJitter {
    /// Hue shift in degrees.
    pub delta_hue: f32,
    /// Saturation multiplier.
    pub saturation: f32,
    /// Value (exposure) multiplier.
    pub exposure: f32,
}

impl Default for ColorJitter {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorJitter {
    /// Leaves the colors untouched.
    pub const IDENTITY: Self = Self {
        delta_hue: 0.0,
        saturation: 1.0,
        exposure: 1.0,
    };

    /// Draw a random distortion.
    ///
    /// The hue shift is uniform in `[-hue, hue]`. Each factor is drawn uniformly
    /// in `[1, bound]` and inverted on a coin flip, so brightening and darkening
    /// are equally likely.
    ///
    /// Draws, in order: hue, saturation, saturation inversion, exposure, exposure
    /// inversion.
    pub fn sample(hue: f32, saturation: f32, exposure: f32, rng: &mut impl RandomSource) -> Self {
        let delta_hue = rng.uniform(-hue, hue);
        let saturation = random_factor(saturation, rng);
        let exposure = random_factor(exposure, rng);
        Self {
            delta_hue,
            saturation,
            exposure,
        }
    }

    /// Whether applying the distortion would leave any image unchanged.
    pub fn is_identity(&self) -> bool {
        self.delta_hue == 0.0 && self.saturation == 1.0 && self.exposure == 1.0
    }

    /// Distort the colors of `image`.
    ///
    /// The identity distortion returns the image as is.
    pub fn apply(&self, image: Image<u8, 3>) -> Result<Image<u8, 3>, ImageError> {
        if self.is_identity() {
            return Ok(image);
        }

        let mut hsv = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
        hsv_from_rgb(&image, &mut hsv)?;

        let mut adjusted = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
        adjust_hsv(
            &hsv,
            &mut adjusted,
            self.delta_hue,
            self.saturation,
            self.exposure,
        )?;

        let mut rgb = image;
        rgb_from_hsv(&adjusted, &mut rgb)?;

        Ok(rgb)
    }
}

fn random_factor(bound: f32, rng: &mut impl RandomSource) -> f32 {
    let factor = rng.uniform(1.0, bound);
    if rng.coin() {
        1.0 / factor
    } else {
        factor
    }
}
