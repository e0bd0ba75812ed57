use detaug_image::ImageSize;
use detaug_imgproc::resize::InterpolationMode;
use serde::{Deserialize, Serialize};

use crate::error::AugmentError;

/// What to do with input boxes that are inverted or not finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidBoxPolicy {
    /// Fail the call with [`AugmentError::InvalidBoxInput`].
    #[default]
    Reject,
    /// Omit the box from the output.
    Drop,
}

/// Parameters of the augmentation pipeline.
///
/// Only the canvas size is required; every other field falls back to its default
/// when deserializing.
///
/// # Examples
///
/// ```
/// use detaug::config::AugmentConfig;
/// use detaug_image::ImageSize;
///
/// let config = AugmentConfig {
///     jitter: 0.0,
///     ..AugmentConfig::new(ImageSize { width: 416, height: 416 })
/// };
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.fill_value, [127, 127, 127]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentConfig {
    /// Size of the output canvas.
    pub net_size: ImageSize,
    /// Aspect ratio jitter as a fraction of each image side, in `[0, 1]`.
    #[serde(default = "default_jitter")]
    pub jitter: f32,
    /// Bounds of the scale factor applied to the canvas side.
    #[serde(default = "default_scale_range")]
    pub scale_range: (f32, f32),
    /// Maximum hue shift in degrees, in `[0, 180]`.
    #[serde(default = "default_hue")]
    pub hue: f32,
    /// Maximum saturation factor, at least 1.
    #[serde(default = "default_factor")]
    pub saturation: f32,
    /// Maximum exposure factor, at least 1.
    #[serde(default = "default_factor")]
    pub exposure: f32,
    /// Color of the padded canvas area.
    #[serde(default = "default_fill_value")]
    pub fill_value: [u8; 3],
    /// Interpolation used when resizing.
    #[serde(default)]
    pub interpolation: InterpolationMode,
    /// Handling of malformed input boxes.
    #[serde(default)]
    pub invalid_boxes: InvalidBoxPolicy,
}

fn default_jitter() -> f32 {
    0.3
}

fn default_scale_range() -> (f32, f32) {
    (0.25, 2.0)
}

fn default_hue() -> f32 {
    18.0
}

fn default_factor() -> f32 {
    1.5
}

fn default_fill_value() -> [u8; 3] {
    [127, 127, 127]
}

impl AugmentConfig {
    /// Create a configuration with default parameters for the given canvas.
    pub fn new(net_size: ImageSize) -> Self {
        Self {
            net_size,
            jitter: default_jitter(),
            scale_range: default_scale_range(),
            hue: default_hue(),
            saturation: default_factor(),
            exposure: default_factor(),
            fill_value: default_fill_value(),
            interpolation: InterpolationMode::default(),
            invalid_boxes: InvalidBoxPolicy::default(),
        }
    }

    /// Parse a JSON configuration and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::Json`] if the document does not parse and
    /// [`AugmentError::InvalidConfig`] if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, AugmentError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), AugmentError> {
        if self.net_size.is_empty() {
            return Err(invalid(format!(
                "net_size must be positive, got {}",
                self.net_size
            )));
        }

        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(invalid(format!(
                "jitter must be in [0, 1], got {}",
                self.jitter
            )));
        }

        let (lo, hi) = self.scale_range;
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
            return Err(invalid(format!(
                "scale_range must satisfy 0 < lo <= hi, got ({lo}, {hi})"
            )));
        }

        if !(0.0..=180.0).contains(&self.hue) {
            return Err(invalid(format!(
                "hue must be in [0, 180] degrees, got {}",
                self.hue
            )));
        }

        for (name, factor) in [("saturation", self.saturation), ("exposure", self.exposure)] {
            if !(factor.is_finite() && factor >= 1.0) {
                return Err(invalid(format!(
                    "{name} must be a finite factor >= 1, got {factor}"
                )));
            }
        }

        Ok(())
    }
}

fn invalid(msg: String) -> AugmentError {
    AugmentError::InvalidConfig(msg)
}
