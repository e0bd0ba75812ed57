use detaug_image::{Image, ImageSize};

use crate::{boxes::BoundingBox, error::AugmentError};

/// An image with its annotated boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance<L = ()> {
    /// The RGB image.
    pub image: Image<u8, 3>,
    /// Boxes in the pixel coordinates of `image`.
    pub boxes: Vec<BoundingBox<L>>,
}

impl<L> Instance<L> {
    /// Pair an image with its boxes.
    pub fn new(image: Image<u8, 3>, boxes: Vec<BoundingBox<L>>) -> Self {
        Self { image, boxes }
    }

    /// Check every box for inverted or non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidBoxInput`] for the first defective box.
    pub fn validate_boxes(&self) -> Result<(), AugmentError> {
        self.boxes
            .iter()
            .enumerate()
            .try_for_each(|(index, bbox)| {
                bbox.validate()
                    .map_err(|reason| AugmentError::InvalidBoxInput { index, reason })
            })
    }
}

/// Wrap raw interleaved pixel data as an RGB image.
///
/// # Arguments
///
/// * `size` - The image size.
/// * `channels` - The number of interleaved channels in `data`.
/// * `bits_per_channel` - The bit depth of each channel.
/// * `data` - The pixel data in row-major order.
///
/// # Errors
///
/// Returns [`AugmentError::UnsupportedColorFormat`] unless the data is 3-channel
/// with 8 bits per channel, and [`AugmentError::Image`] if the buffer length does
/// not match `size`.
///
/// # Examples
///
/// ```
/// use detaug::input::rgb8_from_raw;
/// use detaug_image::ImageSize;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let image = rgb8_from_raw(size, 3, 8, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(image.get_pixel(1, 0).unwrap(), &[4, 5, 6]);
///
/// assert!(rgb8_from_raw(size, 1, 8, vec![1, 2]).is_err());
/// ```
pub fn rgb8_from_raw(
    size: ImageSize,
    channels: usize,
    bits_per_channel: usize,
    data: Vec<u8>,
) -> Result<Image<u8, 3>, AugmentError> {
    if channels != 3 || bits_per_channel != 8 {
        return Err(AugmentError::UnsupportedColorFormat {
            channels,
            bits: bits_per_channel,
        });
    }

    Ok(Image::new(size, data)?)
}

/// Convert a decoded [`image::DynamicImage`] to an RGB image.
///
/// Only 8-bit RGB images are accepted, no implicit color conversion takes place.
///
/// # Errors
///
/// Returns [`AugmentError::UnsupportedColorFormat`] for any other color type.
pub fn rgb8_from_dynamic(img: &image::DynamicImage) -> Result<Image<u8, 3>, AugmentError> {
    match img {
        image::DynamicImage::ImageRgb8(buf) => {
            let size = ImageSize {
                width: buf.width() as usize,
                height: buf.height() as usize,
            };
            Ok(Image::new(size, buf.as_raw().clone())?)
        }
        other => {
            let color = other.color();
            let channels = color.channel_count() as usize;
            Err(AugmentError::UnsupportedColorFormat {
                channels,
                bits: color.bits_per_pixel() as usize / channels.max(1),
            })
        }
    }
}
