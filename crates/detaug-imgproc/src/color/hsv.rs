use crate::parallel;
use detaug_image::{Image, ImageError};

/// The circular range of the hue channel, in degrees.
pub const HUE_RANGE: f32 = 360.0;

/// Maximum value of the saturation and value channels.
const CHANNEL_MAX: f32 = 255.0;

/// Wrap a hue angle into `[0, 360)`.
///
/// Hue is circular: values past the end of the range continue from the start and
/// negative values continue from the end.
///
/// # Example
///
/// ```
/// use detaug_imgproc::color::wrap_hue;
///
/// assert_eq!(wrap_hue(370.0), 10.0);
/// assert_eq!(wrap_hue(-15.0), 345.0);
/// ```
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let h = h.rem_euclid(HUE_RANGE);
    // rem_euclid rounds tiny negative inputs up to the range end
    if h >= HUE_RANGE {
        h - HUE_RANGE
    } else {
        h
    }
}

/// Convert an RGB image to an HSV image.
///
/// The input image is assumed to have 3 channels in the order R, G, B.
///
/// # Arguments
///
/// * `src` - The input RGB image with 8-bit channels.
/// * `dst` - The output HSV image.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: The hue channel in degrees, in the range [0, 360).
/// * S: The saturation channel in the range [0, 255].
/// * V: The value channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use detaug_image::{Image, ImageSize};
/// use detaug_imgproc::color::hsv_from_rgb;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///        width: 4,
///        height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// hsv_from_rgb(&image, &mut hsv).unwrap();
///
/// assert_eq!(hsv.num_channels(), 3);
/// assert_eq!(hsv.size().width, 4);
/// assert_eq!(hsv.size().height, 5);
/// ```
pub fn hsv_from_rgb(src: &Image<u8, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // compute the HSV values
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        // Normalize the input to the range [0, 1]
        let r = src_pixel[0] as f32 / CHANNEL_MAX;
        let g = src_pixel[1] as f32 / CHANNEL_MAX;
        let b = src_pixel[2] as f32 / CHANNEL_MAX;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        let s = if max == 0.0 {
            0.0
        } else {
            (delta / max) * CHANNEL_MAX
        };

        dst_pixel[0] = wrap_hue(h);
        dst_pixel[1] = s;
        dst_pixel[2] = max * CHANNEL_MAX;
    });

    Ok(())
}

/// Convert an HSV image to an RGB image.
///
/// The input follows the convention of [`hsv_from_rgb`]: H in degrees, S and V in
/// [0, 255]. Hue is wrapped into [0, 360) and saturation and value are clamped to
/// [0, 255] before the conversion. The output is rounded to the nearest 8-bit value.
///
/// # Arguments
///
/// * `src` - The input HSV image.
/// * `dst` - The output RGB image with 8-bit channels.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use detaug_image::{Image, ImageSize};
/// use detaug_imgproc::color::rgb_from_hsv;
///
/// let hsv = Image::<f32, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![120.0, 255.0, 255.0],
/// )
/// .unwrap();
///
/// let mut rgb = Image::<u8, 3>::from_size_val(hsv.size(), 0).unwrap();
///
/// rgb_from_hsv(&hsv, &mut rgb).unwrap();
///
/// assert_eq!(rgb.as_slice(), &[0, 255, 0]);
/// ```
pub fn rgb_from_hsv(src: &Image<f32, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let h = wrap_hue(src_pixel[0]) / 60.0;
        let s = src_pixel[1].clamp(0.0, CHANNEL_MAX) / CHANNEL_MAX;
        let v = src_pixel[2].clamp(0.0, CHANNEL_MAX) / CHANNEL_MAX;

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        dst_pixel[0] = ((r + m) * CHANNEL_MAX).round().clamp(0.0, CHANNEL_MAX) as u8;
        dst_pixel[1] = ((g + m) * CHANNEL_MAX).round().clamp(0.0, CHANNEL_MAX) as u8;
        dst_pixel[2] = ((b + m) * CHANNEL_MAX).round().clamp(0.0, CHANNEL_MAX) as u8;
    });

    Ok(())
}

/// Shift the hue and scale the saturation and value of an HSV image.
///
/// dst(h) = wrap(src(h) + hue_delta)
/// dst(s) = clamp(src(s) * saturation_factor, 0, 255)
/// dst(v) = clamp(src(v) * value_factor, 0, 255)
///
/// Hue wraps around the circle, saturation and value saturate.
///
/// # Arguments
///
/// * `src` - The input HSV image (H in degrees, S and V in [0, 255]).
/// * `dst` - The output HSV image.
/// * `hue_delta` - Hue shift in degrees.
/// * `saturation_factor` - Multiplier for the saturation channel.
/// * `value_factor` - Multiplier for the value channel.
///
/// # Example
///
/// ```
/// use detaug_image::{Image, ImageSize};
/// use detaug_imgproc::color::adjust_hsv;
///
/// let hsv = Image::<f32, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![350.0, 200.0, 100.0],
/// )
/// .unwrap();
///
/// let mut out = Image::<f32, 3>::from_size_val(hsv.size(), 0.0).unwrap();
///
/// adjust_hsv(&hsv, &mut out, 20.0, 2.0, 0.5).unwrap();
///
/// assert_eq!(out.as_slice(), &[10.0, 255.0, 50.0]);
/// ```
pub fn adjust_hsv(
    src: &Image<f32, 3>,
    dst: &mut Image<f32, 3>,
    hue_delta: f32,
    saturation_factor: f32,
    value_factor: f32,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = wrap_hue(src_pixel[0] + hue_delta);
        dst_pixel[1] = (src_pixel[1] * saturation_factor).clamp(0.0, CHANNEL_MAX);
        dst_pixel[2] = (src_pixel[2] * value_factor).clamp(0.0, CHANNEL_MAX);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use detaug_image::{Image, ImageError, ImageSize};

    #[test]
    fn hsv_from_rgb() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![
                0, 128, 255, 255, 128, 0, 128, 255, 0, 255, 0, 128, 0, 0, 0, 255, 255, 255,
            ],
        )?;

        let expected = [
            209.88235, 255.0, 255.0, 30.117647, 255.0, 255.0, 89.88235, 255.0, 255.0,
            329.88235, 255.0, 255.0, 0.0, 0.0, 0.0, 0.0, 0.0, 255.0,
        ];

        let mut hsv = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;

        super::hsv_from_rgb(&image, &mut hsv)?;

        for (a, b) in hsv.as_slice().iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-3);
        }

        Ok(())
    }

    #[test]
    fn rgb_from_hsv_primaries() -> Result<(), ImageError> {
        let hsv = Image::<f32, 3>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![
                0.0, 255.0, 255.0, 120.0, 255.0, 255.0, 240.0, 255.0, 255.0, 360.0, 0.0, 128.0,
            ],
        )?;

        let mut rgb = Image::<u8, 3>::from_size_val(hsv.size(), 0)?;
        super::rgb_from_hsv(&hsv, &mut rgb)?;

        assert_eq!(
            rgb.as_slice(),
            &[255, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128]
        );
        Ok(())
    }

    #[test]
    fn hsv_round_trip() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 16,
            height: 16,
        };
        // a deterministic spread of colors, including greys and saturated values
        let data = (0..size.area() * 3)
            .map(|i| ((i * 37 + (i / 3) * 11) % 256) as u8)
            .collect::<Vec<_>>();
        let image = Image::<u8, 3>::new(size, data)?;

        let mut hsv = Image::<f32, 3>::from_size_val(size, 0.0)?;
        let mut back = Image::<u8, 3>::from_size_val(size, 0)?;
        super::hsv_from_rgb(&image, &mut hsv)?;
        super::rgb_from_hsv(&hsv, &mut back)?;

        for (a, b) in image.as_slice().iter().zip(back.as_slice()) {
            assert!(a.abs_diff(*b) <= 1, "{a} vs {b}");
        }
        Ok(())
    }

    #[test]
    fn adjust_hsv_wraps_hue() -> Result<(), ImageError> {
        let hsv = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![350.0, 100.0, 100.0, 5.0, 100.0, 100.0],
        )?;
        let mut out = Image::<f32, 3>::from_size_val(hsv.size(), 0.0)?;

        super::adjust_hsv(&hsv, &mut out, 20.0, 1.0, 1.0)?;
        assert_relative_eq!(out.as_slice()[0], 10.0);
        assert_relative_eq!(out.as_slice()[3], 25.0);

        super::adjust_hsv(&hsv, &mut out, -20.0, 1.0, 1.0)?;
        assert_relative_eq!(out.as_slice()[0], 330.0);
        assert_relative_eq!(out.as_slice()[3], 345.0);

        Ok(())
    }

    #[test]
    fn adjust_hsv_clamps_saturation_and_value() -> Result<(), ImageError> {
        let hsv = Image::<f32, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![0.0, 200.0, 180.0],
        )?;
        let mut out = Image::<f32, 3>::from_size_val(hsv.size(), 0.0)?;

        super::adjust_hsv(&hsv, &mut out, 0.0, 1.5, 1.5)?;
        assert_eq!(out.as_slice(), &[0.0, 255.0, 255.0]);

        super::adjust_hsv(&hsv, &mut out, 0.0, 0.5, 0.25)?;
        assert_eq!(out.as_slice(), &[0.0, 100.0, 45.0]);

        Ok(())
    }

    #[test]
    fn wrap_hue() {
        assert_eq!(super::wrap_hue(0.0), 0.0);
        assert_eq!(super::wrap_hue(360.0), 0.0);
        assert_eq!(super::wrap_hue(720.5), 0.5);
        assert_eq!(super::wrap_hue(-360.0), 0.0);
        assert!(super::wrap_hue(-1e-9) < super::HUE_RANGE);
    }
}
