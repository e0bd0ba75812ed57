use detaug_image::{Image, ImageError};
use fast_image_resize as fr;
use serde::{Deserialize, Serialize};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

impl InterpolationMode {
    fn resize_alg(self) -> fr::ResizeAlg {
        match self {
            InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
        }
    }
}

/// Resize an RGB image to the size of `dst` with [fast_image_resize](https://crates.io/crates/fast_image_resize).
///
/// Images of equal size are copied without interpolation.
///
/// # Arguments
///
/// * `src` - The image to resize.
/// * `dst` - The output image, its size is the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use detaug_image::{Image, ImageSize};
/// use detaug_imgproc::resize::{resize_fast, InterpolationMode};
///
/// let src = Image::<u8, 3>::from_size_pixel(ImageSize { width: 100, height: 80 }, [0, 128, 255]).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(ImageSize { width: 50, height: 40 }, 0).unwrap();
///
/// resize_fast(&src, &mut dst, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(dst.get_pixel(49, 39).unwrap(), &[0, 128, 255]);
/// ```
///
/// # Errors
///
/// Returns [`ImageError::ZeroSize`] if either image is empty, and
/// [`ImageError::IncompatiblePixelTypes`] if fast_image_resize rejects the buffers.
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::ZeroSize(src.width(), src.height()));
    }

    if dst.size().is_empty() {
        return Err(ImageError::ZeroSize(dst.width(), dst.height()));
    }

    // same size, nothing to interpolate
    if src.size() == dst.size() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    // prepare the input image for the fast_image_resize crate
    let src_image = fr::images::ImageRef::new(
        src.width() as u32,
        src.height() as u32,
        src.as_slice(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::IncompatiblePixelTypes(e.to_string()))?;

    // prepare the output image for the fast_image_resize crate
    let (dst_width, dst_height) = (dst.width() as u32, dst.height() as u32);
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::IncompatiblePixelTypes(e.to_string()))?;

    let options = fr::ResizeOptions::new().resize_alg(interpolation.resize_alg());

    fr::Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ImageError::IncompatiblePixelTypes(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use detaug_image::{Image, ImageError, ImageSize};

    use super::InterpolationMode;

    #[test]
    fn resize_fast_downscale_nearest() -> Result<(), ImageError> {
        // 4x2 image, each pixel stores its column in the red channel
        let data = (0..2)
            .flat_map(|_| (0..4u8).flat_map(|x| [x * 10, 0, 0]))
            .collect();
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 4,
                height: 2,
            },
            data,
        )?;

        let mut resized = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 1,
            },
            0,
        )?;
        super::resize_fast(&image, &mut resized, InterpolationMode::Nearest)?;

        assert_eq!(resized.size().width, 2);
        assert_eq!(resized.size().height, 1);
        // each output pixel comes from one of the two columns it covers
        let left = resized.get_pixel(0, 0)?[0];
        let right = resized.get_pixel(1, 0)?[0];
        assert!(left == 0 || left == 10, "{left}");
        assert!(right == 20 || right == 30, "{right}");
        Ok(())
    }

    #[test]
    fn resize_fast_constant_image() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_pixel(
            ImageSize {
                width: 10,
                height: 8,
            },
            [10, 200, 30],
        )?;

        for mode in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            let mut upscaled = Image::<u8, 3>::from_size_val(
                ImageSize {
                    width: 25,
                    height: 13,
                },
                0,
            )?;
            super::resize_fast(&image, &mut upscaled, mode)?;
            // fixed point convolution may be off by one
            for px in upscaled.as_slice().chunks_exact(3) {
                for (&a, &b) in px.iter().zip([10u8, 200, 30].iter()) {
                    assert!(a.abs_diff(b) <= 1, "{a} vs {b}");
                }
            }
        }

        Ok(())
    }

    #[test]
    fn resize_fast_same_size_is_copy() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let image = Image::<u8, 3>::new(size, (0..18).collect())?;
        let mut resized = Image::<u8, 3>::from_size_val(size, 0)?;

        super::resize_fast(&image, &mut resized, InterpolationMode::Bilinear)?;
        assert_eq!(resized, image);
        Ok(())
    }

    #[test]
    fn resize_fast_rejects_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;
        let mut empty = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 0,
                height: 4,
            },
            0,
        )?;

        let res = super::resize_fast(&image, &mut empty, InterpolationMode::Bilinear);
        assert_eq!(res, Err(ImageError::ZeroSize(0, 4)));
        Ok(())
    }
}
