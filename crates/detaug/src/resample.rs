use detaug_image::Image;
use detaug_imgproc::{
    crop::crop_image,
    padding::constant_padding,
    resize::{resize_fast, InterpolationMode},
};

use crate::{
    error::{AugmentError, GeometryError},
    plan::GeometryPlan,
};

/// Resize `src` and composite it on the canvas described by `plan`.
///
/// The image is resized to `plan.new_size`, cropped to the part that falls on the
/// canvas and surrounded by `fill_value` where the canvas is not covered.
///
/// # Arguments
///
/// * `src` - The source image, of size `plan.source_size`.
/// * `plan` - The geometry plan.
/// * `fill_value` - The color of the uncovered canvas area.
/// * `interpolation` - The interpolation used by the resize.
///
/// # Returns
///
/// An image of size `plan.canvas_size`.
///
/// # Errors
///
/// Returns [`AugmentError::Geometry`] if the plan is invalid or was computed for
/// another image. Nothing is resized in that case.
pub fn resample(
    src: &Image<u8, 3>,
    plan: &GeometryPlan,
    fill_value: [u8; 3],
    interpolation: InterpolationMode,
) -> Result<Image<u8, 3>, AugmentError> {
    if src.size() != plan.source_size {
        return Err(GeometryError::SourceMismatch {
            expected: plan.source_size,
            actual: src.size(),
        }
        .into());
    }

    let window = plan.window()?;

    let mut resized = Image::<u8, 3>::from_size_val(plan.new_size, 0)?;
    resize_fast(src, &mut resized, interpolation)?;

    let visible = if window.visible == plan.new_size {
        resized
    } else {
        let mut cropped = Image::<u8, 3>::from_size_val(window.visible, 0)?;
        crop_image(&resized, &mut cropped, window.crop_x, window.crop_y)?;
        cropped
    };

    if window.padding.is_zero() {
        return Ok(visible);
    }

    let mut canvas = Image::<u8, 3>::from_size_val(plan.canvas_size, 0)?;
    constant_padding(&visible, &mut canvas, window.padding, fill_value)?;

    Ok(canvas)
}
