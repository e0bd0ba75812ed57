use detaug_image::ImageSize;
use detaug_imgproc::padding::Padding2D;

use crate::{
    error::{Axis, GeometryError},
    random::RandomSource,
};

/// Where a resized image lands on the network canvas.
///
/// The resized image of size `new_size` is placed with its top-left corner at
/// `(dx, dy)` on a canvas of size `canvas_size`. Negative offsets crop the resized
/// image, positive offsets pad it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryPlan {
    /// Size of the image the plan was computed for.
    pub source_size: ImageSize,
    /// Size of the image after resizing.
    pub new_size: ImageSize,
    /// Size of the output canvas.
    pub canvas_size: ImageSize,
    /// Horizontal placement of the resized image on the canvas.
    pub dx: i64,
    /// Vertical placement of the resized image on the canvas.
    pub dy: i64,
    /// Horizontal scale from source to resized pixels.
    pub scale_x: f32,
    /// Vertical scale from source to resized pixels.
    pub scale_y: f32,
}

/// The part of the resized image visible on the canvas and the border around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasWindow {
    /// Left column of the visible region in the resized image.
    pub crop_x: usize,
    /// Top row of the visible region in the resized image.
    pub crop_y: usize,
    /// Size of the visible region.
    pub visible: ImageSize,
    /// Border added around the visible region to fill the canvas.
    pub padding: Padding2D,
}

impl GeometryPlan {
    /// Draw a random plan.
    ///
    /// The aspect ratio of the source is jittered by up to `jitter` times each side,
    /// the longer side is scaled to `s` times the matching canvas side with
    /// `s ~ U(scale_range)`, and the offsets are drawn over the size difference.
    ///
    /// Draws, in order: height jitter, width jitter, scale, dx, dy.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the source or canvas is empty, if the jittered
    /// aspect ratio is not a positive finite number, or if the resized image would
    /// lose a side after rounding.
    pub fn sample(
        source_size: ImageSize,
        canvas_size: ImageSize,
        jitter: f32,
        scale_range: (f32, f32),
        rng: &mut impl RandomSource,
    ) -> Result<Self, GeometryError> {
        if source_size.is_empty() {
            return Err(GeometryError::EmptySource(source_size));
        }
        if canvas_size.is_empty() {
            return Err(GeometryError::EmptyCanvas(canvas_size));
        }

        let image_w = source_size.width as f32;
        let image_h = source_size.height as f32;
        let net_w = canvas_size.width as f32;
        let net_h = canvas_size.height as f32;

        let dh = image_h * jitter;
        let dw = image_w * jitter;
        let jittered_h = image_h + rng.uniform(-dh, dh);
        let jittered_w = image_w + rng.uniform(-dw, dw);
        let new_ar = jittered_h / jittered_w;
        if !new_ar.is_finite() || new_ar <= 0.0 {
            return Err(GeometryError::InvalidAspectRatio(new_ar));
        }

        let scale = rng.uniform(scale_range.0, scale_range.1);
        let (new_w, new_h) = if new_ar > 1.0 {
            let new_h = (net_h * scale).round();
            ((new_h / new_ar).round(), new_h)
        } else {
            let new_w = (net_w * scale).round();
            (new_w, (new_w * new_ar).round())
        };

        if !(new_w >= 1.0 && new_h >= 1.0 && new_w.is_finite() && new_h.is_finite()) {
            return Err(GeometryError::NonPositiveSize {
                width: new_w as i64,
                height: new_h as i64,
            });
        }

        let new_size = ImageSize {
            width: new_w as usize,
            height: new_h as usize,
        };

        let diff_w = canvas_size.width as i64 - new_size.width as i64;
        let diff_h = canvas_size.height as i64 - new_size.height as i64;
        let dx = rng.uniform(0.0, diff_w as f32).floor() as i64;
        let dy = rng.uniform(0.0, diff_h as f32).floor() as i64;

        Self::from_offsets(source_size, new_size, canvas_size, dx, dy)
    }

    /// Build a plan from explicit sizes and offsets.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the plan does not pass [`GeometryPlan::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use detaug::plan::GeometryPlan;
    /// use detaug_image::ImageSize;
    ///
    /// let plan = GeometryPlan::from_offsets(
    ///     ImageSize { width: 100, height: 100 },
    ///     ImageSize { width: 50, height: 50 },
    ///     ImageSize { width: 64, height: 64 },
    ///     7,
    ///     0,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(plan.scale_x, 0.5);
    /// assert_eq!(plan.window().unwrap().padding.right, 7);
    /// ```
    pub fn from_offsets(
        source_size: ImageSize,
        new_size: ImageSize,
        canvas_size: ImageSize,
        dx: i64,
        dy: i64,
    ) -> Result<Self, GeometryError> {
        if source_size.is_empty() {
            return Err(GeometryError::EmptySource(source_size));
        }

        let plan = Self {
            source_size,
            new_size,
            canvas_size,
            dx,
            dy,
            scale_x: new_size.width as f32 / source_size.width as f32,
            scale_y: new_size.height as f32 / source_size.height as f32,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// A plan that leaves the image untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySource`] for an empty size.
    pub fn identity(size: ImageSize) -> Result<Self, GeometryError> {
        Self::from_offsets(size, size, size, 0, 0)
    }

    /// Check that the plan describes a window inside the resized image and a
    /// non-negative border on every side.
    ///
    /// # Errors
    ///
    /// Returns the first [`GeometryError`] found.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.source_size.is_empty() {
            return Err(GeometryError::EmptySource(self.source_size));
        }
        if self.canvas_size.is_empty() {
            return Err(GeometryError::EmptyCanvas(self.canvas_size));
        }
        if self.new_size.is_empty() {
            return Err(GeometryError::NonPositiveSize {
                width: self.new_size.width as i64,
                height: self.new_size.height as i64,
            });
        }

        check_axis(Axis::X, self.dx, self.new_size.width, self.canvas_size.width)?;
        check_axis(Axis::Y, self.dy, self.new_size.height, self.canvas_size.height)?;
        Ok(())
    }

    /// Compute the crop and padding that composite the resized image on the canvas.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the plan is invalid.
    pub fn window(&self) -> Result<CanvasWindow, GeometryError> {
        self.validate()?;

        let (crop_x, visible_w, left, right) =
            axis_window(self.dx, self.new_size.width, self.canvas_size.width);
        let (crop_y, visible_h, top, bottom) =
            axis_window(self.dy, self.new_size.height, self.canvas_size.height);

        Ok(CanvasWindow {
            crop_x,
            crop_y,
            visible: ImageSize {
                width: visible_w,
                height: visible_h,
            },
            padding: Padding2D {
                top,
                bottom,
                left,
                right,
            },
        })
    }
}

fn check_axis(axis: Axis, offset: i64, resized: usize, canvas: usize) -> Result<(), GeometryError> {
    let diff = canvas as i64 - resized as i64;
    let ok = if diff >= 0 {
        (0..=diff).contains(&offset)
    } else {
        (diff..=0).contains(&offset)
    };

    if ok {
        Ok(())
    } else {
        Err(GeometryError::WindowOutOfBounds {
            axis,
            offset,
            resized,
            canvas,
        })
    }
}

// (crop start, visible extent, pad before, pad after) for a validated axis
fn axis_window(offset: i64, resized: usize, canvas: usize) -> (usize, usize, usize, usize) {
    let crop = offset.min(0).unsigned_abs() as usize;
    let visible = resized.min(canvas);
    let before = offset.max(0) as usize;
    (crop, visible, before, canvas - visible - before)
}
