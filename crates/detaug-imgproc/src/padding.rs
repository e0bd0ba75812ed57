use detaug_image::{Image, ImageError, ImageSize};
use rayon::prelude::*;

/// Border widths, in pixels, on each side of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding2D {
    /// Rows added above.
    pub top: usize,
    /// Rows added below.
    pub bottom: usize,
    /// Columns added on the left.
    pub left: usize,
    /// Columns added on the right.
    pub right: usize,
}

impl Padding2D {
    /// Size of an image of size `inner` once the border is added.
    ///
    /// ```rust
    /// use detaug_image::ImageSize;
    /// use detaug_imgproc::padding::Padding2D;
    ///
    /// let padding = Padding2D { top: 1, bottom: 0, left: 3, right: 2 };
    /// let padded = padding.padded_size(ImageSize { width: 4, height: 4 });
    ///
    /// assert_eq!(padded, ImageSize { width: 9, height: 5 });
    /// ```
    pub fn padded_size(&self, inner: ImageSize) -> ImageSize {
        ImageSize {
            width: inner.width + self.left + self.right,
            height: inner.height + self.top + self.bottom,
        }
    }

    /// Whether the border is empty on every side.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Surround `src` with a border of `constant_value` and write the result to `dst`.
///
/// `src` lands at column `padding.left` and row `padding.top` of `dst`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] unless `dst` has the size of `src` grown
/// by `padding`.
///
/// # Example
///
/// ```rust
/// use detaug_image::{Image, ImageSize};
/// use detaug_imgproc::padding::{constant_padding, Padding2D};
///
/// let src = Image::<u8, 3>::from_size_pixel(ImageSize { width: 2, height: 1 }, [10, 20, 30]).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(ImageSize { width: 3, height: 3 }, 0).unwrap();
///
/// let padding = Padding2D { top: 1, bottom: 1, left: 1, right: 0 };
/// constant_padding(&src, &mut dst, padding, [127u8; 3]).unwrap();
///
/// assert_eq!(dst.get_pixel(0, 1).unwrap(), &[127, 127, 127]);
/// assert_eq!(dst.get_pixel(2, 1).unwrap(), &[10, 20, 30]);
/// assert_eq!(dst.get_pixel(2, 2).unwrap(), &[127, 127, 127]);
/// ```
pub fn constant_padding<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    padding: Padding2D,
    constant_value: [T; C],
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    let expected = padding.padded_size(src.size());
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let dst_stride = dst.width() * C;
    if dst_stride == 0 {
        return Ok(());
    }

    let src_stride = src.width() * C;
    let inner_rows = padding.top..padding.top + src.height();
    let left = padding.left * C;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_stride)
        .enumerate()
        .for_each(|(row, dst_row)| {
            if src_stride == 0 || !inner_rows.contains(&row) {
                dst_row
                    .chunks_exact_mut(C)
                    .for_each(|px| px.copy_from_slice(&constant_value));
                return;
            }

            let offset = (row - padding.top) * src_stride;
            let (before, rest) = dst_row.split_at_mut(left);
            let (inner, after) = rest.split_at_mut(src_stride);

            inner.copy_from_slice(&src_data[offset..offset + src_stride]);
            before
                .chunks_exact_mut(C)
                .chain(after.chunks_exact_mut(C))
                .for_each(|px| px.copy_from_slice(&constant_value));
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use detaug_image::{Image, ImageError, ImageSize};

    use super::{constant_padding, Padding2D};

    // 2x2 image whose pixels are 1, 2, 3, 4 in raster order
    fn numbered() -> Result<Image<u8, 3>, ImageError> {
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            [1u8, 2, 3, 4].iter().flat_map(|&v| [v; 3]).collect(),
        )
    }

    fn canvas(width: usize, height: usize) -> Result<Image<u8, 3>, ImageError> {
        Image::from_size_val(ImageSize { width, height }, 0)
    }

    #[test]
    fn padded_size() {
        let padding = Padding2D {
            top: 2,
            bottom: 3,
            left: 0,
            right: 1,
        };
        let inner = ImageSize {
            width: 5,
            height: 5,
        };
        assert_eq!(
            padding.padded_size(inner),
            ImageSize {
                width: 6,
                height: 10
            }
        );
        assert!(!padding.is_zero());
        assert!(Padding2D::default().is_zero());
    }

    #[test]
    fn border_on_all_sides() -> Result<(), ImageError> {
        let src = numbered()?;
        let mut dst = canvas(4, 4)?;
        let padding = Padding2D {
            top: 1,
            bottom: 1,
            left: 1,
            right: 1,
        };

        constant_padding(&src, &mut dst, padding, [9, 9, 9])?;

        for (x, y) in [(0, 0), (3, 3), (1, 0), (3, 1), (0, 2), (2, 3)] {
            assert_eq!(dst.get_pixel(x, y)?, &[9, 9, 9], "({x}, {y})");
        }
        assert_eq!(dst.get_pixel(1, 1)?, &[1, 1, 1]);
        assert_eq!(dst.get_pixel(2, 1)?, &[2, 2, 2]);
        assert_eq!(dst.get_pixel(1, 2)?, &[3, 3, 3]);
        assert_eq!(dst.get_pixel(2, 2)?, &[4, 4, 4]);
        Ok(())
    }

    #[test]
    fn uneven_border() -> Result<(), ImageError> {
        let src = numbered()?;
        let mut dst = canvas(3, 4)?;
        let padding = Padding2D {
            top: 0,
            bottom: 2,
            left: 1,
            right: 0,
        };

        constant_padding(&src, &mut dst, padding, [7, 8, 9])?;

        assert_eq!(dst.get_pixel(0, 0)?, &[7, 8, 9]);
        assert_eq!(dst.get_pixel(1, 0)?, &[1, 1, 1]);
        assert_eq!(dst.get_pixel(2, 1)?, &[4, 4, 4]);
        assert_eq!(dst.get_pixel(2, 3)?, &[7, 8, 9]);
        Ok(())
    }

    #[test]
    fn no_border_copies() -> Result<(), ImageError> {
        let src = numbered()?;
        let mut dst = canvas(2, 2)?;
        constant_padding(&src, &mut dst, Padding2D::default(), [0, 0, 0])?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn wrong_destination_size() -> Result<(), ImageError> {
        let src = numbered()?;
        let mut dst = canvas(3, 4)?;
        let padding = Padding2D {
            top: 1,
            bottom: 1,
            left: 1,
            right: 1,
        };

        let res = constant_padding(&src, &mut dst, padding, [0, 0, 0]);
        assert_eq!(res, Err(ImageError::InvalidImageSize(3, 4, 4, 4)));
        Ok(())
    }
}
