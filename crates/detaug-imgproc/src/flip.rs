use detaug_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

/// Flip the input image horizontally.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (H, W, C).
///
/// # Errors
///
/// Returns an error if `src` and `dst` have different sizes.
///
/// # Example
///
/// ```
/// use detaug_image::{Image, ImageSize};
/// use detaug_imgproc::flip::horizontal_flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let mut flipped = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// horizontal_flip(&image, &mut flipped).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[1u8, 0, 3, 2, 5, 4]);
/// ```
pub fn horizontal_flip<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if src.size().is_empty() {
        return Ok(());
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(src.cols() * C)
        .zip_eq(src.as_slice().par_chunks_exact(src.cols() * C))
        .for_each(|(dst_row, src_row)| {
            dst_row
                .chunks_exact_mut(C)
                .zip(src_row.chunks_exact(C).rev())
                .for_each(|(dst_pixel, src_pixel)| {
                    dst_pixel.copy_from_slice(src_pixel);
                })
        });

    Ok(())
}

/// Flip the input image vertically.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (H, W, C).
///
/// # Errors
///
/// Returns an error if `src` and `dst` have different sizes.
///
/// # Example
///
/// ```
/// use detaug_image::{Image, ImageSize};
/// use detaug_imgproc::flip::vertical_flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let mut flipped = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// vertical_flip(&image, &mut flipped).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[4u8, 5, 2, 3, 0, 1]);
/// ```
pub fn vertical_flip<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if src.size().is_empty() {
        return Ok(());
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(src.cols() * C)
        .zip_eq(src.as_slice().par_chunks_exact(src.cols() * C).rev())
        .for_each(|(dst_row, src_row)| {
            dst_row.copy_from_slice(src_row);
        });

    Ok(())
}
