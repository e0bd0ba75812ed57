use rayon::prelude::*;

use detaug_image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// The image is split in rows and every row is processed on the rayon pool; within a
/// row the pixels are visited sequentially.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use detaug_image::{Image, ImageError, ImageSize};

    #[test]
    fn par_iter_rows_visits_every_pixel() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let src = Image::<u8, 3>::new(size, (0..18).collect())?;
        let mut dst = Image::<u16, 1>::from_size_val(size, 0)?;

        super::par_iter_rows(&src, &mut dst, |src_pixel, dst_pixel| {
            dst_pixel[0] = src_pixel.iter().map(|&v| v as u16).sum();
        });

        assert_eq!(dst.as_slice(), &[3, 12, 21, 30, 39, 48]);
        Ok(())
    }
}
