use detaug_image::{Image, ImageError};
use detaug_imgproc::flip::{horizontal_flip, vertical_flip};

use crate::random::RandomSource;

/// Which mirrors to apply to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipDecision {
    /// Mirror left to right.
    pub horizontal: bool,
    /// Mirror top to bottom.
    pub vertical: bool,
}

impl FlipDecision {
    /// No mirroring.
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };

    /// Draw both mirrors independently with probability one half.
    ///
    /// Draws, in order: horizontal, vertical.
    pub fn sample(rng: &mut impl RandomSource) -> Self {
        let horizontal = rng.coin();
        let vertical = rng.coin();
        Self {
            horizontal,
            vertical,
        }
    }

    /// Whether the decision mirrors nothing.
    pub fn is_none(&self) -> bool {
        !self.horizontal && !self.vertical
    }

    /// Mirror `image` according to the decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch buffer cannot be allocated.
    pub fn apply<T, const C: usize>(&self, image: Image<T, C>) -> Result<Image<T, C>, ImageError>
    where
        T: Copy + Send + Sync + Default,
    {
        if self.is_none() {
            return Ok(image);
        }

        let mut src = image;
        let mut dst = Image::<T, C>::from_size_val(src.size(), T::default())?;

        if self.horizontal {
            horizontal_flip(&src, &mut dst)?;
            std::mem::swap(&mut src, &mut dst);
        }

        if self.vertical {
            vertical_flip(&src, &mut dst)?;
            std::mem::swap(&mut src, &mut dst);
        }

        Ok(src)
    }
}

#[cfg(test)]
mod tests {
    use detaug_image::{Image, ImageError, ImageSize};

    use super::FlipDecision;
    use crate::random::ScriptedSource;

    fn image() -> Result<Image<u8, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 1, 2, 3, 4, 5],
        )
    }

    #[test]
    fn sample_order() {
        let mut rng = ScriptedSource::new([], [false, true]);
        assert_eq!(
            FlipDecision::sample(&mut rng),
            FlipDecision {
                horizontal: false,
                vertical: true
            }
        );
    }

    #[test]
    fn apply_none() -> Result<(), ImageError> {
        assert_eq!(FlipDecision::NONE.apply(image()?)?, image()?);
        Ok(())
    }

    #[test]
    fn apply_each_axis() -> Result<(), ImageError> {
        let h = FlipDecision {
            horizontal: true,
            vertical: false,
        };
        assert_eq!(h.apply(image()?)?.as_slice(), &[2, 1, 0, 5, 4, 3]);

        let v = FlipDecision {
            horizontal: false,
            vertical: true,
        };
        assert_eq!(v.apply(image()?)?.as_slice(), &[3, 4, 5, 0, 1, 2]);

        let both = FlipDecision {
            horizontal: true,
            vertical: true,
        };
        assert_eq!(both.apply(image()?)?.as_slice(), &[5, 4, 3, 2, 1, 0]);
        Ok(())
    }

    #[test]
    fn apply_twice_restores() -> Result<(), ImageError> {
        let both = FlipDecision {
            horizontal: true,
            vertical: true,
        };
        assert_eq!(both.apply(both.apply(image()?)?)?, image()?);
        Ok(())
    }
}
