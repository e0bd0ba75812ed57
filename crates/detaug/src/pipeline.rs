use detaug_image::{Image, ImageSize};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use crate::{
    boxes::BoundingBox,
    config::{AugmentConfig, InvalidBoxPolicy},
    error::{AugmentError, GeometryError},
    flip::FlipDecision,
    input::Instance,
    photometric::ColorJitter,
    plan::GeometryPlan,
    random::RandomSource,
    resample::resample,
    transform::transform_box,
};

/// Every random decision of one augmentation.
///
/// The same parameters drive the pixel and the box stages, so the boxes always
/// follow the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugmentParams {
    /// Resize and placement on the canvas.
    pub plan: GeometryPlan,
    /// Mirrors applied to the canvas.
    pub flip: FlipDecision,
    /// Color distortion applied after mirroring.
    pub color: ColorJitter,
}

impl AugmentParams {
    /// Parameters that return the image and boxes unchanged.
    pub fn identity(size: ImageSize) -> Result<Self, GeometryError> {
        Ok(Self {
            plan: GeometryPlan::identity(size)?,
            flip: FlipDecision::NONE,
            color: ColorJitter::IDENTITY,
        })
    }
}

/// The result of augmenting an [`Instance`].
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedInstance<L = ()> {
    /// The canvas image, of the configured network size.
    pub image: Image<u8, 3>,
    /// The boxes that survived, in canvas coordinates and input order.
    pub boxes: Vec<BoundingBox<L>>,
    /// The parameters used.
    pub params: AugmentParams,
}

/// Random joint augmentation of images and boxes.
///
/// The stages run in a fixed order: resize and composite on the canvas, mirror,
/// distort colors. Boxes go through the same resize, placement and mirrors.
///
/// # Examples
///
/// ```
/// use detaug::{AugmentConfig, Augmenter, BoundingBox, Instance};
/// use detaug_image::{Image, ImageSize};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let net_size = ImageSize { width: 64, height: 64 };
/// let augmenter = Augmenter::new(AugmentConfig::new(net_size)).unwrap();
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 120, height: 80 }, 50).unwrap();
/// let instance = Instance::new(image, vec![BoundingBox::new(10.0, 60.0, 20.0, 70.0)]);
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let out = augmenter.augment(&instance, &mut rng).unwrap();
///
/// assert_eq!(out.image.size(), net_size);
/// assert!(out.boxes.len() <= 1);
/// ```
#[derive(Debug, Clone)]
pub struct Augmenter {
    config: AugmentConfig,
}

impl Augmenter {
    /// Create an augmenter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidConfig`] if the configuration is out of range.
    pub fn new(config: AugmentConfig) -> Result<Self, AugmentError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &AugmentConfig {
        &self.config
    }

    /// Draw the parameters for an image of `image_size`.
    ///
    /// Draws, in order: height jitter, width jitter, scale, dx, dy, horizontal flip,
    /// vertical flip, hue, saturation, saturation inversion, exposure, exposure
    /// inversion.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::Geometry`] if no usable plan can be drawn.
    pub fn sample(
        &self,
        image_size: ImageSize,
        rng: &mut impl RandomSource,
    ) -> Result<AugmentParams, AugmentError> {
        let config = &self.config;

        let plan = GeometryPlan::sample(
            image_size,
            config.net_size,
            config.jitter,
            config.scale_range,
            rng,
        )?;
        let flip = FlipDecision::sample(rng);
        let color = ColorJitter::sample(config.hue, config.saturation, config.exposure, rng);

        debug!(
            "sampled plan: {} -> {} at ({}, {}), flip: {:?}, color: {:?}",
            image_size, plan.new_size, plan.dx, plan.dy, flip, color
        );

        Ok(AugmentParams { plan, flip, color })
    }

    /// Apply fixed parameters to an instance.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::Geometry`] if the parameters do not fit the image or
    /// the configured canvas, and [`AugmentError::InvalidBoxInput`] for a malformed
    /// box under [`InvalidBoxPolicy::Reject`].
    pub fn apply<L: Clone>(
        &self,
        instance: &Instance<L>,
        params: &AugmentParams,
    ) -> Result<AugmentedInstance<L>, AugmentError> {
        if params.plan.canvas_size != self.config.net_size {
            return Err(GeometryError::CanvasMismatch {
                planned: params.plan.canvas_size,
                configured: self.config.net_size,
            }
            .into());
        }

        let accepted = self.accepted_boxes(instance)?;

        let canvas = resample(
            &instance.image,
            &params.plan,
            self.config.fill_value,
            self.config.interpolation,
        )?;
        let canvas = params.flip.apply(canvas)?;
        let image = params.color.apply(canvas)?;

        let boxes: Vec<_> = accepted
            .into_iter()
            .filter_map(|bbox| transform_box(bbox, &params.plan, params.flip))
            .collect();

        if boxes.len() < instance.boxes.len() {
            debug!(
                "{} of {} boxes kept on the canvas",
                boxes.len(),
                instance.boxes.len()
            );
        }

        Ok(AugmentedInstance {
            image,
            boxes,
            params: *params,
        })
    }

    /// Sample parameters and apply them.
    ///
    /// # Errors
    ///
    /// See [`Augmenter::sample`] and [`Augmenter::apply`].
    pub fn augment<L: Clone>(
        &self,
        instance: &Instance<L>,
        rng: &mut impl RandomSource,
    ) -> Result<AugmentedInstance<L>, AugmentError> {
        if self.config.invalid_boxes == InvalidBoxPolicy::Reject {
            instance.validate_boxes()?;
        }

        let params = self.sample(instance.image.size(), rng)?;
        self.apply(instance, &params)
    }

    /// Augment a batch of instances in parallel.
    ///
    /// Instance `i` draws from its own generator seeded from `seed` and `i`, so the
    /// result does not depend on the number of threads.
    pub fn augment_batch<L: Clone + Send + Sync>(
        &self,
        instances: &[Instance<L>],
        seed: u64,
    ) -> Vec<Result<AugmentedInstance<L>, AugmentError>> {
        instances
            .par_iter()
            .enumerate()
            .map(|(index, instance)| {
                let mut rng = StdRng::seed_from_u64(instance_seed(seed, index));
                self.augment(instance, &mut rng)
            })
            .collect()
    }

    fn accepted_boxes<'a, L>(
        &self,
        instance: &'a Instance<L>,
    ) -> Result<Vec<&'a BoundingBox<L>>, AugmentError> {
        let mut accepted = Vec::with_capacity(instance.boxes.len());
        for (index, bbox) in instance.boxes.iter().enumerate() {
            match (bbox.validate(), self.config.invalid_boxes) {
                (Ok(()), _) => accepted.push(bbox),
                (Err(reason), InvalidBoxPolicy::Reject) => {
                    return Err(AugmentError::InvalidBoxInput { index, reason });
                }
                (Err(reason), InvalidBoxPolicy::Drop) => {
                    debug!("dropping input box {index}: {reason}");
                }
            }
        }
        Ok(accepted)
    }
}

fn instance_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
