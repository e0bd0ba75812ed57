use detaug_image::{ImageError, ImageSize};

use crate::boxes::BoxDefect;

/// Image axis, used to report which side of a plan is inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal axis (columns).
    X,
    /// The vertical axis (rows).
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors raised when a geometry plan cannot be honoured.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The source image has no pixels.
    #[error("source image is empty ({0})")]
    EmptySource(ImageSize),

    /// The target canvas has no pixels.
    #[error("canvas is empty ({0})")]
    EmptyCanvas(ImageSize),

    /// The jittered aspect ratio is zero, negative, or not finite.
    #[error("sampled aspect ratio {0} is not a positive finite number")]
    InvalidAspectRatio(f32),

    /// The resized image would have a zero or negative side.
    #[error("resized image would be {width}x{height}, both sides must be positive")]
    NonPositiveSize {
        /// Planned width after rounding.
        width: i64,
        /// Planned height after rounding.
        height: i64,
    },

    /// The offset would place the canvas window outside the resized image, or
    /// require negative padding.
    #[error(
        "offset {offset} on the {axis} axis is invalid for a resized extent of {resized} \
         on a canvas of {canvas}"
    )]
    WindowOutOfBounds {
        /// Axis of the bad offset.
        axis: Axis,
        /// The offset from the plan.
        offset: i64,
        /// Resized image extent along the axis.
        resized: usize,
        /// Canvas extent along the axis.
        canvas: usize,
    },

    /// The plan was computed for a different image.
    #[error("plan expects a source of {expected}, got {actual}")]
    SourceMismatch {
        /// Source size recorded in the plan.
        expected: ImageSize,
        /// Size of the image handed to the stage.
        actual: ImageSize,
    },

    /// The plan targets a different canvas than the configured one.
    #[error("plan targets a canvas of {planned}, the configuration expects {configured}")]
    CanvasMismatch {
        /// Canvas recorded in the plan.
        planned: ImageSize,
        /// Canvas from the configuration.
        configured: ImageSize,
    },
}

/// An error type for the augmentation pipeline.
#[derive(thiserror::Error, Debug)]
pub enum AugmentError {
    /// The geometry plan is unusable.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// An input box violates `xmin <= xmax`, `ymin <= ymax` or is not finite.
    #[error("input box {index} is invalid: {reason}")]
    InvalidBoxInput {
        /// Position of the box in the input list.
        index: usize,
        /// What is wrong with the box.
        reason: BoxDefect,
    },

    /// The image is not 3-channel, 8 bits per channel.
    #[error("unsupported color format: {channels} channel(s) at {bits} bit(s) per channel")]
    UnsupportedColorFormat {
        /// Number of channels of the input.
        channels: usize,
        /// Bits per channel of the input.
        bits: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error from the image containers or kernels.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error while parsing a JSON configuration.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
