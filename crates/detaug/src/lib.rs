#![deny(missing_docs)]
//! Joint image and bounding-box augmentation for object detection training.
//!
//! An [`Augmenter`] resizes an image with a jittered aspect ratio, places it on a
//! fixed-size canvas, mirrors it and distorts its colors, while mapping the
//! annotated boxes through the same geometry.

/// bounding box type.
pub mod boxes;

/// pipeline configuration.
pub mod config;

/// Error types for the augmentation pipeline.
pub mod error;

/// flip decisions.
pub mod flip;

/// input instances and image adapters.
pub mod input;

/// HSV color distortion.
pub mod photometric;

/// the full augmentation pipeline.
pub mod pipeline;

/// geometry planning.
pub mod plan;

/// random sources.
pub mod random;

/// resizing and canvas compositing.
pub mod resample;

/// box transformation.
pub mod transform;

pub use crate::boxes::{BoundingBox, BoxDefect};
pub use crate::config::{AugmentConfig, InvalidBoxPolicy};
pub use crate::error::{AugmentError, GeometryError};
pub use crate::flip::FlipDecision;
pub use crate::input::{rgb8_from_dynamic, rgb8_from_raw, Instance};
pub use crate::photometric::ColorJitter;
pub use crate::pipeline::{AugmentParams, AugmentedInstance, Augmenter};
pub use crate::plan::GeometryPlan;
pub use crate::random::{RandomSource, ScriptedSource};
