#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image cropping module.
pub mod crop;

/// image flipping module.
pub mod flip;

/// module containing parallization utilities.
pub mod parallel;

/// constant border padding module.
pub mod padding;

/// utility functions for resizing images.
pub mod resize;
