/// An error type for the image containers.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two image sizes are expected to match.
    #[error("Image size mismatch: ({0}x{1}) vs ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when an image with zero width or height is requested.
    #[error("Image size must be non-zero, got {0}x{1}")]
    ZeroSize(usize, usize),

    /// Error when a pixel coordinate lies outside the image.
    #[error("Pixel index ({0}, {1}) out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a rectangular region does not fit inside the image.
    #[error("Region at ({0}, {1}) of size {2}x{3} exceeds the image bounds ({4}x{5})")]
    RegionOutOfBounds(usize, usize, usize, usize, usize, usize),

    /// Error when an external kernel rejects the pixel layout.
    #[error("Incompatible pixel types: {0}")]
    IncompatiblePixelTypes(String),
}
