use thiserror::Error;

#[derive(Error, Debug)]
pub enum DenoiseError {
    #[error(
        "Image is {image_width}x{image_height} but variance map is {variance_width}x{variance_height}"
    )]
    DimensionMismatch {
        image_height: usize,
        image_width: usize,
        variance_height: usize,
        variance_width: usize,
    },

    #[error(
        "Color planes disagree: expected {expected_width}x{expected_height}, found {found_width}x{found_height}"
    )]
    ChannelMismatch {
        expected_height: usize,
        expected_width: usize,
        found_height: usize,
        found_width: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DenoiseError>;
