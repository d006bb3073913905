use ndarray::Array2;

use crate::consts::{COLOR_CHANNEL_COUNT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::frame::{ColorFrame, Frame};

/// Split interleaved `[R, G, B, R, G, B, ...]` samples into separate planes.
///
/// `samples` must hold exactly `height * width * 3` values in row-major order.
pub fn split_interleaved(samples: &[f32], height: usize, width: usize, bit_depth: u8) -> ColorFrame {
    debug_assert_eq!(samples.len(), height * width * COLOR_CHANNEL_COUNT);

    let plane = |channel: usize| {
        Array2::from_shape_fn((height, width), |(row, col)| {
            samples[(row * width + col) * COLOR_CHANNEL_COUNT + channel]
        })
    };

    ColorFrame {
        red: Frame::new(plane(0), bit_depth),
        green: Frame::new(plane(1), bit_depth),
        blue: Frame::new(plane(2), bit_depth),
    }
}

/// Reduce a color frame to one plane using ITU-R BT.601 weights.
pub fn luminance(color: &ColorFrame) -> Frame {
    let (h, w) = color.dim();
    let mut data = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            data[[row, col]] = LUMINANCE_R * color.red.data[[row, col]]
                + LUMINANCE_G * color.green.data[[row, col]]
                + LUMINANCE_B * color.blue.data[[row, col]];
        }
    }

    Frame::new(data, color.red.original_bit_depth)
}
