use crate::consts::WEIGHT_SUM_EPSILON;
use crate::frame::ColorFrame;

use super::accumulator::WeightAccumulator;

/// Result of dividing the accumulated color by the accumulated weight.
#[derive(Clone, Debug)]
pub struct Normalized {
    pub image: ColorFrame,
    /// Pixels whose weight sum was degenerate and that kept their input value.
    pub fallback_pixels: usize,
}

/// Divide accumulated color by accumulated weight, per channel.
///
/// Pixels whose weight sum is non-finite or below [`WEIGHT_SUM_EPSILON`],
/// or whose quotient is non-finite, keep their value from `original`.
pub fn normalize(acc: &WeightAccumulator, original: &ColorFrame) -> Normalized {
    let mut image = original.clone();
    let mut fallback_pixels = 0usize;
    let (h, w) = original.dim();

    for row in 0..h {
        for col in 0..w {
            let wsum = acc.weight_sum[[row, col]];
            if !wsum.is_finite() || wsum < WEIGHT_SUM_EPSILON {
                fallback_pixels += 1;
                continue;
            }
            let rgb = [
                acc.red[[row, col]] / wsum,
                acc.green[[row, col]] / wsum,
                acc.blue[[row, col]] / wsum,
            ];
            if rgb.iter().any(|v| !v.is_finite()) {
                fallback_pixels += 1;
                continue;
            }
            image.red.data[[row, col]] = rgb[0];
            image.green.data[[row, col]] = rgb[1];
            image.blue.data[[row, col]] = rgb[2];
        }
    }

    Normalized {
        image,
        fallback_pixels,
    }
}
