use ndarray::{Array2, Zip};

use crate::filters::shift::{shift_color, shift_frame};
use crate::frame::{ColorFrame, Frame};

use super::distance::pixel_distance;
use super::params::DenoiseParams;
use super::weights::patch_weights;
use super::window::NeighborOffset;

/// Running weighted color sum and weight total over the search window.
///
/// Each processed offset adds exactly one contribution per pixel. Two
/// accumulators built from disjoint offset sets can be combined with
/// [`merge`](Self::merge), which is how the parallel path reduces
/// per-worker results.
#[derive(Clone, Debug)]
pub struct WeightAccumulator {
    pub red: Array2<f32>,
    pub green: Array2<f32>,
    pub blue: Array2<f32>,
    pub weight_sum: Array2<f32>,
    offsets_processed: usize,
}

impl WeightAccumulator {
    /// Zero-initialized accumulator for an image of shape `(height, width)`.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            red: Array2::zeros((height, width)),
            green: Array2::zeros((height, width)),
            blue: Array2::zeros((height, width)),
            weight_sum: Array2::zeros((height, width)),
            offsets_processed: 0,
        }
    }

    pub fn offsets_processed(&self) -> usize {
        self.offsets_processed
    }

    /// Shift, score and accumulate one neighbor offset.
    ///
    /// Inputs must already have been validated to share a shape.
    pub fn process_offset(
        &mut self,
        image: &ColorFrame,
        variance: &Frame,
        offset: NeighborOffset,
        params: &DenoiseParams,
    ) {
        let neighbor = shift_color(image, offset.dx, offset.dy);
        let neighbor_variance = shift_frame(variance, offset.dx, offset.dy);

        let d2pixel = pixel_distance(
            image,
            &neighbor,
            variance,
            &neighbor_variance,
            params.epsilon,
            params.k,
        );
        let weights = patch_weights(&d2pixel, params.patch_radius());

        self.add_weighted(&neighbor, &weights);
    }

    /// Add `weights * neighbor` to the color sums and `weights` to the weight total.
    pub fn add_weighted(&mut self, neighbor: &ColorFrame, weights: &Array2<f32>) {
        for (sum, channel) in [&mut self.red, &mut self.green, &mut self.blue]
            .into_iter()
            .zip(neighbor.channels())
        {
            Zip::from(sum)
                .and(&channel.data)
                .and(weights)
                .for_each(|s, &v, &w| *s += w * v);
        }
        self.weight_sum += weights;
        self.offsets_processed += 1;
    }

    /// Combine two partial accumulations.
    pub fn merge(mut self, other: WeightAccumulator) -> WeightAccumulator {
        self.red += &other.red;
        self.green += &other.green;
        self.blue += &other.blue;
        self.weight_sum += &other.weight_sum;
        self.offsets_processed += other.offsets_processed;
        self
    }
}
