use ndarray::Array2;

use crate::filters::box_filter::box_filter;

/// Aggregate a per-pixel distance into a patch distance (box radius `patch_radius`).
pub fn smooth_distance(d2pixel: &Array2<f32>, patch_radius: usize) -> Array2<f32> {
    box_filter(d2pixel, patch_radius)
}

/// Regularize a weight map with a second box pass (box radius `patch_radius`).
pub fn smooth_weight(weights: &Array2<f32>, patch_radius: usize) -> Array2<f32> {
    box_filter(weights, patch_radius)
}

/// Map a patch distance to a similarity weight, `exp(-max(0, d2))`.
///
/// Negative distances (noise-dominated differences) saturate at weight 1.
/// Distances above roughly 104 underflow `f32::exp` to exactly 0, so the
/// result lies in `[0, 1]` and clearly dissimilar neighbors drop out entirely.
pub fn distance_to_weight(d2patch: &Array2<f32>) -> Array2<f32> {
    d2patch.mapv(|d| (-d.max(0.0)).exp())
}

/// Full weight derivation for one offset: smooth, exponentiate, smooth again.
pub fn patch_weights(d2pixel: &Array2<f32>, patch_radius: usize) -> Array2<f32> {
    let d2patch = smooth_distance(d2pixel, patch_radius);
    let weights = distance_to_weight(&d2patch);
    smooth_weight(&weights, patch_radius)
}
