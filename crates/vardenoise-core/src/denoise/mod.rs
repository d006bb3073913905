//! Variance-guided patch denoising.
//!
//! For every offset of a square search window the image is shifted
//! toroidally, compared with itself through a variance-compensated distance,
//! and the resulting similarity weights drive a weighted average of the
//! shifted neighbors.

pub mod accumulator;
pub mod distance;
pub mod normalize;
pub mod params;
pub mod weights;
pub mod window;

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::consts::PARALLEL_WORK_THRESHOLD;
use crate::error::{DenoiseError, Result};
use crate::frame::{ColorFrame, Frame};
use crate::pipeline::{DenoiseStage, NoOpReporter, ProgressReporter};

pub use accumulator::WeightAccumulator;
pub use distance::{pixel_distance, raw_color_distance};
pub use normalize::{normalize, Normalized};
pub use params::DenoiseParams;
pub use weights::{distance_to_weight, patch_weights, smooth_distance, smooth_weight};
pub use window::{search_window, window_len, NeighborOffset};

/// Denoise `image` guided by the per-pixel `variance` estimate.
pub fn denoise(image: &ColorFrame, variance: &Frame, params: &DenoiseParams) -> Result<ColorFrame> {
    denoise_with_reporter(image, variance, params, &NoOpReporter).map(|n| n.image)
}

/// Positional form of [`denoise`]: search radius `r`, patch half-size `f`,
/// distance guard `epsilon` and variance sensitivity `k`.
pub fn denoise_with(
    image: &ColorFrame,
    variance: &Frame,
    r: i32,
    f: i32,
    epsilon: f32,
    k: f32,
) -> Result<ColorFrame> {
    denoise(image, variance, &DenoiseParams::new(r, f, epsilon, k))
}

/// Denoise with a progress callback.
///
/// `progress` receives the running count of finished offsets; it may be
/// called from Rayon worker threads.
pub fn denoise_with_progress<P>(
    image: &ColorFrame,
    variance: &Frame,
    params: &DenoiseParams,
    progress: P,
) -> Result<Normalized>
where
    P: Fn(usize) + Send + Sync,
{
    denoise_with_reporter(image, variance, params, &CallbackReporter(progress))
}

/// Denoise, reporting validation, filtering and normalization as separate
/// stages. The filtering stage counts one item per search-window offset.
pub fn denoise_with_reporter(
    image: &ColorFrame,
    variance: &Frame,
    params: &DenoiseParams,
    reporter: &dyn ProgressReporter,
) -> Result<Normalized> {
    reporter.begin_stage(DenoiseStage::Validating, None);
    validate_inputs(image, variance, params)?;
    reporter.finish_stage();

    let (h, w) = image.dim();
    let offsets = search_window(params.search_radius);
    info!(
        width = w,
        height = h,
        offsets = offsets.len(),
        patch_radius = params.patch_radius(),
        epsilon = params.epsilon,
        k = params.k,
        "Denoising"
    );

    reporter.begin_stage(DenoiseStage::Filtering, Some(offsets.len()));
    let acc = accumulate_offsets(image, variance, &offsets, params, |done| {
        reporter.advance(done)
    });
    reporter.finish_stage();

    reporter.begin_stage(DenoiseStage::Normalizing, None);
    let normalized = normalize(&acc, image);
    reporter.finish_stage();

    if normalized.fallback_pixels > 0 {
        warn!(
            pixels = normalized.fallback_pixels,
            "Degenerate weight sums, kept input values"
        );
    }
    info!(offsets = acc.offsets_processed(), "Denoising complete");

    Ok(normalized)
}

/// Forwards filtering progress to a plain callback.
struct CallbackReporter<P>(P);

impl<P> ProgressReporter for CallbackReporter<P>
where
    P: Fn(usize) + Send + Sync,
{
    fn advance(&self, items_done: usize) {
        (self.0)(items_done)
    }
}

/// Check shapes and parameters before any work is done.
pub fn validate_inputs(image: &ColorFrame, variance: &Frame, params: &DenoiseParams) -> Result<()> {
    params.validate()?;

    let (h, w) = image.dim();
    for channel in image.channels() {
        let (ch, cw) = channel.data.dim();
        if (ch, cw) != (h, w) {
            return Err(DenoiseError::ChannelMismatch {
                expected_height: h,
                expected_width: w,
                found_height: ch,
                found_width: cw,
            });
        }
    }

    let (vh, vw) = variance.data.dim();
    if (vh, vw) != (h, w) {
        return Err(DenoiseError::DimensionMismatch {
            image_height: h,
            image_width: w,
            variance_height: vh,
            variance_width: vw,
        });
    }

    if h == 0 || w == 0 {
        return Err(DenoiseError::EmptyImage {
            width: w,
            height: h,
        });
    }

    Ok(())
}

/// Accumulate weighted neighbors over `offsets`.
///
/// Small workloads, or `params.parallel == false`, run sequentially. Larger
/// ones fold offsets into per-worker accumulators and merge them pairwise.
/// Inputs are assumed valid (see [`validate_inputs`]).
pub fn accumulate_offsets<P>(
    image: &ColorFrame,
    variance: &Frame,
    offsets: &[NeighborOffset],
    params: &DenoiseParams,
    progress: P,
) -> WeightAccumulator
where
    P: Fn(usize) + Sync,
{
    let (h, w) = image.dim();
    let done = AtomicUsize::new(0);

    let step = |acc: &mut WeightAccumulator, offset: NeighborOffset| {
        acc.process_offset(image, variance, offset, params);
        debug!(dx = offset.dx, dy = offset.dy, "Offset accumulated");
        progress(done.fetch_add(1, Ordering::Relaxed) + 1);
    };

    if params.parallel && h * w * offsets.len() >= PARALLEL_WORK_THRESHOLD && offsets.len() > 1 {
        offsets
            .par_iter()
            .fold(
                || WeightAccumulator::new(h, w),
                |mut acc, &offset| {
                    step(&mut acc, offset);
                    acc
                },
            )
            .reduce(|| WeightAccumulator::new(h, w), WeightAccumulator::merge)
    } else {
        let mut acc = WeightAccumulator::new(h, w);
        for &offset in offsets {
            step(&mut acc, offset);
        }
        acc
    }
}
