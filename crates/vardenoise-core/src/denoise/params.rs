use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DISTANCE_EPSILON, DEFAULT_PATCH_HALF_SIZE, DEFAULT_SEARCH_RADIUS,
    DEFAULT_VARIANCE_SENSITIVITY, MAX_SEARCH_RADIUS,
};
use crate::error::{DenoiseError, Result};

use super::window::window_len;

/// Parameters for variance-guided patch denoising.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenoiseParams {
    /// Search window radius `r` (default: 3). Offsets span `[-r, r]` on both axes.
    pub search_radius: i32,
    /// Patch half-size `f` (default: 3). Distances and weights are box-filtered
    /// with radius `f - 1`.
    pub patch_half_size: i32,
    /// Denominator guard for the normalized distance (default: 1e-3).
    pub epsilon: f32,
    /// Variance sensitivity `k` (default: 0.2).
    pub k: f32,
    /// Spread the search window across Rayon workers (default: true).
    pub parallel: bool,
}

impl Default for DenoiseParams {
    fn default() -> Self {
        Self {
            search_radius: DEFAULT_SEARCH_RADIUS,
            patch_half_size: DEFAULT_PATCH_HALF_SIZE,
            epsilon: DEFAULT_DISTANCE_EPSILON,
            k: DEFAULT_VARIANCE_SENSITIVITY,
            parallel: true,
        }
    }
}

impl DenoiseParams {
    pub fn new(search_radius: i32, patch_half_size: i32, epsilon: f32, k: f32) -> Self {
        Self {
            search_radius,
            patch_half_size,
            epsilon,
            k,
            ..Self::default()
        }
    }

    /// Reject parameter combinations the filter cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.search_radius < 0 {
            return Err(DenoiseError::InvalidParameter(format!(
                "search radius must be >= 0, got {}",
                self.search_radius
            )));
        }
        if self.search_radius > MAX_SEARCH_RADIUS {
            return Err(DenoiseError::InvalidParameter(format!(
                "search radius must be <= {MAX_SEARCH_RADIUS}, got {}",
                self.search_radius
            )));
        }
        if self.patch_half_size < 1 {
            return Err(DenoiseError::InvalidParameter(format!(
                "patch half-size must be >= 1, got {}",
                self.patch_half_size
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(DenoiseError::InvalidParameter(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if !self.k.is_finite() {
            return Err(DenoiseError::InvalidParameter(format!(
                "k must be finite, got {}",
                self.k
            )));
        }
        Ok(())
    }

    /// Radius of the box filter used by both smoothing passes (`f - 1`).
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    pub fn patch_radius(&self) -> usize {
        (self.patch_half_size - 1).max(0) as usize
    }

    /// Number of offsets in the search window, `(2r + 1)^2`.
    pub fn window_size(&self) -> usize {
        window_len(self.search_radius.max(0))
    }
}
