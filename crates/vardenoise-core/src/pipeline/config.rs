use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::denoise::DenoiseParams;

/// A complete denoising job: where to read, where to write, how to filter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DenoiseConfig {
    /// Noisy RGB render (EXR, TIFF or PNG).
    pub image: PathBuf,
    /// Per-pixel variance estimate with the same dimensions as `image`.
    pub variance: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub params: DenoiseParams,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from("image.exr"),
            variance: PathBuf::from("image_variance.exr"),
            output: PathBuf::from("denoised.tiff"),
            params: DenoiseParams::default(),
        }
    }
}
