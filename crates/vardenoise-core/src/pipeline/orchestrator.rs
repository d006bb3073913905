use std::sync::Arc;

use tracing::info;

use crate::denoise::{denoise_with_reporter, Normalized};
use crate::error::Result;
use crate::frame::{ColorFrame, Frame};
use crate::io::image_io::{load_color_image, load_variance_map, save_color_image};

use super::config::DenoiseConfig;
use super::types::{DenoiseStage, NoOpReporter, ProgressReporter};

/// Denoise in-memory buffers, reporting each stage to `reporter`.
pub fn denoise_reported(
    image: &ColorFrame,
    variance: &Frame,
    config: &DenoiseConfig,
    reporter: &Arc<dyn ProgressReporter>,
) -> Result<Normalized> {
    denoise_with_reporter(image, variance, &config.params, reporter.as_ref())
}

/// Load inputs, denoise and write the result, with a thread-safe progress reporter.
pub fn run_pipeline_reported(
    config: &DenoiseConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<Normalized> {
    reporter.begin_stage(DenoiseStage::Reading, Some(2));
    let image = load_color_image(&config.image)?;
    reporter.advance(1);
    let variance = load_variance_map(&config.variance)?;
    reporter.advance(2);
    reporter.finish_stage();
    info!(
        image = %config.image.display(),
        variance = %config.variance.display(),
        width = image.width(),
        height = image.height(),
        "Inputs loaded"
    );

    let result = denoise_reported(&image, &variance, config, &reporter)?;

    reporter.begin_stage(DenoiseStage::Writing, None);
    save_color_image(&result.image, &config.output)?;
    reporter.finish_stage();
    info!(output = %config.output.display(), "Output saved");

    Ok(result)
}

/// Load inputs, denoise and write the result.
pub fn run_pipeline(config: &DenoiseConfig) -> Result<Normalized> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
