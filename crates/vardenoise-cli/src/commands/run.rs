use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use vardenoise_core::pipeline::config::DenoiseConfig;
use vardenoise_core::pipeline::{run_pipeline_reported, DenoiseStage, ProgressReporter};

#[derive(Args)]
pub struct RunArgs {
    /// Noisy input image (EXR, TIFF or PNG)
    pub image: Option<PathBuf>,

    /// Per-pixel variance estimate, same size as the image
    pub variance: Option<PathBuf>,

    /// Denoise config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search window radius
    #[arg(short, long)]
    pub radius: Option<i32>,

    /// Patch half-size (box filter radius is patch - 1)
    #[arg(short, long)]
    pub patch: Option<i32>,

    /// Distance denominator guard
    #[arg(long)]
    pub epsilon: Option<f32>,

    /// Variance sensitivity
    #[arg(short, long)]
    pub k: Option<f32>,

    /// Process the search window on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Output file path (TIFF or PNG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = build_config(args)?;
    config
        .params
        .validate()
        .context("Invalid denoise parameters")?;
    debug!(?config, "Resolved denoise config");

    crate::summary::print_run_summary(&config);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter::new(pb.clone()));

    let result = run_pipeline_reported(&config, reporter).with_context(|| {
        format!(
            "Failed to denoise {} with {}",
            config.image.display(),
            config.variance.display()
        )
    })?;

    pb.finish_with_message("Done");
    if result.fallback_pixels > 0 {
        println!(
            "{} pixel(s) had no usable weight and kept their input value",
            result.fallback_pixels
        );
    }
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}

fn build_config(args: &RunArgs) -> Result<DenoiseConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid denoise config")?
    } else {
        let (Some(image), Some(variance)) = (&args.image, &args.variance) else {
            anyhow::bail!("Either --config or both IMAGE and VARIANCE are required");
        };
        DenoiseConfig {
            image: image.clone(),
            variance: variance.clone(),
            ..DenoiseConfig::default()
        }
    };

    if let Some(ref image) = args.image {
        config.image = image.clone();
    }
    if let Some(ref variance) = args.variance {
        config.variance = variance.clone();
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if let Some(r) = args.radius {
        config.params.search_radius = r;
    }
    if let Some(f) = args.patch {
        config.params.patch_half_size = f;
    }
    if let Some(epsilon) = args.epsilon {
        config.params.epsilon = epsilon;
    }
    if let Some(k) = args.k {
        config.params.k = k;
    }
    if args.sequential {
        config.params.parallel = false;
    }

    Ok(config)
}

/// Drives an indicatif bar from pipeline progress events.
///
/// Filtering reports arrive from several Rayon workers out of order, so the
/// bar only moves forward by the gain over the highest count seen so far.
struct BarReporter {
    bar: ProgressBar,
    done: AtomicU64,
}

impl BarReporter {
    fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            done: AtomicU64::new(0),
        }
    }
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: DenoiseStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
        self.done.store(0, Ordering::Relaxed);
    }

    fn advance(&self, items_done: usize) {
        let items_done = items_done as u64;
        let prev = self.done.fetch_max(items_done, Ordering::Relaxed);
        if items_done > prev {
            self.bar.inc(items_done - prev);
        }
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}
