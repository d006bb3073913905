use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use vardenoise_core::io::image_io::load_color_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Image or variance file (EXR, TIFF or PNG)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let color = load_color_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:       {}", args.file.display());
    println!("Dimensions: {}x{}", color.width(), color.height());
    println!("Bit depth:  {}", color.red.original_bit_depth);

    for (name, channel) in ["Red", "Green", "Blue"].iter().zip(color.channels()) {
        let min = channel.data.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = channel
            .data
            .iter()
            .cloned()
            .fold(f32::NEG_INFINITY, f32::max);
        let mean = channel.data.mean().unwrap_or(0.0);
        println!(
            "{:<11} min {:.6}  max {:.6}  mean {:.6}",
            format!("{name}:"),
            min,
            max,
            mean
        );
    }

    Ok(())
}
