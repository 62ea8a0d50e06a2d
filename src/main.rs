use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

mod cli;
mod input;
mod viewer;

use bmpline::{write_segment_image, Rasterizer};
use input::{ArgsSource, InputSource, StdinReader};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.render_config()?;

    if !args.quiet {
        println!("bmpline version {}\n", env!("CARGO_PKG_VERSION"));
    }

    // Coordinates come from the command line, or interactively like the classic prompt
    let segment = match args.coords.clone() {
        Some(values) => ArgsSource::new(values).read_segment()?,
        None => {
            if config.width == config.height {
                println!(
                    "Enter two pairs of point coordinates in the range of 0-{} (x1 y1 x2 y2):",
                    config.width - 1
                );
            } else {
                println!(
                    "Enter two pairs of point coordinates, x in 0-{} and y in 0-{} (x1 y1 x2 y2):",
                    config.width - 1,
                    config.height - 1
                );
            }
            io::stdout().flush()?;
            StdinReader::new(io::stdin().lock()).read_segment()?
        }
    };

    // Reject bad points before touching the output file
    let rasterizer = Rasterizer::new(config.clone());
    rasterizer
        .validate(segment.start)
        .and_then(|_| rasterizer.validate(segment.end))
        .context("Coordinates out of range")?;

    write_segment_image(&args.output, &config, segment.start, segment.end)
        .with_context(|| format!("Could not write {}", args.output.display()))?;

    if !args.quiet {
        eprintln!(
            "Wrote {} ({}x{}, {}-bit)",
            args.output.display(),
            config.width,
            config.height,
            config.format.bits_per_pixel()
        );
    }

    // The image is already on disk; a missing viewer only warrants a warning
    if !args.no_view {
        if let Err(e) = viewer::open(args.viewer.as_deref(), &args.output) {
            eprintln!("Warning: {:#}", e);
        }
    }

    Ok(())
}
