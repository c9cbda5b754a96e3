use anyhow::{bail, Context};
use clap::Parser;
use irt::{format_file_size, BatchProcessor, Cli, ImageProcessor, Job, OutputTarget};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG still overrides the default level.
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    log::info!("image resize start");

    match cli.into_job()? {
        Job::Single {
            input,
            output,
            config,
        } => {
            let processor = ImageProcessor::new(config);
            let report = processor
                .process(&input, &OutputTarget::File(output))
                .with_context(|| format!("Failed to resize {}", input.display()))?;

            println!("Resized image saved to: {}", report.output.display());
        }
        Job::Batch {
            input_dir,
            threads,
            config,
        } => {
            let processor = BatchProcessor::new(config, threads)?;
            let stats = processor
                .process_directory(&input_dir)
                .with_context(|| format!("Failed to process directory {}", input_dir.display()))?;

            println!(
                "Batch processing complete. Resized {} of {} files ({} -> {}), {} skipped, {} failed",
                stats.processed_count,
                stats.total(),
                format_file_size(stats.total_size_before),
                format_file_size(stats.total_size_after),
                stats.skipped.len(),
                stats.errors.len()
            );
            for (path, reason) in &stats.skipped {
                println!("  skipped {}: {}", path.display(), reason);
            }
            for (path, reason) in &stats.errors {
                eprintln!("  failed {}: {}", path.display(), reason);
            }

            if !stats.is_success() {
                bail!("{} file(s) failed to resize", stats.errors.len());
            }
        }
    }

    Ok(())
}
