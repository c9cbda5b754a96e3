// irt/src/core/processor.rs
use super::{ProcessConfig, ResizeReport, Result};
use crate::processors::prelude::*;
use crate::utils::{batch_output_path, generate_output_path, validate_dimensions};
use image::GenericImageView;
use std::path::{Path, PathBuf};

/// Where a processed file is written.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Single-file mode: explicit path, or `resized.<ext>` in the working directory.
    File(Option<PathBuf>),
    /// Batch mode: the input's file name inside this directory.
    Directory(PathBuf),
}

pub struct ImageProcessor {
    config: ProcessConfig,
    loader: Loader,
    resizer: Resizer,
    encoder: Encoder,
}

impl ImageProcessor {
    pub fn new(config: ProcessConfig) -> Self {
        let resizer = Resizer::new(config.algorithm);

        Self {
            config,
            loader: Loader::new(),
            resizer,
            encoder: Encoder::new(),
        }
    }

    pub fn process<P: AsRef<Path>>(&self, input_path: P, output: &OutputTarget) -> Result<ResizeReport> {
        let input_path = input_path.as_ref();

        let size_before = std::fs::metadata(input_path)?.len();
        let (image, kind) = self.loader.load(input_path)?;

        let original = image.dimensions();
        let requested = self.config.target.resolve(original.0, original.1);

        let (width, height) =
            Resizer::calculate_dimensions(original.0, original.1, requested.0, requested.1);
        validate_dimensions(width, height)?;

        let resized = self.resizer.resize(&image, requested.0, requested.1);
        drop(image);

        let output_path = match output {
            OutputTarget::File(explicit) => {
                let cwd = std::env::current_dir()?;
                generate_output_path(explicit.as_deref(), kind, &cwd)
            }
            OutputTarget::Directory(dir) => batch_output_path(input_path, dir)?,
        };

        let size_after = self.encoder.save(&resized, &output_path, kind)?;

        log::info!(
            "input file: {}, width:{}, height:{}",
            input_path.display(),
            original.0,
            original.1
        );
        log::info!(
            "output file: {}, width:{}, height:{}",
            output_path.display(),
            requested.0,
            requested.1
        );

        Ok(ResizeReport {
            input: input_path.to_path_buf(),
            output: output_path,
            original,
            requested,
            size_before,
            size_after,
        })
    }
}
