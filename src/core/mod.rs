// irt/src/core/mod.rs
pub mod processor;
pub mod size;

use std::path::PathBuf;
use thiserror::Error;

pub use size::SizeSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    #[default]
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

/// Which axis a size specification is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Width(SizeSpec),
    Height(SizeSpec),
    /// Applied to whichever original axis is longer.
    LongEdge(SizeSpec),
}

impl Target {
    /// Resolves against the original dimensions. A zero on one axis means
    /// the resizer derives it from the aspect ratio.
    pub fn resolve(&self, width: u32, height: u32) -> (u32, u32) {
        match *self {
            Target::Width(spec) => (spec.resolve(width), 0),
            Target::Height(spec) => (0, spec.resolve(height)),
            Target::LongEdge(spec) => {
                if width < height {
                    (0, spec.resolve(height))
                } else {
                    (spec.resolve(width), 0)
                }
            }
        }
    }

    pub fn spec(&self) -> SizeSpec {
        match *self {
            Target::Width(spec) | Target::Height(spec) | Target::LongEdge(spec) => spec,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub target: Target,
    pub algorithm: ResizeAlgorithm,
}

/// Per-file outcome, logged by the processor and collected by the batch run.
#[derive(Debug, Clone)]
pub struct ResizeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original: (u32, u32),
    pub requested: (u32, u32),
    pub size_before: u64,
    pub size_after: u64,
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
    pub skipped: Vec<(PathBuf, String)>,
    pub errors: Vec<(PathBuf, String)>,
}

impl ProcessingStats {
    pub fn record(&mut self, path: PathBuf, result: Result<ResizeReport>) {
        match result {
            Ok(report) => {
                self.processed_count += 1;
                self.total_size_before += report.size_before;
                self.total_size_after += report.size_after;
            }
            Err(e) if e.is_skippable() => {
                log::warn!("Skipping {}: {}", path.display(), e);
                self.skipped.push((path, e.to_string()));
            }
            Err(e) => {
                log::error!("Failed to resize {}: {}", path.display(), e);
                self.errors.push((path, e.to_string()));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.processed_count + self.skipped.len() + self.errors.len()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Largest allowed length of either output axis.
pub const MAX_PIXELS: u32 = 100_000;
/// Largest allowed output area, in pixels.
pub const MAX_AREA: u64 = 1 << 28;
/// Largest allowed percentage in a size spec.
pub const MAX_PERCENT: u32 = 10_000;

impl ProcessConfig {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            algorithm: ResizeAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: ResizeAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn validate(&self) -> Result<()> {
        match self.target.spec() {
            SizeSpec::Pixels(px) if px > MAX_PIXELS => Err(ResizeError::InvalidParameter(format!(
                "Dimensions too large: {} (max {} pixels)",
                px, MAX_PIXELS
            ))),
            SizeSpec::Percent(pct) if pct > MAX_PERCENT => Err(ResizeError::InvalidParameter(
                format!("Scale too large: {}% (max {}%)", pct, MAX_PERCENT),
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Directory listing error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{0}")]
    Usage(String),

    #[error("Invalid size '{spec}': {reason}")]
    InvalidSize { spec: String, reason: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format {kind} in {}", .path.display())]
    UnsupportedFormat { path: PathBuf, kind: String },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl ResizeError {
    /// Errors that make a batch run skip the file rather than count it as failed.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            ResizeError::UnsupportedFormat { .. } | ResizeError::Decode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;
