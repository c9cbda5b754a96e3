pub mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Algorithm, Cli, Job};
pub use crate::core::processor::{ImageProcessor, OutputTarget};
pub use crate::core::{
    size, ProcessConfig, ProcessingStats, ResizeAlgorithm, ResizeError,
    ResizeReport, Result, SizeSpec, Target,
};
pub use processors::{sniff, BatchProcessor, Encoder, ImageKind, Loader, Resizer};
pub use utils::{
    batch_output_dir, batch_output_path, format_file_size, generate_output_path,
    is_directory_input, BATCH_OUTPUT_DIR,
};

pub mod prelude {
    pub use crate::{
        BatchProcessor, ImageProcessor, OutputTarget, ProcessConfig, ResizeAlgorithm, SizeSpec,
        Target,
    };
}
