// irt/src/utils/mod.rs
use crate::core::{ResizeError, Result, MAX_AREA, MAX_PIXELS};
use crate::processors::ImageKind;
use std::path::{is_separator, Path, PathBuf};

/// Name of the directory batch mode writes into, inside the input directory.
pub const BATCH_OUTPUT_DIR: &str = "resized";

/// Batch mode is selected by spelling the input with a trailing separator,
/// not by what is on disk.
pub fn is_directory_input(input: &str) -> bool {
    input.ends_with(is_separator)
}

pub fn batch_output_dir(input_dir: &Path) -> PathBuf {
    input_dir.join(BATCH_OUTPUT_DIR)
}

/// Output path for a single file: the explicit `-o` value, otherwise
/// `resized.<ext>` in `cwd`.
pub fn generate_output_path(output: Option<&Path>, kind: ImageKind, cwd: &Path) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => cwd.join(format!("resized.{}", kind.extension())),
    }
}

/// Output path for one file of a batch: same file name, inside `output_dir`.
pub fn batch_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        ResizeError::InvalidParameter(format!("Invalid file name: {}", input.display()))
    })?;

    Ok(output_dir.join(file_name))
}

/// Rejects output sizes too large to allocate, before any buffer is made.
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width > MAX_PIXELS || height > MAX_PIXELS {
        return Err(ResizeError::InvalidParameter(format!(
            "Dimensions too large: {}x{} (max {} pixels per side)",
            width, height, MAX_PIXELS
        )));
    }

    if u64::from(width) * u64::from(height) > MAX_AREA {
        return Err(ResizeError::InvalidParameter(format!(
            "Dimensions too large: {}x{} (max {} pixels in total)",
            width, height, MAX_AREA
        )));
    }

    Ok(())
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}
