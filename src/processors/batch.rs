use crate::core::processor::{ImageProcessor, OutputTarget};
use crate::core::{ProcessConfig, ProcessingStats, ResizeError, ResizeReport, Result};
use crate::utils::batch_output_dir;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct BatchProcessor {
    processor: ImageProcessor,
    thread_pool: Option<rayon::ThreadPool>,
}

impl BatchProcessor {
    /// `max_threads == 0` runs on rayon's global pool (one worker per CPU).
    pub fn new(config: ProcessConfig, max_threads: usize) -> Result<Self> {
        let thread_pool = if max_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(max_threads)
                .build()
                .map_err(|e| {
                    ResizeError::ProcessingError(format!("Failed to create thread pool: {}", e))
                })?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            processor: ImageProcessor::new(config),
            thread_pool,
        })
    }

    pub fn process_directory(&self, input_dir: &Path) -> Result<ProcessingStats> {
        self.validate_paths(input_dir)?;

        let output_dir = batch_output_dir(input_dir);
        if !output_dir.is_dir() {
            log::debug!("Creating output directory {}", output_dir.display());
            std::fs::create_dir_all(&output_dir)?;
        }

        let paths = self.collect_paths(input_dir)?;

        if paths.is_empty() {
            log::warn!("No files found in {}", input_dir.display());
            return Ok(ProcessingStats::default());
        }

        log::info!(
            "Processing {} files from {} into {}",
            paths.len(),
            input_dir.display(),
            output_dir.display()
        );

        let pb = self.create_progress_bar(paths.len());
        let output = OutputTarget::Directory(output_dir);

        let results = match &self.thread_pool {
            Some(pool) => pool.install(|| self.run_jobs(&paths, &output, &pb)),
            None => self.run_jobs(&paths, &output, &pb),
        };

        let mut stats = ProcessingStats::default();
        for (path, result) in results {
            stats.record(path, result);
        }

        pb.finish_with_message(format!(
            "{} resized, {} skipped, {} failed",
            stats.processed_count,
            stats.skipped.len(),
            stats.errors.len()
        ));

        Ok(stats)
    }

    fn run_jobs(
        &self,
        paths: &[PathBuf],
        output: &OutputTarget,
        pb: &ProgressBar,
    ) -> Vec<(PathBuf, Result<ResizeReport>)> {
        paths
            .par_iter()
            .progress_with(pb.clone())
            .map(|input_path| (input_path.clone(), self.processor.process(input_path, output)))
            .collect()
    }

    /// Direct entries of `input_dir` that are not directories, sorted by name.
    fn collect_paths(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }

    pub fn validate_paths(&self, input_dir: &Path) -> Result<()> {
        if !input_dir.exists() {
            return Err(ResizeError::InvalidParameter(format!(
                "Input directory does not exist: {}",
                input_dir.display()
            )));
        }

        if !input_dir.is_dir() {
            return Err(ResizeError::InvalidParameter(format!(
                "Input path is not a directory: {}",
                input_dir.display()
            )));
        }

        let output_dir = batch_output_dir(input_dir);
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(ResizeError::InvalidParameter(format!(
                "Output path exists but is not a directory: {}",
                output_dir.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SizeSpec, Target};

    fn processor() -> BatchProcessor {
        BatchProcessor::new(ProcessConfig::new(Target::LongEdge(SizeSpec::Pixels(10))), 2).unwrap()
    }

    #[test]
    fn collects_files_but_not_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.png"), b"x").unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.png"), b"x").unwrap();

        let paths = processor().collect_paths(dir.path()).unwrap();
        assert_eq!(
            paths,
            vec![dir.path().join("a.jpg"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = processor()
            .process_directory(&dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, ResizeError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_file_blocking_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resized"), b"in the way").unwrap();

        let err = processor().process_directory(dir.path()).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidParameter(_)));
    }

    #[test]
    fn empty_directory_still_gets_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let stats = processor().process_directory(dir.path()).unwrap();

        assert_eq!(stats.total(), 0);
        assert!(dir.path().join("resized").is_dir());
    }
}
