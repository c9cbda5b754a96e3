// irt/src/cli.rs
use crate::core::{ProcessConfig, ResizeAlgorithm, ResizeError, Result, SizeSpec, Target};
use crate::utils::is_directory_input;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "irt",
    version,
    about = "Resize an image by width or height, or a directory of images by long edge",
    disable_help_flag = true
)]
pub struct Cli {
    /// Input file, or a directory ending with a path separator (batch mode)
    pub input: Option<String>,

    /// Target width, e.g. 80% or 200px (single file)
    #[arg(short = 'w', long)]
    pub width: Option<String>,

    /// Target height, e.g. 80% or 100px (single file)
    #[arg(short = 'h', long)]
    pub height: Option<String>,

    /// Target length of the longer edge, e.g. 80% or 100px (directory)
    #[arg(short = 'l', long)]
    pub length: Option<String>,

    /// Output file (single file), defaults to ./resized.<ext>
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Worker threads for directory mode (0 = one per CPU)
    #[arg(short = 't', long, default_value_t = 0)]
    pub threads: usize,

    /// Resampling filter
    #[arg(short = 'f', long, value_enum, default_value_t = Algorithm::Nearest)]
    pub filter: Algorithm,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

/// A validated run, built once from the command line.
#[derive(Debug, Clone)]
pub enum Job {
    Single {
        input: PathBuf,
        output: Option<PathBuf>,
        config: ProcessConfig,
    },
    Batch {
        input_dir: PathBuf,
        threads: usize,
        config: ProcessConfig,
    },
}

impl Cli {
    /// Checks flag combinations and parses sizes. Touches no files.
    pub fn into_job(self) -> Result<Job> {
        let input = match non_empty(&self.input) {
            Some(input) => input.to_string(),
            None => return Err(usage("please give an input file or directory")),
        };
        let algorithm = ResizeAlgorithm::from(self.filter);

        if is_directory_input(&input) {
            let length = non_empty(&self.length)
                .ok_or_else(|| usage("directory input needs a length (-l)"))?;

            if non_empty(&self.width).is_some() || non_empty(&self.height).is_some() {
                log::warn!("-w/-h are ignored for directory input, using -l");
            }
            if self.output.is_some() {
                log::warn!("-o is ignored for directory input");
            }

            let config =
                ProcessConfig::new(Target::LongEdge(length.parse::<SizeSpec>()?)).with_algorithm(algorithm);
            config.validate()?;

            return Ok(Job::Batch {
                input_dir: PathBuf::from(input),
                threads: self.threads,
                config,
            });
        }

        let target = match (non_empty(&self.width), non_empty(&self.height)) {
            (Some(width), None) => Target::Width(width.parse()?),
            (None, Some(height)) => Target::Height(height.parse()?),
            _ => return Err(usage("give exactly one of width (-w) or height (-h)")),
        };

        if non_empty(&self.length).is_some() {
            log::warn!("-l only applies to directory input, ignoring it");
        }

        let config = ProcessConfig::new(target).with_algorithm(algorithm);
        config.validate()?;

        Ok(Job::Single {
            input: PathBuf::from(input),
            output: self.output,
            config,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn usage(message: &str) -> ResizeError {
    ResizeError::Usage(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(args: &[&str]) -> Result<Job> {
        let mut argv = vec!["irt"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_job()
    }

    #[test]
    fn single_width() {
        match job(&["-w", "50%", "cat.png"]).unwrap() {
            Job::Single { input, output, config } => {
                assert_eq!(input, PathBuf::from("cat.png"));
                assert_eq!(output, None);
                assert_eq!(config.target, Target::Width(SizeSpec::Percent(50)));
                assert_eq!(config.algorithm, ResizeAlgorithm::Nearest);
            }
            other => panic!("unexpected job {:?}", other),
        }
    }

    #[test]
    fn single_height_with_output() {
        match job(&["-h", "120px", "-o", "out.jpg", "cat.jpg"]).unwrap() {
            Job::Single { output, config, .. } => {
                assert_eq!(output, Some(PathBuf::from("out.jpg")));
                assert_eq!(config.target, Target::Height(SizeSpec::Pixels(120)));
            }
            other => panic!("unexpected job {:?}", other),
        }
    }

    #[test]
    fn both_width_and_height_is_usage_error() {
        let err = job(&["-w", "10", "-h", "10", "cat.png"]).unwrap_err();
        assert!(matches!(err, ResizeError::Usage(_)));
    }

    #[test]
    fn neither_width_nor_height_is_usage_error() {
        assert!(matches!(job(&["cat.png"]).unwrap_err(), ResizeError::Usage(_)));
        assert!(matches!(job(&["-w", "", "cat.png"]).unwrap_err(), ResizeError::Usage(_)));
    }

    #[test]
    fn missing_input_is_usage_error() {
        assert!(matches!(job(&["-w", "10"]).unwrap_err(), ResizeError::Usage(_)));
    }

    #[test]
    fn directory_needs_length() {
        let err = job(&["-w", "10", "photos/"]).unwrap_err();
        assert!(matches!(err, ResizeError::Usage(_)));
    }

    #[test]
    fn directory_with_length() {
        match job(&["-l", "100px", "-t", "3", "-f", "lanczos3", "photos/"]).unwrap() {
            Job::Batch { input_dir, threads, config } => {
                assert_eq!(input_dir, PathBuf::from("photos/"));
                assert_eq!(threads, 3);
                assert_eq!(config.target, Target::LongEdge(SizeSpec::Pixels(100)));
                assert_eq!(config.algorithm, ResizeAlgorithm::Lanczos3);
            }
            other => panic!("unexpected job {:?}", other),
        }
    }

    #[test]
    fn directory_without_separator_is_single_file() {
        match job(&["-w", "10", "photos"]).unwrap() {
            Job::Single { input, .. } => assert_eq!(input, PathBuf::from("photos")),
            other => panic!("unexpected job {:?}", other),
        }
    }

    #[test]
    fn malformed_size_fails_before_io() {
        let err = job(&["-w", "wide", "does-not-exist.png"]).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidSize { .. }));

        let err = job(&["--length=-5%", "photos/"]).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidSize { .. }));
    }

    #[test]
    fn long_help_flag_still_works() {
        let err = Cli::try_parse_from(["irt", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
