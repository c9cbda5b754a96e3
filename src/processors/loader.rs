// irt/src/processors/loader.rs
use crate::core::{ResizeError, Result};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Encoded format, classified from the leading bytes rather than the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Unknown,
}

impl ImageKind {
    pub fn from_magic(bytes: &[u8]) -> Self {
        if bytes.len() < 4 {
            return ImageKind::Unknown;
        }

        match bytes {
            [0x89, 0x50, 0x4E, 0x47, ..] => ImageKind::Png,
            [0xFF, 0xD8, ..] => ImageKind::Jpeg,
            [0x47, 0x49, 0x46, 0x38, ..] => ImageKind::Gif,
            [0x42, 0x4D, ..] => ImageKind::Bmp,
            _ => ImageKind::Unknown,
        }
    }

    /// Only these kinds have a codec wired in; BMP is recognised but not decoded.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            ImageKind::Png => Some(ImageFormat::Png),
            ImageKind::Jpeg => Some(ImageFormat::Jpeg),
            ImageKind::Gif => Some(ImageFormat::Gif),
            ImageKind::Bmp | ImageKind::Unknown => None,
        }
    }

    pub fn is_decodable(&self) -> bool {
        self.image_format().is_some()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpg",
            ImageKind::Gif => "gif",
            ImageKind::Bmp => "bmp",
            ImageKind::Unknown => "img",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageKind::Png => "PNG",
            ImageKind::Jpeg => "JPEG",
            ImageKind::Gif => "GIF",
            ImageKind::Bmp => "BMP",
            ImageKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Reads the first four bytes and leaves the cursor at the start of the stream.
pub fn sniff<R: Read + Seek>(reader: &mut R) -> Result<ImageKind> {
    reader.seek(SeekFrom::Start(0))?;

    let mut magic = Vec::with_capacity(4);
    reader.by_ref().take(4).read_to_end(&mut magic)?;

    reader.seek(SeekFrom::Start(0))?;

    Ok(ImageKind::from_magic(&magic))
}

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Opens, sniffs and decodes. Unsupported kinds never reach a decoder.
    pub fn load(&self, path: &Path) -> Result<(DynamicImage, ImageKind)> {
        log::debug!("Loading image from: {}", path.display());

        let mut reader = BufReader::new(File::open(path)?);
        let kind = sniff(&mut reader)?;

        let format = kind.image_format().ok_or_else(|| ResizeError::UnsupportedFormat {
            path: path.to_path_buf(),
            kind: kind.to_string(),
        })?;

        let image = image::load(reader, format).map_err(|source| ResizeError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Decoded {} image: {}x{} pixels, color: {:?}",
            kind,
            width,
            height,
            image.color()
        );

        Ok((image, kind))
    }
}
