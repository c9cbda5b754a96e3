// irt/src/processors/encoder.rs
use super::loader::ImageKind;
use crate::core::{ResizeError, Result};
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, Frame};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Writes images back in the format they were read in, with default encoder
/// settings for each codec.
#[derive(Clone, Default)]
pub struct Encoder;

impl Encoder {
    pub fn new() -> Self {
        Self
    }

    pub fn save(&self, image: &DynamicImage, path: &Path, kind: ImageKind) -> Result<u64> {
        log::debug!("Saving {} image to {}", kind, path.display());

        if !kind.is_decodable() {
            return Err(unsupported(kind));
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.encode(image, &mut writer, kind)?;
        writer.flush()?;

        let file_size = std::fs::metadata(path)?.len();
        log::debug!("Saved image: {} ({} bytes)", path.display(), file_size);

        Ok(file_size)
    }

    pub fn encode_to_bytes(&self, image: &DynamicImage, kind: ImageKind) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.encode(image, &mut buffer, kind)?;
        Ok(buffer.into_inner())
    }

    fn encode<W: Write>(&self, image: &DynamicImage, writer: &mut W, kind: ImageKind) -> Result<()> {
        match kind {
            ImageKind::Png => {
                image.write_with_encoder(PngEncoder::new(writer))?;
            }
            ImageKind::Jpeg => {
                // JPEG has no alpha channel.
                let encoder = JpegEncoder::new(writer);
                if image.color().has_alpha() {
                    DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
                } else {
                    image.write_with_encoder(encoder)?;
                }
            }
            ImageKind::Gif => {
                let mut encoder = GifEncoder::new(writer);
                encoder.encode_frame(Frame::new(image.to_rgba8()))?;
            }
            ImageKind::Bmp | ImageKind::Unknown => return Err(unsupported(kind)),
        }

        Ok(())
    }
}

fn unsupported(kind: ImageKind) -> ResizeError {
    ResizeError::ProcessingError(format!("no encoder for {} images", kind))
}
