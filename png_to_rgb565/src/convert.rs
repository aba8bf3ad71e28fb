/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat};

use crate::error::ConvertError;
use crate::pack::{self, ByteOrder};
use crate::pixel::PixelSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub byte_order: ByteOrder,
    /// Decode the written stream again and save it here as an image.
    pub preview: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub width: u32,
    pub height: u32,
    pub bytes_written: u64,
}

/// Decodes `path`, sniffing the format from its contents.
///
/// Sources wider than 8 bits per channel are narrowed to RGB8 once here so
/// packing never converts per pixel.
pub fn decode(path: &Path) -> Result<DynamicImage, ConvertError> {
    let decode_error = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = image::ImageReader::open(path)
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    let img = match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => img,
        wide => {
            log::debug!("narrowing {:?} to Rgb8", wide.color());
            DynamicImage::ImageRgb8(wide.to_rgb8())
        }
    };

    log::debug!(
        "decoded {} as {:?} ({}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Writes the packed stream for an already decoded image, then the preview
/// if one was requested.
pub fn encode<S: PixelSource + ?Sized>(
    image: &S,
    options: &ConvertOptions,
) -> Result<ConvertReport, ConvertError> {
    if let Some(preview) = &options.preview {
        check_preview(preview, &options.output)?;
    }

    let file = File::create(&options.output).map_err(|source| ConvertError::OutputOpen {
        path: options.output.clone(),
        source,
    })?;

    let write_error = |source: io::Error| ConvertError::Write {
        path: options.output.clone(),
        source,
    };

    let mut writer = BufWriter::new(file);
    let bytes_written =
        pack::write_packed(image, options.byte_order, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    drop(writer);

    log::info!(
        "wrote {} bytes ({:?} endian) to {}",
        bytes_written,
        options.byte_order,
        options.output.display()
    );

    if let Some(preview) = &options.preview {
        write_preview(&options.output, preview, image.width(), options.byte_order)?;
    }

    Ok(ConvertReport {
        width: image.width(),
        height: image.height(),
        bytes_written,
    })
}

pub fn convert(options: &ConvertOptions) -> Result<ConvertReport, ConvertError> {
    let img = decode(&options.input)?;
    encode(&img, options)
}

/// Fails before anything is written when the preview could not be saved or
/// would land on the raw output.
fn check_preview(preview: &Path, output: &Path) -> Result<(), ConvertError> {
    let preview_error = |source: Box<dyn std::error::Error + Send + Sync>| ConvertError::Preview {
        path: preview.to_path_buf(),
        source,
    };

    let absolute = |p: &Path| std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf());
    if absolute(preview) == absolute(output) {
        return Err(preview_error("preview would overwrite the raw output".into()));
    }

    let format = ImageFormat::from_path(preview).map_err(|e| preview_error(e.into()))?;
    if !format.writing_enabled() {
        return Err(preview_error(format!("cannot encode {format:?} previews").into()));
    }
    Ok(())
}

/// Reads the raw stream back from disk so the preview shows exactly what a
/// consumer of `raw` would see.
fn write_preview(
    raw: &Path,
    preview: &Path,
    width: u32,
    order: ByteOrder,
) -> Result<(), ConvertError> {
    let preview_error = |source: Box<dyn std::error::Error + Send + Sync>| ConvertError::Preview {
        path: preview.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(raw).map_err(|e| preview_error(e.into()))?;
    let img = pack::unpack(&bytes, width, order).map_err(|e| preview_error(e.into()))?;
    if img.width() == 0 || img.height() == 0 {
        log::warn!("image is empty, not writing preview {}", preview.display());
        return Ok(());
    }
    img.save(preview).map_err(|e| preview_error(e.into()))?;

    log::debug!("saved preview {}", preview.display());
    Ok(())
}
