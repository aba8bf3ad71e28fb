/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::convert::ConvertOptions;
use crate::pack::ByteOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Endian {
    /// Low byte first, the layout little-endian targets read natively
    Little,
    /// High byte first
    Big,
}

impl Endian {
    pub fn to_byte_order(self) -> ByteOrder {
        match self {
            Endian::Little => ByteOrder::Little,
            Endian::Big => ByteOrder::Big,
        }
    }
}

/// Convert an image into a raw RGB565 stream
#[derive(Debug, Parser)]
#[command(name = "png_to_rgb565", version)]
pub struct Args {
    /// Image to convert; the format is detected from its contents
    pub input: PathBuf,

    /// Where to write the packed pixels
    pub output: PathBuf,

    /// Byte order of each 16-bit word
    #[arg(long, value_enum, default_value_t = Endian::Little)]
    pub byte_order: Endian,

    /// Shorthand for --byte-order big
    #[arg(short, long, conflicts_with = "byte_order")]
    pub swap: bool,

    /// Also save the quantized result as a viewable image
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,
}

impl Args {
    pub fn into_options(self) -> ConvertOptions {
        let byte_order = if self.swap {
            ByteOrder::Big
        } else {
            self.byte_order.to_byte_order()
        };

        ConvertOptions {
            input: self.input,
            output: self.output,
            byte_order,
            preview: self.preview,
        }
    }
}
