/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Converts decoded images into headerless RGB565 streams.

pub mod cli;
pub mod convert;
pub mod error;
pub mod pack;
pub mod pixel;

pub use convert::{ConvertOptions, ConvertReport, convert};
pub use error::ConvertError;
pub use pack::{ByteOrder, Rgb565, UnpackError, pack, pack_words, unpack, write_packed};
pub use pixel::{PixelSource, RgbGrid};
