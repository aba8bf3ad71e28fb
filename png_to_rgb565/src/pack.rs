/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! RGB888 to RGB565 packing.
//!
//! Words are laid out `RRRRRGGG GGGBBBBB` from MSB to LSB and emitted in
//! row-major scan order, so byte offset `2 * (y * width + x)` always holds
//! pixel `(x, y)`.

use std::io::{self, Write};

use image::{ImageBuffer, Rgb, RgbImage};

use crate::pixel::PixelSource;

/// Byte layout of each 16-bit word in the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    pub fn from_swap(swap: bool) -> Self {
        if swap { ByteOrder::Big } else { ByteOrder::Little }
    }
}

/// A single packed 5/6/5 pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);

    /// Truncates each channel to its target width; no rounding.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16;
        let g6 = (g >> 2) as u16;
        let b5 = (b >> 3) as u16;
        Rgb565((r5 << 11) | (g6 << 5) | b5)
    }

    pub const fn r5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub const fn g6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub const fn b5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Widens back to 8 bits by shifting left, leaving the low bits clear.
    pub const fn to_rgb888(self) -> [u8; 3] {
        [self.r5() << 3, self.g6() << 2, self.b5() << 3]
    }

    pub const fn to_bytes(self, order: ByteOrder) -> [u8; 2] {
        match order {
            ByteOrder::Little => self.0.to_le_bytes(),
            ByteOrder::Big => self.0.to_be_bytes(),
        }
    }

    pub const fn from_bytes(bytes: [u8; 2], order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Rgb565(u16::from_le_bytes(bytes)),
            ByteOrder::Big => Rgb565(u16::from_be_bytes(bytes)),
        }
    }
}

impl From<Rgb565> for u16 {
    fn from(word: Rgb565) -> u16 {
        word.0
    }
}

/// Packed words of `image`, top-to-bottom then left-to-right.
pub fn pack_words<S: PixelSource + ?Sized>(image: &S) -> impl Iterator<Item = Rgb565> + '_ {
    let (width, height) = (image.width(), image.height());
    (0..height).flat_map(move |y| {
        (0..width).map(move |x| {
            let [r, g, b] = image.rgb_at(x, y);
            Rgb565::from_rgb888(r, g, b)
        })
    })
}

/// Packs the whole image into memory. The result is always
/// `width * height * 2` bytes long.
pub fn pack<S: PixelSource + ?Sized>(image: &S, order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.pixel_count() as usize * 2);
    for word in pack_words(image) {
        out.extend_from_slice(&word.to_bytes(order));
    }
    out
}

/// Streams the packed image into `writer` and returns the byte count.
///
/// Only the writer can fail; the caller owns flushing.
pub fn write_packed<S, W>(image: &S, order: ByteOrder, writer: &mut W) -> io::Result<u64>
where
    S: PixelSource + ?Sized,
    W: Write + ?Sized,
{
    let mut written = 0u64;
    for word in pack_words(image) {
        writer.write_all(&word.to_bytes(order))?;
        written += 2;
    }
    Ok(written)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnpackError {
    #[error("stream length {0} is not a whole number of 16-bit words")]
    OddLength(usize),

    #[error("cannot lay out {words} words in rows of zero pixels")]
    ZeroWidth { words: usize },

    #[error("{words} words do not fill rows of {width} pixels")]
    PartialRow { words: usize, width: u32 },

    #[error("{words} words in rows of {width} pixels exceeds the maximum image height")]
    TooTall { words: usize, width: u32 },
}

/// Rebuilds an RGB image from a raw stream whose row width is known.
///
/// Channels come back through [`Rgb565::to_rgb888`], so the low bits dropped
/// while packing stay zero.
pub fn unpack(bytes: &[u8], width: u32, order: ByteOrder) -> Result<RgbImage, UnpackError> {
    if bytes.is_empty() {
        return Ok(RgbImage::new(0, 0));
    }
    if bytes.len() % 2 != 0 {
        return Err(UnpackError::OddLength(bytes.len()));
    }

    let words = bytes.len() / 2;
    if width == 0 {
        return Err(UnpackError::ZeroWidth { words });
    }
    if words % width as usize != 0 {
        return Err(UnpackError::PartialRow { words, width });
    }
    let height = u32::try_from(words / width as usize)
        .map_err(|_| UnpackError::TooTall { words, width })?;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let offset = (y as usize * width as usize + x as usize) * 2;
        let word = Rgb565::from_bytes([bytes[offset], bytes[offset + 1]], order);
        Rgb(word.to_rgb888())
    }))
}
