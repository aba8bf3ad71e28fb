/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};

/// Read access to a decoded pixel grid.
///
/// Anything that can report its dimensions and hand out the 8-bit RGB
/// channels of a pixel can be packed. Alpha, if the backing storage has one,
/// never reaches the packer.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Channels of the pixel at `(x, y)`. Callers keep `x < width` and
    /// `y < height`.
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];

    fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel<Subpixel = u8>,
    C: Deref<Target = [u8]>,
{
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).to_rgb().0
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

/// Owned row-major RGB grid for pixels that did not come out of `image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbGrid {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl RgbGrid {
    /// Returns `None` when `pixels` does not hold exactly `width * height`
    /// entries.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Option<Self> {
        if pixels.len() as u64 != width as u64 * height as u64 {
            return None;
        }

        Some(RgbGrid {
            width,
            height,
            pixels,
        })
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        RgbGrid {
            width,
            height,
            pixels,
        }
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }
}

impl PixelSource for RgbGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
