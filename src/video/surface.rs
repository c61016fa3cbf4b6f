// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use byteorder::{ByteOrder, NativeEndian};

use super::palette::Palette;
use crate::util::Dimension;

const PIXEL_BYTES: usize = 4;
const ROW_ALIGNMENT: u32 = 8;

/// 32bpp ARGB8888 back buffer with rows padded to a multiple of 8 pixels.
pub struct Surface {
    dim: Dimension,
    padding: u32,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn build(width: u32, height: u32) -> Result<Surface, String> {
        if width == 0 || height == 0 {
            return Err(format!("invalid surface size {}x{}", width, height));
        }
        let padding = row_padding(width);
        let len = (width + padding) as usize * height as usize * PIXEL_BYTES;
        Ok(Surface {
            dim: Dimension::new(width, height),
            padding,
            pixels: vec![0; len],
        })
    }

    pub fn get_padding(&self) -> u32 {
        self.padding
    }

    pub fn get_pitch(&self) -> usize {
        (self.dim.width + self.padding) as usize * PIXEL_BYTES
    }

    pub fn get_pixel_data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> u32 {
        let offset = y as usize * self.get_pitch() + x as usize * PIXEL_BYTES;
        NativeEndian::read_u32(&self.pixels[offset..offset + PIXEL_BYTES])
    }

    /// Converts one frame of palette indices, row by row, skipping padding.
    /// Only complete source rows present in `pixels` are written.
    pub fn draw_frame(&mut self, pixels: &[u16], palette: &Palette) {
        let width = self.dim.width as usize;
        let visible = width * PIXEL_BYTES;
        let pitch = self.get_pitch();
        let rows = pixels
            .chunks_exact(width)
            .zip(self.pixels.chunks_exact_mut(pitch));
        for (src, dst) in rows {
            for (index, out) in src.iter().zip(dst[..visible].chunks_exact_mut(PIXEL_BYTES)) {
                NativeEndian::write_u32(out, palette.lookup(*index));
            }
        }
    }
}

pub fn row_padding(width: u32) -> u32 {
    match width % ROW_ALIGNMENT {
        0 => 0,
        rem => ROW_ALIGNMENT - rem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_for_aligned_width() {
        assert_eq!(0, row_padding(320));
        let surface = Surface::build(320, 224).unwrap();
        assert_eq!(320 * 4, surface.get_pitch());
        assert_eq!(320 * 224 * 4, surface.get_pixel_data().len());
    }

    #[test]
    fn padding_for_widescreen_width() {
        assert_eq!(2, row_padding(398));
        assert_eq!(7, row_padding(1));
        let surface = Surface::build(398, 224).unwrap();
        assert_eq!(2, surface.get_padding());
        assert_eq!(400 * 4, surface.get_pitch());
    }

    #[test]
    fn build_with_zero_size() {
        assert!(Surface::build(0, 224).is_err());
        assert!(Surface::build(320, 0).is_err());
    }

    #[test]
    fn draw_frame_skips_padding() {
        let palette = Palette::new(vec![0xff00_0000, 0xffff_0000, 0xff00_ff00, 0xff00_00ff]).unwrap();
        let mut surface = Surface::build(6, 2).unwrap();
        let pixels = [0, 1, 2, 3, 0, 1, 3, 2, 1, 0, 3, 2];
        surface.draw_frame(&pixels, &palette);
        assert_eq!(0xffff_0000, surface.get_pixel(1, 0));
        assert_eq!(0xff00_ff00, surface.get_pixel(2, 0));
        assert_eq!(0xff00_00ff, surface.get_pixel(0, 1));
        assert_eq!(0xff00_ff00, surface.get_pixel(5, 1));
        assert_eq!(0, surface.get_pixel(6, 0));
        assert_eq!(0, surface.get_pixel(7, 1));
    }

    #[test]
    fn draw_frame_with_short_input() {
        let palette = Palette::new(vec![0xff00_0000, 0xffff_ffff]).unwrap();
        let mut surface = Surface::build(4, 2).unwrap();
        surface.draw_frame(&[1, 1, 1, 1, 1, 1], &palette);
        assert_eq!(0xffff_ffff, surface.get_pixel(3, 0));
        assert_eq!(0, surface.get_pixel(0, 1));
    }
}
