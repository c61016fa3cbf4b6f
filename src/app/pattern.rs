// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use render_surface::util::Dimension;
use render_surface::video::Palette;

const BAR_COLORS: [(u8, u8, u8); 8] = [
    (0xff, 0xff, 0xff),
    (0xff, 0xff, 0x00),
    (0x00, 0xff, 0xff),
    (0x00, 0xff, 0x00),
    (0xff, 0x00, 0xff),
    (0xff, 0x00, 0x00),
    (0x00, 0x00, 0xff),
    (0x00, 0x00, 0x00),
];
const GRAY_BASE: u16 = 8;
const GRAY_STEPS: u16 = 8;
const RASTER_INDEX: u16 = 0;

/// Palette-indexed color bars over a gray ramp with a rolling raster line.
pub struct TestPattern {
    dim: Dimension,
    pixels: Vec<u16>,
    frame: u32,
}

impl TestPattern {
    pub fn new(dim: Dimension) -> TestPattern {
        let mut pattern = TestPattern {
            dim,
            pixels: vec![0; dim.area()],
            frame: 0,
        };
        pattern.render();
        pattern
    }

    pub fn palette() -> Result<Palette, String> {
        let mut colors = BAR_COLORS.to_vec();
        for step in 0..GRAY_STEPS {
            let level = (step * 255 / (GRAY_STEPS - 1)) as u8;
            colors.push((level, level, level));
        }
        Palette::from_rgb(&colors)
    }

    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.render();
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn raster_line(&self) -> u32 {
        self.frame % self.dim.height.max(1)
    }

    fn render(&mut self) {
        let width = self.dim.width as usize;
        let bars_height = self.dim.height as usize * 2 / 3;
        let raster = self.raster_line() as usize;
        for (y, row) in self.pixels.chunks_exact_mut(width.max(1)).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = if y == raster {
                    RASTER_INDEX
                } else if y < bars_height {
                    (x * BAR_COLORS.len() / width) as u16
                } else {
                    GRAY_BASE + (x * GRAY_STEPS as usize / width) as u16
                };
            }
        }
    }
}
