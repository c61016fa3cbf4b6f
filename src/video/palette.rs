// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

const OPAQUE: u32 = 0xff00_0000;

/// Lookup table from palette index to packed ARGB8888 color.
///
/// Indices are masked with `len - 1`, so any `u16` selects an entry that
/// exists. Power-of-two tables behave as a plain wrap-around.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<u32>,
    mask: usize,
}

impl Palette {
    pub fn new(colors: Vec<u32>) -> Result<Palette, String> {
        if colors.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        let mask = colors.len() - 1;
        Ok(Palette { colors, mask })
    }

    pub fn from_rgb(colors: &[(u8, u8, u8)]) -> Result<Palette, String> {
        Palette::new(
            colors
                .iter()
                .map(|&(r, g, b)| pack_rgb(r, g, b))
                .collect(),
        )
    }

    #[inline]
    pub fn lookup(&self, index: u16) -> u32 {
        self.colors[index as usize & self.mask]
    }

    pub fn set(&mut self, index: usize, argb: u32) {
        if let Some(color) = self.colors.get_mut(index) {
            *color = argb;
        }
    }

    pub fn set_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.set(index, pack_rgb(r, g, b));
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    OPAQUE | (r as u32) << 16 | (g as u32) << 8 | b as u32
}
