// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use sdl2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub fn new(width: u32, height: u32) -> Dimension {
        Dimension { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Multiplies both sides by `factor`, or `None` when a side overflows.
    pub fn checked_scale(&self, factor: u32) -> Option<Dimension> {
        let width = self.width.checked_mul(factor)?;
        let height = self.height.checked_mul(factor)?;
        Some(Dimension::new(width, height))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub size: Dimension,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Rect {
        Rect::new_with_dim(left, top, Dimension::new(width, height))
    }

    pub fn new_with_dim(left: i32, top: i32, size: Dimension) -> Rect {
        Rect { left, top, size }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.left + self.size.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.top + self.size.height as i32
    }

    pub fn size(&self) -> Dimension {
        self.size
    }
}

impl From<Rect> for sdl2::rect::Rect {
    fn from(rect: Rect) -> sdl2::rect::Rect {
        sdl2::rect::Rect::new(rect.left, rect.top, rect.size.width, rect.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_exclusive() {
        let rect = Rect::new(10, 20, 300, 200);
        assert_eq!(310, rect.right());
        assert_eq!(220, rect.bottom());
    }

    #[test]
    fn scale_dimension() {
        let dim = Dimension::new(320, 224).checked_scale(3).unwrap();
        assert_eq!(Dimension::new(960, 672), dim);
        assert_eq!(960 * 672, dim.area());
    }

    #[test]
    fn scale_dimension_overflow() {
        assert_eq!(None, Dimension::new(320, 224).checked_scale(20_000_000));
        assert_eq!(None, Dimension::new(1, u32::max_value()).checked_scale(2));
    }

    #[test]
    fn convert_to_sdl_rect() {
        let rect: sdl2::rect::Rect = Rect::new(-4, 8, 16, 32).into();
        assert_eq!(-4, rect.x());
        assert_eq!(8, rect.y());
        assert_eq!(16, rect.width());
        assert_eq!(32, rect.height());
    }
}
