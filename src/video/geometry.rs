// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use crate::config::VideoMode;
use crate::util::{Dimension, Rect};

/// Window size and the rectangles used when copying the frame to the display.
///
/// The source rect always covers the whole frame. In fullscreen modes the
/// window takes the display size; in windowed mode it is the frame scaled by
/// an integer factor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub mode: VideoMode,
    pub window_size: Dimension,
    pub src_rect: Rect,
    pub dst_rect: Rect,
}

impl Geometry {
    pub fn compute(
        source: Dimension,
        scale: u32,
        mode: VideoMode,
        screen: Dimension,
    ) -> Result<Geometry, String> {
        let src_rect = Rect::new_with_dim(0, 0, source);
        let geometry = match mode {
            VideoMode::Full => Geometry {
                mode,
                window_size: screen,
                src_rect,
                dst_rect: fit_aspect(source, screen),
            },
            VideoMode::Stretch => Geometry {
                mode,
                window_size: screen,
                src_rect,
                dst_rect: Rect::new_with_dim(0, 0, screen),
            },
            VideoMode::Window => {
                let window_size = source
                    .checked_scale(scale.max(1))
                    .filter(|size| size.width <= i32::max_value() as u32)
                    .filter(|size| size.height <= i32::max_value() as u32)
                    .ok_or_else(|| "window size overflow".to_string())?;
                Geometry {
                    mode,
                    window_size,
                    src_rect,
                    dst_rect: Rect::new_with_dim(0, 0, window_size),
                }
            }
        };
        Ok(geometry)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.mode.is_fullscreen()
    }

    pub fn show_cursor(&self) -> bool {
        !self.is_fullscreen()
    }
}

// Pillarbox at full height when the display is wider than the source,
// otherwise letterbox at full width.
fn fit_aspect(source: Dimension, screen: Dimension) -> Rect {
    let x_ratio = source.width as f32 / source.height as f32;
    let corrected_width = (screen.height as f32 * x_ratio) as u32;
    if corrected_width <= screen.width {
        let left = (screen.width - corrected_width) / 2;
        Rect::new(left as i32, 0, corrected_width, screen.height)
    } else {
        let y_ratio = source.height as f32 / source.width as f32;
        let corrected_height = (screen.width as f32 * y_ratio) as u32;
        let top = (screen.height - corrected_height) / 2;
        Rect::new(0, top as i32, screen.width, corrected_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: Dimension = Dimension {
        width: 320,
        height: 240,
    };
    const SCREEN_16_9: Dimension = Dimension {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn full_pillarboxes_on_wide_screen() {
        let geometry = Geometry::compute(SOURCE, 2, VideoMode::Full, SCREEN_16_9).unwrap();
        assert_eq!(SCREEN_16_9, geometry.window_size);
        assert_eq!(Rect::new(240, 0, 1440, 1080), geometry.dst_rect);
        assert_eq!(geometry.dst_rect.left, 1920 - geometry.dst_rect.right());
        assert!(geometry.is_fullscreen());
        assert!(!geometry.show_cursor());
    }

    #[test]
    fn full_letterboxes_on_narrow_screen() {
        let screen = Dimension::new(1080, 1920);
        let geometry = Geometry::compute(SOURCE, 1, VideoMode::Full, screen).unwrap();
        assert_eq!(Rect::new(0, 555, 1080, 810), geometry.dst_rect);
    }

    #[test]
    fn full_truncates_corrected_width() {
        let source = Dimension::new(320, 224);
        let geometry = Geometry::compute(source, 1, VideoMode::Full, SCREEN_16_9).unwrap();
        assert_eq!(Rect::new(189, 0, 1542, 1080), geometry.dst_rect);
    }

    #[test]
    fn full_letterboxes_widescreen_source() {
        let source = Dimension::new(398, 224);
        let screen = Dimension::new(1280, 1024);
        let geometry = Geometry::compute(source, 1, VideoMode::Full, screen).unwrap();
        assert_eq!(Rect::new(0, 152, 1280, 720), geometry.dst_rect);
    }

    #[test]
    fn stretch_fills_screen() {
        let geometry = Geometry::compute(SOURCE, 3, VideoMode::Stretch, SCREEN_16_9).unwrap();
        assert_eq!(Rect::new(0, 0, 1920, 1080), geometry.dst_rect);
        assert_eq!(Rect::new(0, 0, 320, 240), geometry.src_rect);
    }

    #[test]
    fn window_scales_by_integer() {
        let geometry = Geometry::compute(SOURCE, 3, VideoMode::Window, SCREEN_16_9).unwrap();
        assert_eq!(Dimension::new(960, 720), geometry.window_size);
        assert_eq!(Rect::new(0, 0, 960, 720), geometry.dst_rect);
        assert!(geometry.show_cursor());
    }

    #[test]
    fn window_scale_overflow() {
        let result = Geometry::compute(SOURCE, 20_000_000, VideoMode::Window, SCREEN_16_9);
        assert_eq!(Err("window size overflow".to_string()), result);
        let result = Geometry::compute(SOURCE, 0x0080_0000, VideoMode::Window, SCREEN_16_9);
        assert!(result.is_err());
    }

    #[test]
    fn window_with_zero_scale() {
        let geometry = Geometry::compute(SOURCE, 0, VideoMode::Window, SCREEN_16_9).unwrap();
        assert_eq!(SOURCE, geometry.window_size);
    }
}
