// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use render_surface::config::VideoMode;
use render_surface::util::{Dimension, Rect};
use render_surface::video::{pack_rgb, Geometry, Palette, Surface};

/*
Widescreen frame of 398x224 as produced by a tile renderer. Rows are padded
to 400 pixels, so the pitch is 1600 bytes and the last two pixels of every
row are never written.
*/

const WIDTH: u32 = 398;
const HEIGHT: u32 = 224;

fn stripe_frame() -> Vec<u16> {
    (0..WIDTH * HEIGHT)
        .map(|i| ((i % WIDTH) / 50) as u16)
        .collect()
}

fn stripe_palette() -> Palette {
    let colors: Vec<(u8, u8, u8)> = (0..8u8).map(|i| (i * 32, 0xff - i * 32, i)).collect();
    Palette::from_rgb(&colors).unwrap()
}

#[test]
fn widescreen_frame_conversion() {
    let palette = stripe_palette();
    let mut surface = Surface::build(WIDTH, HEIGHT).unwrap();
    surface.draw_frame(&stripe_frame(), &palette);
    assert_eq!(1600, surface.get_pitch());
    assert_eq!(1600 * HEIGHT as usize, surface.get_pixel_data().len());
    for y in &[0, 100, HEIGHT - 1] {
        assert_eq!(pack_rgb(0, 0xff, 0), surface.get_pixel(0, *y));
        assert_eq!(pack_rgb(32, 0xdf, 1), surface.get_pixel(50, *y));
        assert_eq!(pack_rgb(7 * 32, 0xff - 7 * 32, 7), surface.get_pixel(WIDTH - 1, *y));
        assert_eq!(0, surface.get_pixel(WIDTH, *y));
        assert_eq!(0, surface.get_pixel(WIDTH + 1, *y));
    }
}

#[test]
fn palette_update_applies_on_next_frame() {
    let mut palette = stripe_palette();
    let mut surface = Surface::build(WIDTH, HEIGHT).unwrap();
    let frame = stripe_frame();
    surface.draw_frame(&frame, &palette);
    palette.set_rgb(0, 0x10, 0x20, 0x30);
    assert_eq!(pack_rgb(0, 0xff, 0), surface.get_pixel(10, 10));
    surface.draw_frame(&frame, &palette);
    assert_eq!(pack_rgb(0x10, 0x20, 0x30), surface.get_pixel(10, 10));
}

#[test]
fn geometry_per_mode() {
    let source = Dimension::new(320, 224);
    let screen = Dimension::new(1920, 1080);
    let full = Geometry::compute(source, 2, VideoMode::Full, screen).unwrap();
    let stretch = Geometry::compute(source, 2, VideoMode::Stretch, screen).unwrap();
    let window = Geometry::compute(source, 2, VideoMode::Window, screen).unwrap();
    assert_eq!(1080, full.dst_rect.size.height);
    assert_eq!(full.dst_rect.left, (1920 - full.dst_rect.right()));
    assert_eq!(Rect::new(0, 0, 1920, 1080), stretch.dst_rect);
    assert_eq!(Rect::new(0, 0, 640, 448), window.dst_rect);
    for geometry in &[full, stretch, window] {
        assert_eq!(Rect::new(0, 0, 320, 224), geometry.src_rect);
    }
    assert_eq!(Dimension::new(640, 448), window.window_size);
    assert_eq!(screen, full.window_size);
}
