// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::result::Result;

use sdl2;
use sdl2::mouse::MouseUtil;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render;
use sdl2::video;
use time;

use super::geometry::Geometry;
use super::palette::Palette;
use super::surface::Surface;
use crate::config::{VideoConfig, VideoMode};
use crate::util::Dimension;

const SCALE_QUALITY_HINT: &str = "SDL_RENDER_SCALE_QUALITY";

#[derive(Copy, Clone, Debug)]
struct Settings {
    source_size: Dimension,
    scale: u32,
    mode: VideoMode,
    scanlines: u32,
}

struct Display {
    canvas: render::WindowCanvas,
    #[allow(dead_code)]
    creator: render::TextureCreator<video::WindowContext>,
    texture: render::Texture,
    surface: Surface,
    geometry: Geometry,
}

impl Display {
    fn destroy(self) {
        let Display {
            canvas,
            creator,
            texture,
            ..
        } = self;
        // Textures are unmanaged and must be released while the renderer is alive.
        unsafe {
            texture.destroy();
        }
        drop(creator);
        drop(canvas);
    }
}

/// Presents palette-indexed frames through an SDL2 window, renderer and
/// streaming texture.
///
/// Nothing is opened until `init`. Each frame goes through `draw_frame`,
/// which converts indices into the owned 32bpp surface, and
/// `finalize_frame`, which uploads and presents it.
pub struct RenderSurface {
    // Dependencies
    sdl_video: sdl2::VideoSubsystem,
    mouse: MouseUtil,
    config: VideoConfig,
    palette: Palette,
    // Components
    display: Option<Display>,
    settings: Option<Settings>,
    // Runtime State
    frame: u32,
    last_frame_ts: u64,
    last_frame_duration_ns: u64,
}

impl RenderSurface {
    pub fn new(
        sdl_context: &sdl2::Sdl,
        config: VideoConfig,
        palette: Palette,
    ) -> Result<RenderSurface, String> {
        let sdl_video = sdl_context.video()?;
        let mouse = sdl_context.mouse();
        Ok(RenderSurface {
            sdl_video,
            mouse,
            config,
            palette,
            display: None,
            settings: None,
            frame: 0,
            last_frame_ts: 0,
            last_frame_duration_ns: 0,
        })
    }

    pub fn init(
        &mut self,
        source_width: u32,
        source_height: u32,
        scale: u32,
        mode: VideoMode,
        scanlines: u32,
    ) -> Result<(), String> {
        self.disable();
        let settings = Settings {
            source_size: Dimension::new(source_width, source_height),
            scale,
            mode,
            scanlines,
        };
        // Keep the attempted settings so a later mode switch retries them.
        self.settings = Some(settings);
        match self.open(&settings) {
            Ok(display) => {
                self.display = Some(display);
                Ok(())
            }
            Err(err) => {
                error!(target: "video", "Render surface initialization failed: {}", err);
                Err(err)
            }
        }
    }

    pub fn start_frame(&mut self) -> bool {
        true
    }

    pub fn draw_frame(&mut self, pixels: &[u16]) {
        if let Some(display) = self.display.as_mut() {
            display.surface.draw_frame(pixels, &self.palette);
        }
    }

    pub fn finalize_frame(&mut self) -> Result<(), String> {
        let display = self
            .display
            .as_mut()
            .ok_or_else(|| "render surface not initialized".to_string())?;
        display
            .texture
            .update(
                None,
                display.surface.get_pixel_data(),
                display.surface.get_pitch(),
            )
            .map_err(|err| format!("failed to update texture: {}", err))?;
        let src_rect: sdl2::rect::Rect = display.geometry.src_rect.into();
        let dst_rect: sdl2::rect::Rect = display.geometry.dst_rect.into();
        display.canvas.clear();
        display.canvas.copy(&display.texture, src_rect, dst_rect)?;
        display.canvas.present();
        let now = time::precise_time_ns();
        if self.last_frame_ts != 0 {
            self.last_frame_duration_ns = now.saturating_sub(self.last_frame_ts);
        }
        self.last_frame_ts = now;
        self.frame = self.frame.wrapping_add(1);
        Ok(())
    }

    pub fn disable(&mut self) {
        if let Some(display) = self.display.take() {
            info!(target: "video", "Closing render surface after {} frames", self.frame);
            display.destroy();
        }
    }

    /// Reopens the display in `mode` with the size, scale and scanlines of the last `init`.
    pub fn set_video_mode(&mut self, mode: VideoMode) -> Result<(), String> {
        let settings = self
            .settings
            .ok_or_else(|| "render surface not initialized".to_string())?;
        self.init(
            settings.source_size.width,
            settings.source_size.height,
            settings.scale,
            mode,
            settings.scanlines,
        )
    }

    pub fn toggle_fullscreen(&mut self) -> Result<(), String> {
        let mode = self.video_mode().unwrap_or(VideoMode::Full).toggled();
        self.set_video_mode(mode)
    }

    pub fn is_enabled(&self) -> bool {
        self.display.is_some()
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.display.as_ref().map(|display| display.geometry)
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.display.as_ref().map(|display| &display.surface)
    }

    /// Mode of the open display, `None` before `init`, after `disable` or a failed `init`.
    pub fn video_mode(&self) -> Option<VideoMode> {
        self.display.as_ref().map(|display| display.geometry.mode)
    }

    pub fn frame_count(&self) -> u32 {
        self.frame
    }

    pub fn last_frame_duration_ns(&self) -> u64 {
        self.last_frame_duration_ns
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    fn get_screen_size(&self) -> Result<Dimension, String> {
        let mode = self.sdl_video.desktop_display_mode(0)?;
        if mode.w <= 0 || mode.h <= 0 {
            return Err(format!("invalid display size {}x{}", mode.w, mode.h));
        }
        Ok(Dimension::new(mode.w as u32, mode.h as u32))
    }

    fn open(&self, settings: &Settings) -> Result<Display, String> {
        let source = settings.source_size;
        let surface = Surface::build(source.width, source.height)
            .map_err(|err| format!("Surface creation failed: {}", err))?;
        let screen = self.get_screen_size()?;
        let geometry = Geometry::compute(source, settings.scale, settings.mode, screen)?;
        info!(
            target: "video",
            "Opening {} surface {}x{}, window {}x{}",
            settings.mode,
            source.width,
            source.height,
            geometry.window_size.width,
            geometry.window_size.height
        );
        if settings.scanlines > 0 {
            debug!(target: "video", "Ignoring scanlines {}", settings.scanlines);
        }
        self.mouse.show_cursor(geometry.show_cursor());
        if !sdl2::hint::set(SCALE_QUALITY_HINT, self.config.scale_quality.as_hint()) {
            warn!(target: "video", "Scale quality hint not applied");
        }
        let mut builder = self.sdl_video.window(
            &self.config.title,
            geometry.window_size.width,
            geometry.window_size.height,
        );
        if geometry.is_fullscreen() {
            builder.fullscreen();
        } else {
            builder.position_centered();
        }
        let window = builder
            .build()
            .map_err(|err| format!("Window creation failed: {}", err))?;
        let mut canvas_builder = window.into_canvas().accelerated();
        if self.config.vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let mut canvas = canvas_builder
            .build()
            .map_err(|err| format!("Renderer creation failed: {}", err))?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        let creator = canvas.texture_creator();
        let texture = creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, source.width, source.height)
            .map_err(|err| format!("Texture creation failed: {}", err))?;
        Ok(Display {
            canvas,
            creator,
            texture,
            surface,
            geometry,
        })
    }
}

impl Drop for RenderSurface {
    fn drop(&mut self) {
        self.disable();
    }
}
