// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::result::Result;
use std::thread;
use std::time::Duration;

use sdl2;
use sdl2::event::Event;
use sdl2::keyboard;
use sdl2::keyboard::Keycode;
use sdl2::{EventPump, Sdl};
use time;

use render_surface::config::{VideoConfig, VideoMode};
use render_surface::util::Dimension;
use render_surface::video::RenderSurface;

use super::pattern::TestPattern;

const STATS_INTERVAL: u32 = 300;

pub struct Options {
    pub source_size: Dimension,
    pub scale: u32,
    pub mode: VideoMode,
    pub scanlines: u32,
    pub frame_rate: u32,
    pub video: VideoConfig,
}

#[derive(Debug, PartialEq)]
enum State {
    Running,
    Paused,
    Stopped,
}

pub struct App {
    // Dependencies
    options: Options,
    // Components
    sdl_context: Sdl,
    render_surface: RenderSurface,
    pattern: TestPattern,
    // Runtime State
    state: State,
    next_frame_ns: u64,
}

impl App {
    pub fn build(options: Options) -> Result<App, String> {
        let sdl_context = sdl2::init()?;
        let mut render_surface =
            RenderSurface::new(&sdl_context, options.video.clone(), TestPattern::palette()?)?;
        render_surface.init(
            options.source_size.width,
            options.source_size.height,
            options.scale,
            options.mode,
            options.scanlines,
        )?;
        let pattern = TestPattern::new(options.source_size);
        Ok(App {
            options,
            sdl_context,
            render_surface,
            pattern,
            state: State::Running,
            next_frame_ns: 0,
        })
    }

    pub fn run(&mut self) -> Result<(), String> {
        info!(target: "app", "Running main loop");
        let mut events = self.sdl_context.event_pump()?;
        'running: loop {
            match self.state {
                State::Running => {
                    self.handle_events(&mut events)?;
                    if self.render_surface.start_frame() {
                        self.pattern.advance();
                        self.render_surface.draw_frame(self.pattern.pixels());
                        self.render_surface.finalize_frame()?;
                    }
                    self.sync_frame();
                    self.log_stats();
                }
                State::Paused => {
                    self.handle_events(&mut events)?;
                    let wait = Duration::from_millis(20);
                    thread::sleep(wait);
                }
                State::Stopped => {
                    info!(target: "app", "State {:?}", self.state);
                    break 'running;
                }
            }
        }
        self.render_surface.disable();
        Ok(())
    }

    fn log_stats(&self) {
        let frame = self.render_surface.frame_count();
        if frame % STATS_INTERVAL == 0 {
            debug!(
                target: "app",
                "Frame {}, last frame took {} us",
                frame,
                self.render_surface.last_frame_duration_ns() / 1000
            );
        }
    }

    fn sync_frame(&mut self) {
        let frame_duration_ns = 1_000_000_000 / u64::from(self.options.frame_rate);
        let time_ns = time::precise_time_ns();
        let wait_ns = if self.next_frame_ns > time_ns {
            self.next_frame_ns - time_ns
        } else {
            0
        };
        if wait_ns > 0 && wait_ns <= frame_duration_ns {
            thread::sleep(Duration::from_nanos(wait_ns));
        }
        self.next_frame_ns = time::precise_time_ns() + frame_duration_ns;
    }

    fn cycle_video_mode(&mut self) -> Result<(), String> {
        let mode = self
            .render_surface
            .video_mode()
            .unwrap_or(self.options.mode)
            .next();
        info!(target: "app", "Switching to {} mode", mode);
        self.render_surface.set_video_mode(mode)
    }

    fn toggle_pause(&mut self) {
        let new_state = match self.state {
            State::Running => Some(State::Paused),
            State::Paused => Some(State::Running),
            _ => None,
        };
        if let Some(state) = new_state {
            self.state = state;
        }
    }

    // -- Event Handling

    fn handle_events(&mut self, events: &mut EventPump) -> Result<(), String> {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.state = State::Stopped;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    keymod,
                    repeat: false,
                    ..
                } if keymod.contains(keyboard::LALTMOD) => {
                    self.toggle_pause();
                }
                Event::KeyDown {
                    keycode: Some(Keycode::M),
                    keymod,
                    repeat: false,
                    ..
                } if keymod.contains(keyboard::LALTMOD) => {
                    self.cycle_video_mode()?;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    keymod,
                    repeat: false,
                    ..
                } if keymod.contains(keyboard::LALTMOD) => {
                    self.render_surface.toggle_fullscreen()?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}
