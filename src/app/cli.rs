// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::fmt::Display;
use std::result::Result;
use std::str::FromStr;

use getopts;
use render_surface::config::{ScaleQuality, VideoConfig, VideoMode};
use render_surface::util::Dimension;

use super::app;

static NAME: &str = "render-surface";
static VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Cli;

impl Cli {
    pub fn parse_args(args: &[String]) -> Result<getopts::Matches, String> {
        let opts = Cli::build_options();
        let matches = opts
            .parse(&args[1..])
            .map_err(|f| format!("Invalid options\n{}", f))?;
        Ok(matches)
    }

    pub fn parse_app_options(matches: &getopts::Matches) -> Result<app::Options, String> {
        let width = Cli::parse_opt(matches, "width", 320u32)?;
        let height = Cli::parse_opt(matches, "height", 224u32)?;
        let frame_rate = Cli::parse_opt(matches, "fps", 60u32)?;
        if frame_rate == 0 {
            return Err("invalid frame rate 0".to_string());
        }
        let options = app::Options {
            source_size: Dimension::new(width, height),
            scale: Cli::parse_opt(matches, "scale", 2u32)?,
            mode: Cli::parse_opt(matches, "mode", VideoMode::Window)?,
            scanlines: Cli::parse_opt(matches, "scanlines", 0u32)?,
            frame_rate,
            video: Cli::parse_video_config(matches)?,
        };
        Ok(options)
    }

    pub fn print_help() {
        let opts = Cli::build_options();
        println!("{} {}", NAME, VERSION);
        println!();
        println!("Usage:");
        print!("{}", opts.usage("Palette-indexed frame presenter"));
    }

    pub fn print_version() {
        println!("{} {}", NAME, VERSION);
    }

    fn build_options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        // Source
        opts.optopt("", "width", "source frame width", "320")
            .optopt("", "height", "source frame height", "224")
            .optopt("", "fps", "target frame rate", "60")
            // Video
            .optopt("", "mode", "set video mode", "[window|full|stretch]")
            .optopt("", "scale", "window scale factor", "2")
            .optopt("", "scanlines", "scanline intensity", "0")
            .optopt("", "quality", "set scale quality", "[nearest|linear|best]")
            .optflag("", "novsync", "disable vertical sync")
            // Logging
            .optopt("", "loglevel", "set log level", "[error|warn|info|debug|trace]")
            .optmulti("", "log", "set log level for a target", "target=level")
            // Help
            .optflag("h", "help", "display this help")
            .optflag("V", "version", "display this version");
        opts
    }

    fn parse_video_config(matches: &getopts::Matches) -> Result<VideoConfig, String> {
        let mut config = VideoConfig::default();
        config.vsync = !matches.opt_present("novsync");
        config.scale_quality = Cli::parse_opt(matches, "quality", ScaleQuality::Linear)?;
        Ok(config)
    }

    fn parse_opt<T>(matches: &getopts::Matches, name: &str, default: T) -> Result<T, String>
    where
        T: FromStr,
        T::Err: Display,
    {
        match matches.opt_str(name) {
            Some(value) => value
                .parse::<T>()
                .map_err(|err| format!("invalid value {} for {}: {}", value, name, err)),
            None => Ok(default),
        }
    }
}
