// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VideoMode {
    /// Integer-scaled window.
    Window,
    /// Fullscreen with the source aspect ratio preserved.
    Full,
    /// Fullscreen stretched over the whole display.
    Stretch,
}

impl VideoMode {
    /// Maps numeric mode settings; anything unknown falls back to a window.
    pub fn from_index(index: u32) -> VideoMode {
        match index {
            1 => VideoMode::Full,
            2 => VideoMode::Stretch,
            _ => VideoMode::Window,
        }
    }

    pub fn is_fullscreen(self) -> bool {
        self != VideoMode::Window
    }

    /// Window goes to `Full`, any fullscreen mode goes back to `Window`.
    pub fn toggled(self) -> VideoMode {
        match self {
            VideoMode::Window => VideoMode::Full,
            VideoMode::Full | VideoMode::Stretch => VideoMode::Window,
        }
    }

    pub fn next(self) -> VideoMode {
        match self {
            VideoMode::Window => VideoMode::Full,
            VideoMode::Full => VideoMode::Stretch,
            VideoMode::Stretch => VideoMode::Window,
        }
    }
}

impl FromStr for VideoMode {
    type Err = String;

    fn from_str(s: &str) -> Result<VideoMode, String> {
        match s {
            "window" | "0" => Ok(VideoMode::Window),
            "full" | "fullscreen" | "1" => Ok(VideoMode::Full),
            "stretch" | "2" => Ok(VideoMode::Stretch),
            _ => Err(format!("invalid video mode {}", s)),
        }
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            VideoMode::Window => "window",
            VideoMode::Full => "full",
            VideoMode::Stretch => "stretch",
        };
        write!(f, "{}", name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScaleQuality {
    Nearest,
    Linear,
    Best,
}

impl ScaleQuality {
    pub fn as_hint(self) -> &'static str {
        match self {
            ScaleQuality::Nearest => "nearest",
            ScaleQuality::Linear => "linear",
            ScaleQuality::Best => "best",
        }
    }
}

impl FromStr for ScaleQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<ScaleQuality, String> {
        match s {
            "nearest" => Ok(ScaleQuality::Nearest),
            "linear" => Ok(ScaleQuality::Linear),
            "best" => Ok(ScaleQuality::Best),
            _ => Err(format!("invalid scale quality {}", s)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct VideoConfig {
    pub title: String,
    pub vsync: bool,
    pub scale_quality: ScaleQuality,
}

impl VideoConfig {
    pub fn default() -> VideoConfig {
        VideoConfig {
            title: String::from("render-surface"),
            vsync: true,
            scale_quality: ScaleQuality::Linear,
        }
    }
}
