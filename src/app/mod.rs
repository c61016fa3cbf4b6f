// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

mod app;
mod cli;
mod pattern;

pub use self::app::App;
pub use self::cli::Cli;
