// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

#[macro_use]
extern crate log;

mod app;

use std::env;
use std::path::Path;
use std::process;

use render_surface::util::Logger;

use crate::app::{App, Cli};

static NAME: &str = "render-surface";
static LOGGER_CONFIG: &str = "logger.conf";

fn main() {
    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(_) => process::exit(0),
        Err(err) => {
            println!("Error: {}", err);
            process::exit(1)
        }
    };
}

fn init_logging(matches: &getopts::Matches) -> Result<(), String> {
    let loglevel = matches
        .opt_str("loglevel")
        .unwrap_or_else(|| "info".to_string());
    let mut logger = Logger::build(&loglevel)?;
    logger.load_config(Path::new(LOGGER_CONFIG))?;
    for target_level in matches.opt_strs("log") {
        if let Some(equals) = target_level.find('=') {
            let (target, level) = target_level.split_at(equals);
            logger.add_target(target.to_string(), &level[1..])?;
        } else {
            return Err(format!("invalid log target pair {}", target_level));
        }
    }
    Logger::enable(logger)?;
    Ok(())
}

fn run(args: &[String]) -> Result<(), String> {
    let matches = Cli::parse_args(args)?;
    if matches.opt_present("help") {
        Cli::print_help();
    } else if matches.opt_present("version") {
        Cli::print_version();
    } else {
        init_logging(&matches)?;
        info!("Starting {}", NAME);
        let options = Cli::parse_app_options(&matches)?;
        let mut app = App::build(options)?;
        app.run()?;
    }
    Ok(())
}
