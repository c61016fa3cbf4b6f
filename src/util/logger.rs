// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::result::Result;
use std::str::FromStr;

use log;
use log::{LogLevel, LogMetadata, LogRecord};

pub struct Logger {
    level: LogLevel,
    targets: HashMap<String, LogLevel>,
}

impl Logger {
    pub fn build(level: &str) -> Result<Logger, String> {
        let loglevel =
            LogLevel::from_str(level).map_err(|_| format!("invalid log level {}", level))?;
        Ok(Logger {
            level: loglevel,
            targets: HashMap::new(),
        })
    }

    pub fn enable(logger: Logger) -> Result<(), String> {
        log::set_logger(|max_log_level| {
            max_log_level.set(logger.get_max_level().to_log_level_filter());
            Box::new(logger)
        })
        .map_err(|_| "cannot initialize logging".to_string())
    }

    pub fn add_target(&mut self, target: String, level: &str) -> Result<(), String> {
        let loglevel = LogLevel::from_str(level)
            .map_err(|_| format!("invalid log level {} for target {}", level, &target))?;
        self.targets.insert(target, loglevel);
        Ok(())
    }

    pub fn get_level(&self) -> LogLevel {
        self.level
    }

    pub fn get_target_level(&self, target: &str) -> Option<LogLevel> {
        self.targets.get(target).cloned()
    }

    /// Most verbose level across the global level and all targets.
    pub fn get_max_level(&self) -> LogLevel {
        self.targets
            .values()
            .cloned()
            .fold(self.level, |max, level| if level > max { level } else { max })
    }

    /// Loads `target=level` lines. A missing file leaves the logger unchanged.
    pub fn load_config(&mut self, path: &Path) -> Result<(), String> {
        if !path.exists() {
            return Ok(());
        }
        let file = File::open(path)
            .map_err(|err| format!("failed to open file {}: {}", path.display(), err))?;
        let reader = BufReader::new(file);
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(equals) = line.find('=') {
                let (target, level) = line.split_at(equals);
                self.add_target(target.trim().to_string(), level[1..].trim())?;
            } else {
                return Err(format!("invalid logger config line {}", index + 1));
            }
        }
        Ok(())
    }

    fn is_enabled(&self, target: &str, level: LogLevel) -> bool {
        match self.targets.get(target) {
            Some(target_level) => level <= *target_level,
            None => level <= self.level,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &LogMetadata) -> bool {
        self.is_enabled(metadata.target(), metadata.level())
    }

    fn log(&self, record: &LogRecord) {
        if self.enabled(record.metadata()) {
            println!(
                "{} [{}] - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }
}
