// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for the process-wide default loggers.

use log::LevelFilter;
use tracing_subscriber::filter::{self, Targets};
use tracing_subscriber::EnvFilter;

use crate::env;

/// Line format of the default tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `tracing-subscriber`'s full format, span context included.
    #[default]
    Full,
    /// Single-line compact format.
    Compact,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "full" => Some(Self::Full),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Settings applied when the default loggers are first installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives, e.g. `info` or `warn,my_crate=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Build a configuration from `TESTUTILS_LOG` and `TESTUTILS_LOG_FORMAT`.
    ///
    /// Unset or unrecognized values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(level) = env::log_filter() {
            config.level = level;
        }
        if let Some(format) = env::log_format().as_deref().and_then(LogFormat::parse) {
            config.format = format;
        }
        config
    }

    /// Override the filter directives.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Filter for the tracing subscriber; invalid directives fall back to
    /// `info`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Per-target filter for `log` records, from the same directives as
    /// [`LogConfig::env_filter`].
    ///
    /// Only `target=level` and bare `level` directives are understood; if
    /// any directive is something else (a span or field filter), every
    /// target gets [`LogConfig::level_filter`].
    pub fn targets(&self) -> Targets {
        if EnvFilter::try_new(&self.level).is_err() {
            return Targets::new().with_default(filter::LevelFilter::INFO);
        }
        let parsed = match self.level.trim() {
            "" => None,
            level => level.parse::<Targets>().ok(),
        };
        parsed.unwrap_or_else(|| {
            Targets::new().with_default(match self.level_filter() {
                LevelFilter::Off => filter::LevelFilter::OFF,
                LevelFilter::Error => filter::LevelFilter::ERROR,
                LevelFilter::Warn => filter::LevelFilter::WARN,
                LevelFilter::Info => filter::LevelFilter::INFO,
                LevelFilter::Debug => filter::LevelFilter::DEBUG,
                LevelFilter::Trace => filter::LevelFilter::TRACE,
            })
        })
    }

    /// Maximum level for the `log` crate: the most verbose level named in
    /// any directive, or `info` if none parses.
    pub fn level_filter(&self) -> LevelFilter {
        self.level
            .split(',')
            .filter_map(|directive| {
                let level = directive.rsplit('=').next().unwrap_or(directive);
                level.trim().parse::<LevelFilter>().ok()
            })
            .max()
            .unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
