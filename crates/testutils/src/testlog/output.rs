// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The process-wide default log output and the loggers that write to it.

use std::io::{self, Write};
use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing_subscriber::filter::Targets;

use super::config::{LogConfig, LogFormat};
use crate::error::Error;

type BoxWriter = Box<dyn Write + Send>;

/// `None` means stderr.
static DEFAULT_OUTPUT: Mutex<Option<BoxWriter>> = parking_lot::const_mutex(None);

static INIT: OnceLock<Result<(), Error>> = OnceLock::new();

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Replace the process-wide default log output, returning the previous one.
///
/// Swapping the returned writer back in restores the previous output.
/// Writers must not log through the default loggers themselves.
pub fn swap_default_output(writer: Box<dyn Write + Send>) -> Box<dyn Write + Send> {
    DEFAULT_OUTPUT
        .lock()
        .replace(writer)
        .unwrap_or_else(|| Box::new(io::stderr()))
}

/// Writes to whatever the default output currently is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOutput;

impl Write for DefaultOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match DEFAULT_OUTPUT.lock().as_mut() {
            Some(writer) => writer.write(buf),
            None => io::stderr().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        // One lock per event keeps lines from concurrent threads whole.
        match DEFAULT_OUTPUT.lock().as_mut() {
            Some(writer) => writer.write_all(buf),
            None => io::stderr().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match DEFAULT_OUTPUT.lock().as_mut() {
            Some(writer) => writer.flush(),
            None => io::stderr().flush(),
        }
    }
}

/// Install the default loggers, once per process.
///
/// A `tracing` global subscriber and a `log` logger are installed, both
/// writing to [`DefaultOutput`], configured by [`LogConfig::from_env`].
/// If either slot was already taken by someone else, the error says which;
/// the result of the first call is returned to every later caller.
pub fn init() -> Result<(), Error> {
    INIT.get_or_init(|| install(&LogConfig::from_env())).clone()
}

fn install(config: &LogConfig) -> Result<(), Error> {
    let subscriber = install_subscriber(config);
    let logger = install_bridge(config);
    subscriber.and(logger)
}

fn install_subscriber(config: &LogConfig) -> Result<(), Error> {
    let builder = tracing_subscriber::fmt()
        .with_writer(|| DefaultOutput)
        .with_env_filter(config.env_filter())
        .with_target(config.with_target)
        .with_ansi(false)
        .without_time();

    let result = match config.format {
        LogFormat::Full => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Compact => tracing::subscriber::set_global_default(builder.compact().finish()),
    };
    result.map_err(|_| Error::ForeignSubscriber)
}

fn install_bridge(config: &LogConfig) -> Result<(), Error> {
    let bridge = BRIDGE.get_or_init(|| LogBridge::new(config.targets()));
    log::set_logger(bridge).map_err(|_| Error::ForeignLogger)?;
    log::set_max_level(config.level_filter());
    Ok(())
}

/// Routes `log` records to the default output, filtered by target the way
/// the tracing subscriber's `EnvFilter` filters events.
struct LogBridge {
    targets: Targets,
}

impl LogBridge {
    fn new(targets: Targets) -> Self {
        Self { targets }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.targets
            .would_enable(metadata.target(), &tracing_level(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        let _ = DefaultOutput.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = DefaultOutput.flush();
    }
}

fn tracing_level(level: log::Level) -> tracing::Level {
    match level {
        log::Level::Error => tracing::Level::ERROR,
        log::Level::Warn => tracing::Level::WARN,
        log::Level::Info => tracing::Level::INFO,
        log::Level::Debug => tracing::Level::DEBUG,
        log::Level::Trace => tracing::Level::TRACE,
    }
}

/// `LEVEL target: message`, newline-terminated.
pub(crate) fn format_record(record: &log::Record<'_>) -> String {
    format!(
        "{:>5} {}: {}\n",
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
