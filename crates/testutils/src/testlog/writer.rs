// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `io::Write` adapters that feed a test's log.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::reporter::{LogSink, Reporter};

/// Treats a test as a writer: every write becomes one [`Reporter::log`]
/// call.
#[derive(Clone)]
pub struct Writer {
    sink: Arc<dyn LogSink>,
}

impl Writer {
    pub fn new<R: Reporter + ?Sized>(t: &R) -> Self {
        Self { sink: t.log_sink() }
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.log(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Like [`Writer`], but also copies every write to another writer.
///
/// The result of a write is the other writer's, so its errors surface.
pub struct TeeWriter<W> {
    sink: Arc<dyn LogSink>,
    inner: W,
}

impl<W: Write> TeeWriter<W> {
    pub fn new<R: Reporter + ?Sized>(t: &R, inner: W) -> Self {
        Self {
            sink: t.log_sink(),
            inner,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.log(&String::from_utf8_lossy(buf));
        self.inner.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// A cloneable in-memory writer, handy as the other side of a
/// [`TeeWriter`] or as a replacement default output.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
