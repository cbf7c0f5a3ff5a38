//! Destinations for written source text

use std::io;
use std::io::Write;

use crate::rendering::{Color, Render};

/// A destination accepting raw text and line terminators. The writer
/// borrows its sink and never closes it; failures propagate to the caller
/// unwrapped. Sinks that understand classification can override
/// `write_tagged` to apply markup; the tag otherwise passes through
/// unobserved.
pub trait Sink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn write_newline(&mut self) -> io::Result<()> {
        self.write_text("\n")
    }

    fn write_tagged(&mut self, color: Color, text: &str) -> io::Result<()> {
        let _ = color;
        self.write_text(text)
    }
}

/// Accumulating into a String cannot fail.
impl Sink for String {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapts any byte stream (file, pipe, network socket) into a sink.
pub struct Stream<W: Write> {
    inner: W,
}

impl<W: Write> Stream<W> {
    pub fn new(inner: W) -> Stream<W> {
        Stream { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for Stream<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.inner
            .write_all(text.as_bytes())
    }
}

/// A stream sink that routes tagged text through a markup backend, so
/// terminal output gets syntax highlighting as it is written rather than
/// in a buffered second pass.
pub struct Highlighted<W: Write, R: Render> {
    inner: W,
    renderer: R,
}

impl<W: Write, R: Render> Highlighted<W, R> {
    pub fn new(inner: W, renderer: R) -> Highlighted<W, R> {
        Highlighted { inner, renderer }
    }
}

impl<W: Write, R: Render> Sink for Highlighted<W, R> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.inner
            .write_all(text.as_bytes())
    }

    fn write_tagged(&mut self, color: Color, text: &str) -> io::Result<()> {
        let styled = self
            .renderer
            .style(color, text);
        self.inner
            .write_all(styled.as_bytes())
    }
}
