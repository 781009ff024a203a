//! Console appender implementation

use crate::core::{Appender, Formatter, LogRecord, LoggerError, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// Output stream of a [`ConsoleAppender`]
#[derive(Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
    Writer(Box<dyn Write + Send>),
}

impl Stream {
    /// Wrap any writer, e.g. an in-memory buffer in tests
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Stream::Writer(Box::new(writer))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
            Stream::Writer(writer) => writeln!(writer, "{}", line),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
            Stream::Writer(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => f.write_str("Stream::Stdout"),
            Stream::Stderr => f.write_str("Stream::Stderr"),
            Stream::Writer(_) => f.write_str("Stream::Writer(..)"),
        }
    }
}

pub struct ConsoleAppender {
    formatter: Formatter,
    stream: Stream,
    use_colors: bool,
    closed: bool,
}

impl ConsoleAppender {
    pub fn new(formatter: Formatter) -> Self {
        Self::with_stream(formatter, Stream::Stdout)
    }

    pub fn with_stream(formatter: Formatter, stream: Stream) -> Self {
        Self {
            formatter,
            stream,
            use_colors: false,
            closed: false,
        }
    }

    /// Color each rendered record by its level
    ///
    /// Off by default, since colors change the bytes of the layout.
    ///
    /// # Example
    ///
    /// ```
    /// use callsite_logger::appenders::ConsoleAppender;
    /// use callsite_logger::{Formatter, Mode};
    ///
    /// let appender = ConsoleAppender::new(Formatter::new(Mode::Verbose))
    ///     .with_colors(true);
    /// ```
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn paint(&self, record: &LogRecord, text: String) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return text.color(record.level.color_code()).to_string();
        }
        let _ = record;
        text
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        if self.closed {
            return Err(LoggerError::writer("console appender closed"));
        }
        let output = self.paint(record, self.formatter.render(record));
        self.stream.write_line(&output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.stream.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
